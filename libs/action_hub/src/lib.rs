pub mod request;
pub mod response;

pub use request::{attach, authorization_token, ExecuteHeaders, ExecuteRequest, FormParams, EXECUTE_PATH};
pub use response::{ExecuteResponse, LookerStatus, Outcome};

#[derive(Debug, thiserror::Error)]
pub enum ActionHubError {
    #[error("Invalid header value for {name}: {source}")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
}
