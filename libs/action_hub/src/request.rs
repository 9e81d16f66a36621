use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::RequestBuilder;
use serde::Serialize;

use crate::ActionHubError;

/// Path of the debug action's execute endpoint, relative to the hub host.
pub const EXECUTE_PATH: &str = "/actions/debug/execute";

pub const ACTION_TYPE_QUERY: &str = "query";
pub const LOAD_TEST_USER_AGENT: &str = "looker-actions-load-test/0.1";
pub const SIMULATION_ID: &str = "looker-actions-load-test-simulation";

pub const X_LOOKER_INSTANCE: HeaderName = HeaderName::from_static("x-looker-instance");
pub const X_LOOKER_WEBHOOK_ID: HeaderName = HeaderName::from_static("x-looker-webhook-id");

/// Body of a debug action execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteRequest {
    #[serde(rename = "type")]
    pub action_type: &'static str,
    pub form_params: FormParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormParams {
    /// Milliseconds the debug action sleeps before answering.
    pub sleep: u64,
    pub simulated_download_url: String,
}

impl ExecuteRequest {
    /// A "query" execution that asks the hub not to sleep.
    pub fn query(simulated_download_url: impl Into<String>) -> Self {
        Self {
            action_type: ACTION_TYPE_QUERY,
            form_params: FormParams {
                sleep: 0,
                simulated_download_url: simulated_download_url.into(),
            },
        }
    }
}

/// Headers a Looker instance would send along with an action request.
///
/// The API key is checked once here, so rendering the headers for each
/// request cannot fail.
#[derive(Debug, Clone)]
pub struct ExecuteHeaders {
    authorization: HeaderValue,
}

impl ExecuteHeaders {
    pub fn new(api_key: &str) -> Result<Self, ActionHubError> {
        let mut authorization = HeaderValue::from_str(&authorization_token(api_key))
            .map_err(|source| ActionHubError::InvalidHeader {
                name: "authorization",
                source,
            })?;
        authorization.set_sensitive(true);

        Ok(Self { authorization })
    }

    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(LOAD_TEST_USER_AGENT));
        headers.insert(X_LOOKER_INSTANCE, HeaderValue::from_static(SIMULATION_ID));
        headers.insert(X_LOOKER_WEBHOOK_ID, HeaderValue::from_static(SIMULATION_ID));
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers
    }
}

pub fn authorization_token(api_key: &str) -> String {
    format!("Token token=\"{}\"", api_key)
}

/// Puts the execution body and headers on a request that already targets
/// [`EXECUTE_PATH`].
pub fn attach(
    builder: RequestBuilder,
    request: &ExecuteRequest,
    headers: &ExecuteHeaders,
) -> RequestBuilder {
    builder.headers(headers.to_header_map()).json(request)
}
