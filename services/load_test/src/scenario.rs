use std::sync::Arc;

use action_hub::{attach, ExecuteHeaders, ExecuteRequest, Outcome, EXECUTE_PATH};
use goose::prelude::*;
use tracing::{debug, warn};

use crate::config::LoadTestConfig;
use crate::errors::LoadTestResult;

pub const SCENARIO_NAME: &str = "ActionHubUser";
pub const TRANSACTION_NAME: &str = "execute debug action";

/// Runs one debug action execution per call against the goose host.
#[derive(Debug, Clone)]
pub struct DebugActionExecutor {
    simulated_download_url: String,
    headers: ExecuteHeaders,
}

impl DebugActionExecutor {
    pub fn new(config: &LoadTestConfig) -> LoadTestResult<Self> {
        Ok(Self {
            simulated_download_url: config.simulated_download_url.clone(),
            headers: ExecuteHeaders::new(&config.api_key)?,
        })
    }

    /// Sends the execute request and reports the outcome to goose.
    ///
    /// Only a 200 whose body does not carry `looker.success == true` is marked
    /// as failed here. Transport errors bubble up to goose unchanged.
    pub async fn execute(&self, user: &mut GooseUser) -> TransactionResult {
        let payload = ExecuteRequest::query(self.simulated_download_url.as_str());
        let request_builder = attach(
            user.get_request_builder(&GooseMethod::Post, EXECUTE_PATH)?,
            &payload,
            &self.headers,
        );
        let goose_request = GooseRequest::builder()
            .method(GooseMethod::Post)
            .path(EXECUTE_PATH)
            .set_request_builder(request_builder)
            .build();

        let mut goose = user.request(goose_request).await?;
        let mut response = goose.response?;

        // Moved out rather than cloned; the body is decoded as UTF-8.
        let status = response.status();
        let headers = std::mem::take(response.headers_mut());
        let body = response.text().await?;
        debug!(status = status.as_u16(), body = %body, "Action hub response");

        match Outcome::classify(status, &body) {
            Outcome::Failed { reason } => {
                warn!(%reason, "Debug action execution failed");
                user.set_failure(&reason, &mut goose.request, Some(&headers), Some(&body))
            }
            Outcome::Passed | Outcome::Unclassified { .. } => Ok(()),
        }
    }
}

/// The virtual user definition handed to goose.
pub fn action_hub_user(config: &LoadTestConfig) -> LoadTestResult<Scenario> {
    let executor = Arc::new(DebugActionExecutor::new(config)?);

    let execute: TransactionFunction = Arc::new(move |user| {
        let executor = Arc::clone(&executor);
        Box::pin(async move { executor.execute(user).await })
    });

    let scenario = Scenario::new(SCENARIO_NAME)
        .set_wait_time(config.wait_time, config.wait_time)?
        .register_transaction(Transaction::new(execute).set_name(TRANSACTION_NAME));

    Ok(scenario)
}
