use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Body returned by the hub when an action execution completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExecuteResponse {
    #[serde(default)]
    pub looker: LookerStatus,
}

/// Kept as raw JSON so an unexpected type in one field cannot hide the
/// other. Only a boolean `true` counts as success and only a non-empty
/// string counts as a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LookerStatus {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub message: Value,
}

impl ExecuteResponse {
    pub fn succeeded(&self) -> bool {
        self.looker.success.as_bool().unwrap_or(false)
    }

    /// The hub's own explanation, ignoring empty strings.
    pub fn message(&self) -> Option<&str> {
        self.looker.message.as_str().filter(|m| !m.is_empty())
    }
}

/// How a single execution counts towards the load test results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed { reason: String },
    /// Status other than 200. The success flag is not inspected.
    Unclassified { status: StatusCode },
}

impl Outcome {
    pub fn classify(status: StatusCode, body: &str) -> Self {
        if status != StatusCode::OK {
            return Outcome::Unclassified { status };
        }

        match serde_json::from_str::<ExecuteResponse>(body) {
            Ok(response) if response.succeeded() => Outcome::Passed,
            Ok(response) => Outcome::Failed {
                reason: response.message().unwrap_or(body).to_string(),
            },
            Err(e) => {
                debug!(error = %e, "Response body is not an execution result");
                Outcome::Failed {
                    reason: body.to_string(),
                }
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}
