use goose::GooseError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadTestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Goose error: {0}")]
    Goose(#[from] GooseError),

    #[error("Action hub error: {0}")]
    ActionHub(#[from] action_hub::ActionHubError),
}

pub type LoadTestResult<T> = Result<T, LoadTestError>;
