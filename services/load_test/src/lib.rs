pub mod config;
pub mod errors;
pub mod scenario;

pub use config::LoadTestConfig;
pub use errors::{ConfigError, LoadTestError, LoadTestResult};
pub use scenario::{action_hub_user, DebugActionExecutor};
