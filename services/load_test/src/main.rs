use action_hub_load_test::{action_hub_user, LoadTestConfig};
use anyhow::Result;
use dotenvy::dotenv;
use goose::GooseAttack;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "load_test=info,action_hub_load_test=debug,action_hub=debug,goose=info".into()),
        )
        .init();

    // Load configuration
    let config = LoadTestConfig::from_env()?;
    info!(
        simulated_download_url = %config.simulated_download_url,
        wait_ms = config.wait_time.as_millis() as u64,
        "Starting action hub load test"
    );

    // Host, users, hatch rate and run time come from goose's command line
    GooseAttack::initialize()?
        .register_scenario(action_hub_user(&config)?)
        .execute()
        .await?;

    info!("Load test finished");

    Ok(())
}
