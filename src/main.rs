use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use hooksubmit::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!(reg_no = %config.identity.reg_no, "Starting hooksubmit");

    match hooksubmit::bootstrap::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(stage = "failed", error = ?e, "Startup sequence failed: {e}");
            ExitCode::FAILURE
        }
    }
}
