use dotenvy::dotenv;
use tracing::error;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    if let Err(e) = server::run_memory().await {
        error!(service = "memory-server", event = "run_failed", error = %e, "server::run_memory returned error");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
