//! Binary entrypoint: wires configuration, the HTTP gateway, and the
//! console front-end together.

use dotenvy::dotenv;
use pm_console::{app::App, config, console, errors::Result, gateway::HttpGateway};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Build the HTTP gateway against the configured server
    let gateway = Arc::new(HttpGateway::new(
        &app_config.api_base_url,
        app_config.request_timeout,
    ));

    // 5. Run the console front-end until the user quits
    let export_path = app_config.export_dir.join("data_pm_mesin.pdf");
    let mut app = App::new(gateway, export_path);
    console::run_console(&mut app).await?;

    Ok(())
}
