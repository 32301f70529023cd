use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use linecat::{Config, Exchange};

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

const APP_NAME: &str = "linecat";

// -----------------------------------------------------------------------------
// ----- Main ------------------------------------------------------------------

#[tokio::main]
async fn main() -> ExitCode {
    setup();
    run_once().await
}

// -----------------------------------------------------------------------------
// ----- Setup -----------------------------------------------------------------

fn setup() {
    // This has to be the first thing we do, because it initializes the config
    Config::init();

    init_tracing();
}

fn init_tracing() {
    // Diagnostics go to stderr; stdout belongs to the server's bytes.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// -----------------------------------------------------------------------------
// ----- Run -------------------------------------------------------------------

async fn run_once() -> ExitCode {
    let config = Config::snapshot();

    info!("{} contacting {}:{}", APP_NAME, config.host, config.port);

    match Exchange::new(config.host, config.port).run().await {
        Ok(received) => {
            info!("{} received {} bytes", APP_NAME, received);
            ExitCode::SUCCESS
        }

        Err(e) => {
            error!("{} failed: {e}", APP_NAME);
            ExitCode::FAILURE
        }
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
