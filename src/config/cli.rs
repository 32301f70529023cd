use clap::Parser;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

// -----------------------------------------------------------------------------
// ----- Global Singleton ------------------------------------------------------

static CONFIG: OnceLock<Arc<RwLock<Config>>> = OnceLock::new();

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 60000;

// -----------------------------------------------------------------------------
// ----- Config ----------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

// -----------------------------------------------------------------------------
// ----- Config: Static --------------------------------------------------------

impl Config {
    pub fn init() {
        CONFIG.get_or_init(|| Arc::new(RwLock::new(Self::from_args())));
    }

    pub fn snapshot() -> Config {
        handle().read().clone()
    }
}

// -----------------------------------------------------------------------------
// ----- Config: Private -------------------------------------------------------

impl Config {
    fn from_args() -> Self {
        let args = Args::parse();

        Self {
            host: args.host,
            port: args.port,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Args ------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "linecat", version, about = "One-shot TCP line client")]
struct Args {
    // Host name or IPv4 literal to contact.
    #[arg(default_value = DEFAULT_HOST)]
    host: String,

    // TCP port on that host.
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,
}

// -----------------------------------------------------------------------------
// ----- Private Utils ---------------------------------------------------------

fn handle() -> Arc<RwLock<Config>> {
    CONFIG
        .get()
        .expect("config not initialized; call Config::init() first")
        .clone()
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
