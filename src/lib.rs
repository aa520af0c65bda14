//! Domus ties the forecasting core, configuration, and JSON store together
//! behind a small command-line entry point.

pub mod cli;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing output once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env()
            .add_directive("domus=info".parse().unwrap())
            .add_directive("domus_core=info".parse().unwrap())
            .add_directive("domus_store_json=info".parse().unwrap());

        // stdout is reserved for the report; logs go to stderr.
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
