//! Tracing subscriber setup shared by the server and the CLI.
//!
//! Events go to stderr. Task output is log output, and the failure line of
//! a maintenance task belongs on the error stream.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter`. `LOG_FORMAT=json` switches to
/// one JSON object per event.
pub fn init_tracing(default_filter: &str) {
    let _ = dotenvy::dotenv();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let json = LogFormat::from_env() == LogFormat::Json;
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
