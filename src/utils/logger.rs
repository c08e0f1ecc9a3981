use crate::utils::error::Result;
use serde::Serialize;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Diagnostics go to stderr; stdout carries only the translation.
pub fn init_cli_logger() -> std::result::Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chai_translator=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}

pub fn encode_report<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Dumps `report` as JSON at debug level. Encoding only happens when debug is on,
/// and a failure is logged instead of returned.
pub fn log_report<T: Serialize>(label: &str, report: &T) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    match encode_report(report) {
        Ok(encoded) => tracing::debug!("{}: {}", label, encoded),
        Err(e) => tracing::warn!("⚠️ Could not encode {}: {}", label, e),
    }
}
