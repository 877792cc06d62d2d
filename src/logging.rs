//! Installs the `log` backend: `console_log` in the browser, a
//! `tracing-subscriber` fmt layer on native targets.

use log::LevelFilter;

/// Install the logger for this process. A second call is ignored.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        return;
    };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {err}");
    }
}

/// Install the logger for this process. A second call is ignored.
///
/// `RUST_LOG` overrides `level`; `log` records reach the subscriber through
/// the `tracing-log` bridge.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::builder()
        .with_default_directive(as_tracing_level(level).into())
        .from_env_lossy();

    if let Err(err) = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
    {
        log::debug!("logger already installed: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn as_tracing_level(level: LevelFilter) -> tracing_subscriber::filter::LevelFilter {
    use tracing_subscriber::filter::LevelFilter as Tracing;

    match level {
        LevelFilter::Off => Tracing::OFF,
        LevelFilter::Error => Tracing::ERROR,
        LevelFilter::Warn => Tracing::WARN,
        LevelFilter::Info => Tracing::INFO,
        LevelFilter::Debug => Tracing::DEBUG,
        LevelFilter::Trace => Tracing::TRACE,
    }
}
