//! Logging setup for hosts of the flat surface
//!
//! Log records are emitted through `tracing` when the `tracing` feature is
//! on (the default). A C host that wants to see them calls
//! [`init_tracing`] once; Rust hosts may install their own subscriber instead.

#[cfg(feature = "tracing")]
use tracing::{debug, info};

#[cfg(feature = "tracing")]
const DEFAULT_FILTER: &str = "dear_imgui_flat=info,dear_imgui_glfw=info,warn";

#[cfg(feature = "tracing")]
const DEV_FILTER: &str = "dear_imgui_flat=debug,dear_imgui_glfw=debug,info";

/// Initialize a tracing subscriber with sensible defaults.
///
/// `RUST_LOG` takes precedence over the built-in filter. Does nothing if a
/// global subscriber is already installed.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize a tracing subscriber with a custom filter
#[cfg(feature = "tracing")]
pub fn init_tracing_with_filter(filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize a tracing subscriber for development, with call sites and thread ids
#[cfg(feature = "tracing")]
pub fn init_tracing_dev() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEV_FILTER.into());

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

#[cfg(feature = "tracing")]
pub(crate) fn log_context_created() {
    info!("Dear ImGui context created");
}

#[cfg(feature = "tracing")]
pub(crate) fn log_context_destroyed() {
    info!("Dear ImGui context destroyed");
}

#[cfg(feature = "tracing")]
pub(crate) fn log_backend_shutdown(backend: &str) {
    debug!("Dear ImGui {} backend shut down", backend);
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing_with_filter(_filter: &str) {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing_dev() {
    eprintln!("Warning: tracing feature not enabled, logging disabled");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_context_created() {}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_context_destroyed() {}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_backend_shutdown(_backend: &str) {}

macro_rules! flat_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! flat_error {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::error!($($arg)*);
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn logging_macros_expand() {
        flat_debug!("debug {}", 1);
        flat_error!("error {}", 2);
    }

    #[test]
    fn init_twice_is_harmless() {
        super::init_tracing_with_filter("off");
        super::init_tracing();
    }
}
