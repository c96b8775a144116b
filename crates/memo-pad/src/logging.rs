//! Tracing setup.
//!
//! The subscriber is installed before the config file is read, so problems
//! loading it are reported. It starts at `RUST_LOG` (or `info`) and the
//! filter can be swapped for the configured level afterwards.

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, reload, EnvFilter, Registry};

/// Handle for replacing the active filter after startup.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Level used until the config file has been read.
const STARTUP_LEVEL: &str = "info";

/// Returns the startup filter and whether it came from `RUST_LOG`.
pub fn startup_filter() -> (EnvFilter, bool) {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(STARTUP_LEVEL), false),
    }
}

/// Builds a subscriber writing formatted events to `make_writer`.
pub fn subscriber<W>(
    filter: EnvFilter,
    make_writer: W,
) -> (impl Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter_layer, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(make_writer));
    (subscriber, handle)
}

/// Switches the active filter to `level`.
pub fn apply_level(handle: &FilterHandle, level: &str) -> Result<()> {
    handle
        .reload(EnvFilter::new(level))
        .with_context(|| format!("Failed to apply log level '{level}'"))
}
