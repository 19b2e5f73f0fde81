// src/infrastructure/telemetry.rs
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub type FilterLayer = reload::Layer<EnvFilter, Registry>;
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// An `EnvFilter` layer whose directives can be swapped after installation.
pub fn reloadable_filter(directives: &str) -> (FilterLayer, FilterHandle) {
    reload::Layer::new(EnvFilter::new(directives))
}

/// Installs the global subscriber with `initial` directives. Call it before
/// anything can fail, then narrow or widen the filter with [`apply_filter`]
/// once configuration is known.
pub fn init_tracing(initial: &str) -> FilterHandle {
    let (filter, handle) = reloadable_filter(initial);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
    handle
}

pub fn apply_filter(handle: &FilterHandle, directives: &str) -> Result<(), reload::Error> {
    handle.reload(EnvFilter::new(directives))
}
