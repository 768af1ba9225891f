//! Subscriber setup for applications embedding `timeline-plugins`.
//!
//! The crate itself only emits `tracing` events: `warn!` when a plugin hook
//! fails or a plugin disables itself, `debug!` for registry and data changes,
//! `trace!` per dispatched input event. Hosts that already run a subscriber
//! can ignore this module.

/// Filter used when `RUST_LOG` is unset: warnings from everything, registry
/// and data changes from this crate.
pub const DEFAULT_DIRECTIVES: &str = "warn,timeline_plugins=debug";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`].
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVES)
}

/// Same as [`init_default_tracing`] with caller-chosen fallback directives.
///
/// Unparseable directives leave tracing uninitialized and return `false`.
#[must_use]
pub fn init_tracing(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback_directives) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
