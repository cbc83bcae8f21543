//! Opt-in `tracing` setup for hosts and the snapshot CLI.
//!
//! The library only emits events; it never installs a subscriber on its own.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "timetable_chart=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `DEFAULT_FILTER`.
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like `init_default_tracing` with an explicit fallback directive, e.g.
/// `"timetable_chart=trace"` to see per-axis tick counts.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact();
        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
