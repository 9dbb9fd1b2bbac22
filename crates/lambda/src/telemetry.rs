//! Tracing subscriber setup for the Lambda binaries.

/// Install the global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Timestamps and
/// ANSI colours are left to CloudWatch.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();
}
