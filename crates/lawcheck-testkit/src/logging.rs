//! Tracing setup for tests

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing through the test harness
///
/// Honors `RUST_LOG`, defaulting to `warn` so falsifications show up.
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_test_tracing();
        init_test_tracing();
        tracing::warn!("logged through the test writer");
    }
}
