use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Pick the filter directive: `--log-level`, then `RUST_LOG`, then config, then "info".
pub fn filter_directive(cli: Option<&str>, env: Option<&str>, config: Option<&str>) -> String {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("info")
        .to_string()
}

/// Install the global subscriber. Logs go to stderr so stdout stays the report.
///
/// Falls back to "info" if the directive doesn't parse.
pub fn setup_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry().with(filter).with(layer).init();
}
