#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install the global subscriber: human-readable on stderr, or JSON lines in
/// `log_dir/wordgrid-trace.jsonl` when a directory is given. `RUST_LOG`
/// overrides the level chosen by `verbose`.
#[cfg(feature = "trace")]
pub fn init_tracing(verbose: bool, log_dir: Option<&Path>) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let default_filter = if verbose {
            "wordgrid=trace"
        } else {
            "wordgrid=warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        let builder = tracing_subscriber::fmt()
            .with_target(true)
            .with_env_filter(filter);
        match log_dir {
            Some(dir) => builder
                .json()
                .with_writer(tracing_appender::rolling::never(dir, "wordgrid-trace.jsonl"))
                .with_span_events(FmtSpan::CLOSE)
                .init(),
            None => builder.with_writer(std::io::stderr).init(),
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_verbose: bool, _log_dir: Option<&std::path::Path>) {}
