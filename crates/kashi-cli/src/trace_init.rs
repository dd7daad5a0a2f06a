use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

const TRACE_FILE: &str = "kashitool-trace.jsonl";

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "kashi_core=debug,kashi_cli=debug"
    } else {
        "kashi_core=warn,kashi_cli=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. With `log_dir`, events are written as JSON
/// lines to `kashitool-trace.jsonl` there; otherwise as text on stderr.
///
/// Keep the returned guard alive until exit so buffered events are flushed.
pub fn init_tracing(log_dir: Option<&Path>, verbose: bool) -> Option<WorkerGuard> {
    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, TRACE_FILE);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter(verbose))
                .try_init();
            Some(guard)
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_env_filter(filter(verbose))
                .try_init();
            None
        }
    }
}
