use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogFormat;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
///
/// Logs go to stderr so stdout stays a clean JSON snapshot for callers.
/// Later calls are no-ops.
pub fn init_tracing(format: LogFormat) {
    INSTALLED.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let base = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(false);

        let registry = tracing_subscriber::registry().with(env_filter);
        let installed = match format {
            LogFormat::Json => registry.with(base.json()).try_init(),
            LogFormat::Pretty => registry.with(base).try_init(),
        };
        installed.ok();
    });
}
