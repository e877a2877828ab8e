// Tracing setup shared by every subcommand
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "docanalyzer=info,tower_http=info";
const VERBOSE_FILTER: &str = "docanalyzer=debug,tower_http=debug";

/// Install the global subscriber. `RUST_LOG` wins over the defaults.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // try_init so tests and repeated calls don't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
