use clap::Parser;
use episode_explorer::{DEFAULT_BASE_URL, DEFAULT_SUMMARY_WIDTH, ExplorerConfig, explore};
use std::process;
use tracing_subscriber::EnvFilter;

/// Browse a TV show catalog, drill into a show's episodes and filter them.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the TVMaze compatible catalog service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Column width card summaries are wrapped to
    #[arg(long, default_value_t = DEFAULT_SUMMARY_WIDTH)]
    summary_width: usize,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// Sets up logging to stderr so it does not interleave with rendered frames
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ExplorerConfig {
        base_url: cli.base_url,
        summary_width: cli.summary_width,
    };

    match explore(config).await {
        // Exit explicitly; the stdin reader may still be blocked on a read.
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("\nError during exploration: {}", e);
            process::exit(1);
        }
    }
}
