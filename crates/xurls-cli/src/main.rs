use clap::Parser;
use xurls_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    let log_opts = cli.log_options();
    if let Err(err) = logging::init_logging(&log_opts) {
        logging::init_logging_stderr(&log_opts);
        tracing::warn!("falling back to stderr logging: {:#}", err);
    }

    if let Err(err) = cli.run().await {
        eprintln!("xurls error: {:#}", err);
        std::process::exit(1);
    }
}
