use clap::Parser;
use tracing::debug;

use water_ui::{Cli, app, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_default_logging(&cli.log_level);
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?cli, "starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app::run(&cli, stdin.lock(), stdout.lock())
}
