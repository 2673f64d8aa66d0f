use clap::Parser;
use finboard::{App, init_logging};
use finboard_core::Ledger;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "finboard")]
#[command(about = "A terminal dashboard for tracking income and expenses")]
struct Args {
    /// Path to the data directory for log files (default: ~/.finboard/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Start with an empty ledger instead of the illustrative sample
    #[arg(long)]
    empty: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".finboard")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let ledger = if args.empty {
        Ledger::new()
    } else {
        Ledger::sample()
    };

    let mut app = App::new(ledger);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
