use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use procdash::app::App;
use procdash::config::{Config, load_config, load_config_from_path};
use procdash::error::AppError;
use procdash::event::EventHandler;
use procdash::logging;
use procdash::system::source::SysinfoSource;
use procdash::terminal::TerminalSession;

#[derive(Parser)]
#[command(
    name = "procdash",
    about = "Live process table with system CPU and memory gauges"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// CPU measurement window in milliseconds used when sorting by CPU
    #[arg(long)]
    cpu_window_ms: Option<u64>,

    /// Longest wait for a key per refresh, in milliseconds
    #[arg(long)]
    idle_timeout_ms: Option<u64>,

    /// Initial sort: none, cpu, memory, name, pid
    #[arg(long)]
    sort: Option<String>,

    /// Start with the sort order reversed
    #[arg(long, default_value_t = false)]
    reverse: bool,

    /// Write JSON log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }
    let config = load_config_for_cli(&cli);

    // SIGINT is owned by the event handler before raw mode starts.
    let mut events = EventHandler::new();
    let mut app = App::new(SysinfoSource::new(), &config);
    let result = {
        let mut session = TerminalSession::acquire();
        app.run(session.terminal(), &mut events).await
    };

    Ok(exit_code(result))
}

/// Runs after the terminal session has been dropped and restored.
fn exit_code(result: std::result::Result<(), AppError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Interrupted) => {
            tracing::info!("interrupted");
            ExitCode::from(AppError::Interrupted.exit_code())
        }
        Err(err @ AppError::TerminalTooSmall { .. }) => {
            tracing::error!(%err, "cannot draw");
            println!("{}", err.user_message());
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            tracing::error!(%err, "dashboard stopped");
            eprintln!("{}", err.user_message());
            ExitCode::from(err.exit_code())
        }
    }
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ms) = cli.cpu_window_ms {
        config.general.cpu_window_ms = ms;
    }
    if let Some(ms) = cli.idle_timeout_ms {
        config.general.idle_timeout_ms = ms;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }
    if cli.reverse {
        config.general.sort_reversed = true;
    }
    config
}
