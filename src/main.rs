use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wallet::cli::{
    handle_config_command, handle_history_command, handle_ledger_command, LedgerCommands,
};
use wallet::config::{paths::DATA_DIR_ENV, Settings, WalletPaths};
use wallet::console::run_interactive;
use wallet::display::Palette;
use wallet::services::LedgerService;
use wallet::storage::Storage;

/// Env var holding the log filter directive
const LOG_ENV: &str = "WALLET_LOG";

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Personal finance wallet: record income and expenses, see your balance",
    long_about = "A personal income and expense ledger kept in a plain text file. \
                  Run without a command for the interactive menu, or use the \
                  subcommands from scripts."
)]
struct Cli {
    /// Directory holding records.txt, audit.log and wallet.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Show the audit log of adds and edits
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config {
        /// Write adds and edits to the audit log
        #[arg(long)]
        audit: Option<bool>,
        /// Colour console output
        #[arg(long)]
        color: Option<bool>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => WalletPaths::with_base_dir(dir),
        None => WalletPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    let palette = Palette::new(settings.color && !cli.no_color && io::stdout().is_terminal());
    let storage = Storage::new(paths, &settings)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut service = LedgerService::open(&storage)?;
            run_interactive(&mut service, palette)?;
        }
        Commands::Ledger(cmd) => {
            let mut service = LedgerService::open(&storage)?;
            handle_ledger_command(&mut service, &palette, cmd)?;
        }
        Commands::History { limit } => {
            handle_history_command(&storage, limit)?;
        }
        Commands::Config { audit, color } => {
            handle_config_command(storage.paths(), &mut settings, audit, color)?;
        }
    }

    Ok(())
}
