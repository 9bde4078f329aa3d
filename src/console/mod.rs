//! Interactive console
//!
//! The numbered menu the binary starts by default. On a terminal, lines are
//! read in raw mode so Ctrl+C ends the session instead of killing it; piped
//! input is read line by line. A SIGINT from outside (or Ctrl+C while a
//! pipe feeds stdin) also ends the session with exit code 0.

pub mod app;
pub mod input;
pub mod terminal;

pub use app::{Console, FAREWELL};
pub use input::{Input, LineBuffer, LineSource, ReaderSource};
pub use terminal::TerminalSource;

use std::io::{self, IsTerminal, Write};
use std::process;

use crossterm::terminal::disable_raw_mode;
use tracing::debug;

use crate::display::Palette;
use crate::error::{WalletError, WalletResult};
use crate::services::LedgerService;

/// Run the menu on stdin/stdout until the operator leaves
pub fn run_interactive(service: &mut LedgerService<'_>, palette: Palette) -> WalletResult<()> {
    install_interrupt_handler()?;

    if uses_line_editor(io::stdin().is_terminal(), io::stdout().is_terminal()) {
        let source = TerminalSource::new(io::stdout());
        Console::new(service, source, io::stdout(), palette).run()
    } else {
        let source = ReaderSource::new(io::stdin().lock(), io::stdout());
        Console::new(service, source, io::stdout(), palette).run()
    }
}

/// Raw-mode editing draws with cursor escapes, so both ends must be a terminal
fn uses_line_editor(stdin_is_tty: bool, stdout_is_tty: bool) -> bool {
    stdin_is_tty && stdout_is_tty
}

/// End the session on SIGINT: restore the terminal, say goodbye, exit 0
///
/// Ledger saves are atomic renames, so the file on disk is always whole.
fn install_interrupt_handler() -> WalletResult<()> {
    ctrlc::set_handler(|| {
        debug!("interrupt signal received");
        let _ = disable_raw_mode();

        let mut out = io::stdout();
        let _ = writeln!(out, "\r\n{}", FAREWELL);
        let _ = out.flush();
        process::exit(0);
    })
    .map_err(|e| WalletError::Config(format!("Failed to install interrupt handler: {}", e)))
}
