//! Raw-mode line editing for an interactive terminal
//!
//! In raw mode Ctrl+C arrives as a key press instead of a signal, so the
//! console can end the session cleanly. Raw mode is only held while a line
//! is being read and is restored even on early return.

use std::io::Write;

use crossterm::{
    cursor::{MoveRight, RestorePosition, SavePosition},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

use super::input::{Input, LineBuffer, LineSource};
use crate::error::WalletResult;

/// What a key press did to the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The buffer changed or the cursor moved
    Edited,
    /// Enter
    Submit,
    /// Ctrl+C
    Interrupt,
    /// Ctrl+D on an empty line
    EndOfInput,
    /// Nothing to do
    Ignored,
}

/// Apply one key press to a line buffer
pub fn apply_key(buffer: &mut LineBuffer, key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Interrupt,
        KeyCode::Char('d') if ctrl => {
            if buffer.is_empty() {
                KeyAction::EndOfInput
            } else {
                buffer.delete();
                KeyAction::Edited
            }
        }
        KeyCode::Char('u') if ctrl => {
            buffer.clear();
            KeyAction::Edited
        }
        KeyCode::Char(_) if ctrl => KeyAction::Ignored,
        KeyCode::Char(c) => {
            buffer.insert(c);
            KeyAction::Edited
        }
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => {
            buffer.backspace();
            KeyAction::Edited
        }
        KeyCode::Delete => {
            buffer.delete();
            KeyAction::Edited
        }
        KeyCode::Left => {
            buffer.move_left();
            KeyAction::Edited
        }
        KeyCode::Right => {
            buffer.move_right();
            KeyAction::Edited
        }
        KeyCode::Home => {
            buffer.move_start();
            KeyAction::Edited
        }
        KeyCode::End => {
            buffer.move_end();
            KeyAction::Edited
        }
        _ => KeyAction::Ignored,
    }
}

/// Disables raw mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Line source reading key events from the terminal
pub struct TerminalSource<W> {
    out: W,
}

impl<W: Write> TerminalSource<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn redraw(&mut self, buffer: &LineBuffer) -> std::io::Result<()> {
        queue!(
            self.out,
            RestorePosition,
            Clear(ClearType::UntilNewLine),
            Print(buffer.value()),
            RestorePosition
        )?;
        if buffer.cursor() > 0 {
            let offset = u16::try_from(buffer.cursor()).unwrap_or(u16::MAX);
            queue!(self.out, MoveRight(offset))?;
        }
        self.out.flush()
    }
}

impl<W: Write> LineSource for TerminalSource<W> {
    fn read_line(&mut self, prompt: &str) -> WalletResult<Input> {
        queue!(self.out, Print(prompt), SavePosition)?;
        self.out.flush()?;

        let _raw = RawModeGuard::enable()?;
        let mut buffer = LineBuffer::new();

        loop {
            let key = match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => key,
                _ => continue,
            };

            let input = match apply_key(&mut buffer, key) {
                KeyAction::Edited => {
                    self.redraw(&buffer)?;
                    continue;
                }
                KeyAction::Ignored => continue,
                KeyAction::Submit => Input::Line(buffer.take()),
                KeyAction::Interrupt => Input::Interrupted,
                KeyAction::EndOfInput => Input::Eof,
            };

            queue!(self.out, Print("\r\n"))?;
            self.out.flush()?;
            return Ok(input);
        }
    }
}
