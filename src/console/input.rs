//! Line input for the console
//!
//! A `LineSource` hands the console one line per prompt, or tells it the
//! operator wants out (Ctrl+C, end of input).

use std::io::{BufRead, Write};

use crate::error::WalletResult;

/// What a prompt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line, without its terminator
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// End of input (Ctrl+D, closed pipe)
    Eof,
}

/// Something that can prompt for and read a line
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> WalletResult<Input>;
}

/// Line source over any buffered reader, for pipes and tests
pub struct ReaderSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    /// Read lines from `reader`, echo prompts to `writer`
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> WalletResult<Input> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Input::Eof);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Input::Line(trimmed.to_string()))
    }
}

/// Editable line with a cursor
///
/// The cursor counts characters, not bytes, so Cyrillic input edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    content: String,
    cursor: usize,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Take the content, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.content
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_source_lines_then_eof() {
        let mut prompts = Vec::new();
        let mut source = ReaderSource::new(Cursor::new("1\r\nДоход\n"), &mut prompts);

        assert_eq!(source.read_line("> ").unwrap(), Input::Line("1".into()));
        assert_eq!(source.read_line("> ").unwrap(), Input::Line("Доход".into()));
        assert_eq!(source.read_line("> ").unwrap(), Input::Eof);
        drop(source);

        assert_eq!(String::from_utf8(prompts).unwrap(), "> > > ");
    }

    #[test]
    fn test_reader_source_keeps_inner_spaces() {
        let mut source = ReaderSource::new(Cursor::new(" coffee and cake \n"), std::io::sink());
        assert_eq!(
            source.read_line("").unwrap(),
            Input::Line(" coffee and cake ".into())
        );
    }

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut buffer = LineBuffer::new();
        for c in "Дохд".chars() {
            buffer.insert(c);
        }
        buffer.move_left();
        buffer.insert('о');
        assert_eq!(buffer.value(), "Доход");
        assert_eq!(buffer.cursor(), 4);

        buffer.move_end();
        buffer.backspace();
        assert_eq!(buffer.value(), "Дохо");
    }

    #[test]
    fn test_delete_and_movement() {
        let mut buffer = LineBuffer::new();
        for c in "abc".chars() {
            buffer.insert(c);
        }
        buffer.move_start();
        buffer.delete();
        assert_eq!(buffer.value(), "bc");

        buffer.move_left();
        assert_eq!(buffer.cursor(), 0);
        buffer.move_right();
        buffer.move_right();
        buffer.move_right();
        assert_eq!(buffer.cursor(), 2);
        buffer.delete();
        assert_eq!(buffer.value(), "bc");
    }

    #[test]
    fn test_take_and_clear() {
        let mut buffer = LineBuffer::new();
        buffer.insert('x');
        assert_eq!(buffer.take(), "x");
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor(), 0);

        buffer.insert('y');
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
