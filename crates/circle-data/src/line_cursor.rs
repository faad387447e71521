//! Line-at-a-time reader shared by the record parsers.
//!
//! Free text in world files runs until a line ending with `~`, so the
//! cursor only ever looks at line prefixes and suffixes to find boundaries.
//! Blank lines and lines that happen to start with `#` or `S` inside a text
//! block are content like any other.

use std::io::BufRead;

use crate::error::ParseError;

/// Cursor over the lines of a world file, tracking a 1-based line number.
pub struct LineCursor<R> {
    reader: R,
    buf: Vec<u8>,
    current: String,
    line: usize,
}

impl<'a> LineCursor<&'a [u8]> {
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            current: String::new(),
            line: 0,
        }
    }

    /// Number of the line last read, 0 before the first advance.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Text of the line last read, without its line ending.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Move to the next line. Returns `false` at end of input, leaving the
    /// line counter untouched.
    pub fn advance(&mut self) -> Result<bool, ParseError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        // Area files predate UTF-8; stray Latin-1 bytes are replaced, not fatal.
        self.current = String::from_utf8_lossy(&self.buf).into_owned();
        self.line += 1;
        Ok(true)
    }

    /// Like [`advance`](Self::advance), but running out of lines is an error.
    pub fn require_advance(&mut self) -> Result<(), ParseError> {
        if self.advance()? {
            Ok(())
        } else {
            Err(ParseError::UnexpectedEndOfInput)
        }
    }

    /// Collect lines until one ends with `terminator`. That line contributes
    /// only the text before the terminator. Lines are joined with `\n`.
    pub fn scan_until_suffix(&mut self, terminator: &str) -> Result<String, ParseError> {
        let mut lines = Vec::new();
        loop {
            self.require_advance()?;
            if let Some(head) = self.current.strip_suffix(terminator) {
                lines.push(head.to_string());
                return Ok(lines.join("\n"));
            }
            lines.push(self.current.clone());
        }
    }

    /// Collect lines until one starts with any of `prefixes`. The matching
    /// line is not part of the result and stays current.
    pub fn scan_until_any_prefix(&mut self, prefixes: &[&str]) -> Result<String, ParseError> {
        let mut lines = Vec::new();
        loop {
            self.require_advance()?;
            if prefixes.iter().any(|p| self.current.starts_with(*p)) {
                return Ok(lines.join("\n"));
            }
            lines.push(self.current.clone());
        }
    }

    /// Collect lines until one whose trimmed text equals `sentinel`. The
    /// sentinel line is consumed but not returned.
    pub fn scan_until_sentinel(&mut self, sentinel: &str) -> Result<String, ParseError> {
        let mut lines = Vec::new();
        loop {
            self.require_advance()?;
            if self.current.trim() == sentinel {
                return Ok(lines.join("\n"));
            }
            lines.push(self.current.clone());
        }
    }
}
