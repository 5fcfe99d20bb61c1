//! Character source for the declaration parser
//!
//! A [`Source`] is an immutable view over the lines of a text buffer plus the
//! line at which parsing should begin. It hands out [`Cursor`] values: cheap,
//! copyable positions that present the buffer as one continuous character
//! stream in which every line break reads as a single space. Copying a cursor
//! captures a restorable checkpoint, which is what the combinator engine's
//! backtracking is built on.

/// Provider of characters to be parsed.
#[derive(Debug, Clone)]
pub struct Source {
    lines: Vec<String>,
    first_line: usize,
}

impl Source {
    /// Create a source that will begin parsing at `first_line`.
    pub fn new(lines: Vec<String>, first_line: usize) -> Self {
        Self { lines, first_line }
    }

    /// Obtain a cursor positioned at the start of the first line.
    ///
    /// The same source can spawn any number of independent cursors.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            source: self,
            line: self.first_line,
            pos: 0,
        }
    }

    /// The leading whitespace run of the first line, used as the prefix for
    /// every synthesized output line.
    pub fn indentation(&self) -> String {
        let line = self.line(self.first_line).unwrap_or("");
        line.chars().take_while(|c| c.is_whitespace()).collect()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// A position within a [`Source`].
///
/// Reading past the end of a line yields a single synthesized space and moves
/// to the next line, so multi-line declarations scan as one stream. Reading
/// past the end of the last line yields `None` without advancing.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    source: &'a Source,
    line: usize,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// The character at the current position, without consuming it.
    pub fn peek(&self) -> Option<char> {
        let line = self.source.line(self.line)?;
        if self.pos >= line.len() {
            if self.line + 1 >= self.source.line_count() {
                return None;
            }
            return Some(' ');
        }
        line[self.pos..].chars().next()
    }

    /// Consume and return the character at the current position.
    pub fn next(&mut self) -> Option<char> {
        let line = self.source.line(self.line)?;
        if self.pos >= line.len() {
            if self.line + 1 >= self.source.line_count() {
                return None;
            }
            self.line += 1;
            self.pos = 0;
            return Some(' ');
        }
        let c = line[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance while the current character satisfies `cond`.
    ///
    /// Stops at the first character that fails the condition or at the end of
    /// the data. The failing character is left unconsumed.
    pub fn skip_while(&mut self, cond: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !cond(c) {
                break;
            }
            self.next();
        }
    }

    /// Advance exactly `count` positions, stopping early at the end of data.
    pub fn skip_count(&mut self, count: usize) {
        for _ in 0..count {
            if self.next().is_none() {
                break;
            }
        }
    }

    /// The text between this cursor and `to`, with each line boundary crossed
    /// reconstituted as a single space.
    ///
    /// `to` must be a checkpoint of the same source at or after `self`.
    pub fn span(&self, to: &Cursor<'a>) -> String {
        if self.line == to.line {
            let line = self.source.line(self.line).unwrap_or("");
            return line
                .get(self.pos..to.pos)
                .unwrap_or_default()
                .to_string();
        }

        let mut text = String::new();
        let first = self.source.line(self.line).unwrap_or("");
        text.push_str(first.get(self.pos..).unwrap_or_default());
        for index in self.line + 1..to.line {
            text.push(' ');
            text.push_str(self.source.line(index).unwrap_or(""));
        }
        text.push(' ');
        let last = self.source.line(to.line).unwrap_or("");
        text.push_str(last.get(..to.pos).unwrap_or_default());
        text
    }
}
