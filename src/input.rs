use std::collections::VecDeque;
use std::io::{self, BufRead};

/// One read from the player's input stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// The stream ended; nothing more will arrive
    Closed,
}

/// Source of player input lines
pub trait LineSource {
    /// Block until a full line is available or the stream ends.
    /// The line terminator (`\n` or `\r\n`) is stripped; nothing else is.
    fn next_line(&mut self) -> io::Result<Line>;
}

/// Production line source over any buffered reader (stdin in the binary)
pub struct ReaderLineSource<R: BufRead> {
    reader: R,
    buf: String,
}

impl<R: BufRead> ReaderLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl ReaderLineSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ReaderLineSource<R> {
    fn next_line(&mut self) -> io::Result<Line> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(Line::Closed);
        }
        Ok(Line::Text(strip_terminator(&self.buf).to_string()))
    }
}

fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Test line source fed from a fixed script; reports `Closed` once drained
#[derive(Debug, Default)]
pub struct ScriptedLineSource {
    lines: VecDeque<String>,
}

impl ScriptedLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLineSource {
    fn next_line(&mut self) -> io::Result<Line> {
        Ok(self.lines.pop_front().map_or(Line::Closed, Line::Text))
    }
}
