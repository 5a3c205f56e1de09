//! Read unfolded logical lines from a byte stream.
//!
//! A raw line starting with a single space continues the previous line: the space is
//! dropped and the rest is appended without any separator. Blank raw lines are skipped.
//!
//! ```rust
//! use calread::LineReader;
//!
//! let input = b"DESCRIPTION:This is a lo\r\n ng description\r\n";
//! let line = LineReader::from_slice(input).next().unwrap().unwrap();
//! assert_eq!(line.as_str(), "DESCRIPTION:This is a long description");
//! assert_eq!(line.number(), 1);
//! ```

use std::fmt;
use std::io::{self, BufRead};

use super::LineEndings;
use crate::FOLD_MARKER;

/// One logical line, possibly assembled from several raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub(crate) inner: String,
    number: usize,
}

impl Line {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// 1-based number of the raw line this logical line started on.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.inner
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Line {}: {}", self.number, self.inner)
    }
}

pub struct LineReader<R> {
    reader: R,
    line_endings: LineEndings,
    line_number: usize,
}

impl<'a> LineReader<&'a [u8]> {
    pub fn from_slice(slice: &'a [u8]) -> Self {
        LineReader::new(slice, LineEndings::default())
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, line_endings: LineEndings) -> Self {
        LineReader {
            reader,
            line_endings,
            line_number: 0,
        }
    }

    #[inline]
    pub fn line_endings(&self) -> LineEndings {
        self.line_endings
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    /// Read the next raw line into `raw` without its terminator.
    /// Returns `false` once the stream is exhausted.
    fn read_raw(&mut self, raw: &mut Vec<u8>) -> io::Result<bool> {
        raw.clear();
        if self.reader.read_until(b'\n', raw)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;

        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        if self.line_endings == LineEndings::Strip && raw.last() == Some(&b'\r') {
            raw.pop();
        }
        Ok(true)
    }

    /// Read the next logical line. `Ok(None)` signals the end of the stream.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        let mut logical = Vec::new();
        let mut raw = Vec::new();
        let mut start = None;

        loop {
            if !self.read_raw(&mut raw)? {
                if start.is_none() {
                    return Ok(None);
                }
                break;
            }
            if raw.is_empty() {
                continue;
            }

            let segment = raw.strip_prefix(&[FOLD_MARKER]).unwrap_or(&raw);
            start.get_or_insert(self.line_number);
            logical.extend_from_slice(segment);

            if self.peek()? != Some(FOLD_MARKER) {
                break;
            }
        }

        let number = start.unwrap_or(self.line_number);
        // Validate only after unfolding, folds may split multi-octet characters
        let inner = String::from_utf8(logical).map_err(|err| {
            io::Error::new(io::ErrorKind::InvalidData, format!("Line {number}: {err}"))
        })?;
        Ok(Some(Line { inner, number }))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
