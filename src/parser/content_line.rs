//! Split the result of `LineReader` into a key and a value.
//!
//! The split happens on the first `:` of the logical line. Everything before it,
//! parameters included (`DTSTART;VALUE=DATE`), is the key. Both parts are trimmed
//! according to the configured [`LineEndings`].
//!
//! #### Warning
//!   No checks are made on the validity of keys or values.
//!
//! # Examples
//!
//! ```rust
//! let input = b"BEGIN:VCALENDAR\r\nDTSTART;VALUE=DATE:20230505\r\n";
//! let mut reader = calread::ContentLineParser::from_slice(input);
//!
//! let line = reader.next().unwrap().unwrap();
//! assert_eq!((line.name.as_str(), line.value.as_str()), ("BEGIN", "VCALENDAR"));
//! let line = reader.next().unwrap().unwrap();
//! assert_eq!(line.name, "DTSTART;VALUE=DATE");
//! ```

use std::fmt;
use std::io::{self, BufRead};

use super::{LineEndings, LineReader};
use crate::VALUE_DELIMITER;

/// Error arising when trying to split a content line
#[derive(Debug, thiserror::Error)]
pub enum ContentLineError {
    #[error("Line {0}: Missing a \"{1}\" delimiter.")]
    MissingDelimiter(usize, char),
    #[error(transparent)]
    Stream(#[from] io::Error),
}

/// A `KEY:VALUE` pair.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct ContentLine {
    /// Property name including any parameters.
    pub name: String,
    /// Property value, still escaped.
    pub value: String,
    /// Raw line number the property started on.
    pub line: usize,
}

impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "name: {}\nvalue: {:?}", self.name, self.value)
    }
}

pub struct ContentLineParser<R>(LineReader<R>);

impl<'a> ContentLineParser<&'a [u8]> {
    pub fn from_slice(slice: &'a [u8]) -> Self {
        ContentLineParser(LineReader::from_slice(slice))
    }
}

impl<R: BufRead> ContentLineParser<R> {
    pub fn new(line_reader: LineReader<R>) -> Self {
        ContentLineParser(line_reader)
    }

    fn parse(&self, line: super::Line) -> Result<ContentLine, ContentLineError> {
        let line_endings: LineEndings = self.0.line_endings();
        let Some((name, value)) = line.as_str().split_once(VALUE_DELIMITER) else {
            return Err(ContentLineError::MissingDelimiter(
                line.number(),
                VALUE_DELIMITER,
            ));
        };

        Ok(ContentLine {
            name: line_endings.trim(name).to_owned(),
            value: line_endings.trim(value).to_owned(),
            line: line.number(),
        })
    }

    /// Read and split the next logical line. `Ok(None)` signals the end of the stream.
    pub fn next_line(&mut self) -> Result<Option<ContentLine>, ContentLineError> {
        match self.0.next_line()? {
            Some(line) => self.parse(line).map(Some),
            None => Ok(None),
        }
    }
}

impl<R: BufRead> Iterator for ContentLineParser<R> {
    type Item = Result<ContentLine, ContentLineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
