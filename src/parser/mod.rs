mod error;
pub use error::ParserError;

mod line;
pub use line::{Line, LineReader};

mod content_line;
pub use content_line::{ContentLine, ContentLineError, ContentLineParser};

mod decoder;
pub use decoder::{CalendarDecoder, decode, decode_with_options};

/// How carriage returns and line feeds are treated while reading lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEndings {
    /// Drop a trailing `\r` from every raw line and trim `\r`/`\n` from keys and values.
    /// Suitable for both LF and CRLF terminated input.
    #[default]
    Strip,
    /// Keep `\r` bytes as part of the line. Keys and values are only trimmed of spaces.
    Preserve,
}

impl LineEndings {
    pub(crate) fn trim(self, input: &str) -> &str {
        match self {
            Self::Strip => input.trim_matches([' ', '\r', '\n']),
            Self::Preserve => input.trim_matches(' '),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Line ending handling, fixed for the whole decode.
    pub line_endings: LineEndings,
}

impl ParserOptions {
    pub fn preserve_line_endings() -> Self {
        Self {
            line_endings: LineEndings::Preserve,
        }
    }
}
