use crate::{parser::ContentLineError, types::DateError};

#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("stream error: {0}")]
    Stream(#[source] std::io::Error),
    #[error("Line {line}: Missing a \":\" delimiter.")]
    MalformedLine { line: usize },
    #[error("invalid structure: {0}")]
    Structure(&'static str),
    #[error("Line {line}: Invalid date {value:?}: {source}")]
    DateParse {
        line: usize,
        value: String,
        #[source]
        source: DateError,
    },
}

impl From<ContentLineError> for ParserError {
    fn from(err: ContentLineError) -> Self {
        match err {
            ContentLineError::MissingDelimiter(line, _) => Self::MalformedLine { line },
            ContentLineError::Stream(err) => Self::Stream(err),
        }
    }
}
