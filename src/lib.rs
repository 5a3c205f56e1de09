//! Decode iCalendar streams into a list of events.
//!
//! The decoder is layered the same way the format is:
//! - [`LineReader`] unfolds continuation lines.
//! - [`ContentLineParser`] splits each logical line into a key and a value.
//! - [`CalendarDecoder`] drives both and assembles a [`Calendar`].
//!
//! # Examples
//!
//! ```rust
//! let input = "BEGIN:VCALENDAR\r\n\
//!              BEGIN:VEVENT\r\n\
//!              UID:1@test\r\n\
//!              DTSTART:20230101\r\n\
//!              SUMMARY:New year\\, again\r\n\
//!              END:VEVENT\r\n\
//!              END:VCALENDAR\r\n";
//!
//! let calendar = calread::decode(input.as_bytes()).unwrap();
//! assert_eq!(calendar.len(), 1);
//! assert_eq!(calendar[0].summary(), "New year, again");
//! ```

const VALUE_DELIMITER: char = ':';
const FOLD_MARKER: u8 = b' ';

pub mod component;
pub use component::{Calendar, Event, EventBuilder};

pub mod parser;
pub use parser::{
    CalendarDecoder, ContentLine, ContentLineParser, LineEndings, LineReader, ParserError,
    ParserOptions, decode, decode_with_options,
};

pub mod property;

pub mod text;
pub use text::unescape_text;

pub mod types;
