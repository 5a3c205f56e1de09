//! Assemble a `Calendar` from the stream of content lines.
//!
//! Only `VEVENT`s are decoded. Other components are not descended into: their
//! `BEGIN` is skipped and their properties land in whatever is being decoded at
//! the time, where unknown keys and stray `END`s are ignored.
//!
//! # Examples
//!
//! ```rust
//! use calread::{CalendarDecoder, ParserOptions};
//!
//! let input = b"BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:1\nEND:VEVENT\nEND:VCALENDAR\n";
//! let calendar = CalendarDecoder::from_slice(input)
//!     .with_options(ParserOptions::preserve_line_endings())
//!     .decode()
//!     .unwrap();
//! assert_eq!(calendar[0].uid(), "1");
//! ```

use std::io::{BufRead, BufReader, Read};

use super::{ContentLine, ContentLineParser, LineReader, ParserError, ParserOptions};
use crate::{
    component::{Calendar, Event, EventBuilder},
    property::EventProperty,
    text::unescape_text,
};

const BEGIN: &str = "BEGIN";
const END: &str = "END";
const VCALENDAR: &str = "VCALENDAR";
const VEVENT: &str = "VEVENT";

const EXPECTED_BEGIN: &str = "expected BEGIN:VCALENDAR";

/// Decode a calendar from any reader using the default options.
pub fn decode<R: Read>(reader: R) -> Result<Calendar, ParserError> {
    decode_with_options(reader, ParserOptions::default())
}

pub fn decode_with_options<R: Read>(
    reader: R,
    options: ParserOptions,
) -> Result<Calendar, ParserError> {
    CalendarDecoder::from_reader(BufReader::new(reader))
        .with_options(options)
        .decode()
}

/// Decoder for a single calendar. Each instance owns its input and is used up by
/// [`CalendarDecoder::decode`].
pub struct CalendarDecoder<R> {
    reader: R,
    options: ParserOptions,
}

impl<'a> CalendarDecoder<&'a [u8]> {
    pub fn from_slice(slice: &'a [u8]) -> Self {
        CalendarDecoder::from_reader(slice)
    }
}

impl<R: BufRead> CalendarDecoder<R> {
    pub fn from_reader(reader: R) -> Self {
        CalendarDecoder {
            reader,
            options: Default::default(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Read until `END:VCALENDAR` and return the events sorted by start date.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn decode(self) -> Result<Calendar, ParserError> {
        let line_reader = LineReader::new(self.reader, self.options.line_endings);
        let mut lines = ContentLineParser::new(line_reader);
        let mut calendar: Option<Calendar> = None;

        tracing::debug!(line_endings = ?self.options.line_endings, "Decoding calendar");

        let mut calendar = loop {
            let Some(line) = lines.next_line()? else {
                match calendar {
                    Some(calendar) => {
                        tracing::debug!("end of stream before END:VCALENDAR");
                        break calendar;
                    }
                    None => {
                        tracing::warn!("no VCALENDAR found in input");
                        return Err(ParserError::Structure(EXPECTED_BEGIN));
                    }
                }
            };
            tracing::trace!(line = line.line, key = %line.name, "content line");

            match line.name.as_str() {
                BEGIN => {
                    if calendar.is_none() {
                        if line.value != VCALENDAR {
                            tracing::warn!(
                                line = line.line,
                                value = %line.value,
                                "first component is not a VCALENDAR"
                            );
                            return Err(ParserError::Structure(EXPECTED_BEGIN));
                        }
                        calendar = Some(Calendar::default());
                    }
                    if line.value == VEVENT {
                        let event = decode_event(&mut lines, &line)?;
                        calendar.get_or_insert_with(Calendar::default).push(event);
                    } else if line.value != VCALENDAR {
                        tracing::debug!(
                            line = line.line,
                            component = %line.value,
                            "skipping component"
                        );
                    }
                }
                END if line.value == VCALENDAR => match calendar {
                    Some(calendar) => break calendar,
                    None => {
                        tracing::warn!(line = line.line, "END:VCALENDAR before BEGIN:VCALENDAR");
                        return Err(ParserError::Structure(EXPECTED_BEGIN));
                    }
                },
                _ => {}
            }
        };

        calendar.sort();
        tracing::debug!(count = calendar.len(), "Decoded calendar");
        Ok(calendar)
    }
}

/// Decode the properties following `BEGIN:VEVENT` up to the matching `END:VEVENT`.
///
/// Running out of input before that returns what has been collected so far.
fn decode_event<R: BufRead>(
    lines: &mut ContentLineParser<R>,
    begin: &ContentLine,
) -> Result<Event, ParserError> {
    let mut builder = EventBuilder::default();

    loop {
        let Some(line) = lines.next_line()? else {
            tracing::debug!(begin = begin.line, "end of stream inside VEVENT");
            return Ok(builder.build());
        };

        if line.name == END {
            if unescape_text(&line.value) == VEVENT {
                return Ok(builder.build());
            }
            // Typically the END of a VALARM whose BEGIN was skipped
            tracing::debug!(line = line.line, value = %line.value, "ignoring unmatched END");
            continue;
        }

        let Some(property) = EventProperty::from_key(&line.name) else {
            tracing::trace!(line = line.line, key = %line.name, "ignoring property");
            continue;
        };

        builder.set_property(property, &line)?;
    }
}
