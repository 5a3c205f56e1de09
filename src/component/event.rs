use std::fmt;

use crate::{
    ParserError,
    parser::ContentLine,
    property::EventProperty,
    text::unescape_text,
    types::{CalDate, decode_date},
};

/// A fully decoded `VEVENT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    uid: String,
    start: Option<CalDate>,
    end: Option<CalDate>,
    summary: String,
    location: String,
    description: String,
}

impl Event {
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// May be empty.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// `None` when `DTSTART` was missing or too short to hold a date.
    pub fn start(&self) -> Option<CalDate> {
        self.start
    }

    pub fn end(&self) -> Option<CalDate> {
        self.end
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn mutable(self) -> EventBuilder {
        EventBuilder {
            uid: self.uid,
            start: self.start,
            end: self.end,
            summary: self.summary,
            location: self.location,
            description: self.description,
        }
    }
}

struct DisplayDate(Option<CalDate>);

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{date}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "UID:{}", self.uid)?;
        writeln!(f, "Start: {}", DisplayDate(self.start))?;
        writeln!(f, "End: {}", DisplayDate(self.end))?;
        writeln!(f, "Summary: {}", self.summary)?;
        writeln!(f, "Location: {}", self.location)?;
        write!(f, "Description: {}", self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBuilder {
    pub uid: String,
    pub start: Option<CalDate>,
    pub end: Option<CalDate>,
    pub summary: String,
    pub location: String,
    pub description: String,
}

impl EventBuilder {
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn start(mut self, start: CalDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: CalDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Store a recognised property. The value is unescaped before it is stored.
    pub fn set_property(
        &mut self,
        property: EventProperty,
        line: &ContentLine,
    ) -> Result<(), ParserError> {
        let value = unescape_text(&line.value);
        match property {
            EventProperty::Uid => self.uid = value,
            EventProperty::DtStart => self.start = parse_date(property, line.line, value)?,
            EventProperty::DtEnd => self.end = parse_date(property, line.line, value)?,
            EventProperty::Summary => self.summary = value,
            EventProperty::Location => self.location = value,
            EventProperty::Description => self.description = value,
        }
        Ok(())
    }

    pub fn build(self) -> Event {
        Event {
            uid: self.uid,
            start: self.start,
            end: self.end,
            summary: self.summary,
            location: self.location,
            description: self.description,
        }
    }
}

fn parse_date(
    property: EventProperty,
    line: usize,
    value: String,
) -> Result<Option<CalDate>, ParserError> {
    let date = decode_date(&value).map_err(|source| ParserError::DateParse {
        line,
        value: value.clone(),
        source,
    })?;
    if date.is_none() {
        tracing::debug!(
            line,
            property = property.name(),
            value = %value,
            "date too short, left unset"
        );
    }
    Ok(date)
}
