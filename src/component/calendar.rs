use std::str::FromStr;

use derive_more::Deref;

use super::Event;
use crate::{ParserError, decode};

/// Events of one decoded `VCALENDAR`, ordered by start date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
#[deref(forward)]
pub struct Calendar {
    events: Vec<Event>,
}

impl Calendar {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Order events by start date. Events without a start come first and keep their
    /// relative order, as do events sharing a start date.
    pub(crate) fn sort(&mut self) {
        self.events.sort_by_key(Event::start);
    }
}

impl From<Vec<Event>> for Calendar {
    fn from(events: Vec<Event>) -> Self {
        let mut calendar = Self { events };
        calendar.sort();
        calendar
    }
}

impl IntoIterator for Calendar {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a Calendar {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromStr for Calendar {
    type Err = ParserError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        decode(input.as_bytes())
    }
}
