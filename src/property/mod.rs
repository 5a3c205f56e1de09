//! Properties the event decoder understands.
//!
//! Keys are looked up in a static table after [`normalize_key`] has folded
//! parameterised date keys onto their bare name. Supporting another property is a
//! matter of adding a variant and a table entry.

use phf::phf_map;

pub const DTSTART: &str = "DTSTART";
pub const DTEND: &str = "DTEND";

/// Keys that are collapsed to their prefix, whatever parameters follow.
const PREFIX_KEYS: [&str; 2] = [DTSTART, DTEND];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventProperty {
    Uid,
    DtStart,
    DtEnd,
    Summary,
    Location,
    Description,
}

static EVENT_PROPERTIES: phf::Map<&'static str, EventProperty> = phf_map! {
    "UID" => EventProperty::Uid,
    "DTSTART" => EventProperty::DtStart,
    "DTEND" => EventProperty::DtEnd,
    "SUMMARY" => EventProperty::Summary,
    "LOCATION" => EventProperty::Location,
    "DESCRIPTION" => EventProperty::Description,
};

impl EventProperty {
    /// Look up a raw key, `None` for keys the decoder ignores.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        EVENT_PROPERTIES.get(normalize_key(key)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Uid => "UID",
            Self::DtStart => DTSTART,
            Self::DtEnd => DTEND,
            Self::Summary => "SUMMARY",
            Self::Location => "LOCATION",
            Self::Description => "DESCRIPTION",
        }
    }
}

/// Collapse `DTSTART;VALUE=DATE` and friends to `DTSTART` (likewise `DTEND`).
pub fn normalize_key(key: &str) -> &str {
    PREFIX_KEYS
        .into_iter()
        .find(|prefix| key.starts_with(prefix))
        .unwrap_or(key)
}
