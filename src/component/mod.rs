//! The decoded data model.
//!
//! Events are assembled in an [`EventBuilder`] while their properties stream in and
//! only become an [`Event`] once the decoder is done with them.

mod calendar;
pub use calendar::Calendar;

mod event;
pub use event::{Event, EventBuilder};
