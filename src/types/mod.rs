mod date;
pub use date::{CalDate, DATE_FORMAT, DATE_LEN, DateError, decode_date};
