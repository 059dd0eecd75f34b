use chrono::{NaiveDate, NaiveDateTime};

/// Wire format of order pickup times
pub const PICKUP_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Wire format of reservation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub mod helper {
    #[cfg(not(test))]
    pub use super::get_local_now;
    #[cfg(test)]
    pub use super::mock_chrono::get_local_now;
    #[cfg(test)]
    pub use super::mock_chrono::set_mock_now;
}


#[cfg(not(test))]
pub fn get_local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn format_pickup_time(at: NaiveDateTime) -> String {
    at.format(PICKUP_TIME_FORMAT).to_string()
}

pub fn parse_pickup_time(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, PICKUP_TIME_FORMAT)
}

pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}
