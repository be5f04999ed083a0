//! Date parsing for the two textual formats WHMCS uses.
//!
//! Unparsable dates (including WHMCS's `0000-00-00` placeholder) are `None`.

use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value?.trim(), DATE_FORMAT).ok()
}

pub fn parse_datetime(value: Option<&str>) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value?.trim(), DATE_TIME_FORMAT).ok()
}
