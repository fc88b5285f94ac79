use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::QueryError;

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<Date, QueryError> {
    Date::parse(input.trim(), CALENDAR_DATE).map_err(|_| QueryError::InvalidDate {
        value: input.to_owned(),
    })
}

/// Formats a date as `YYYY-MM-DD`, the form both endpoints expect.
pub fn format_date(date: Date) -> String {
    // a calendar date always carries every component the description names
    date.format(CALENDAR_DATE).unwrap_or_else(|_| date.to_string())
}
