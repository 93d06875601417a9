use crate::errors::AppResult;
use crate::models::entry::parse_day;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an optional `YYYY-MM-DD` argument.
pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    input.map(|s| parse_day(s)).transpose()
}
