use serde::Serialize;
use thiserror::Error;
use time::{util::days_in_year_month, Date, Month, Weekday};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month out of range: {0}")]
    InvalidMonth(u8),
    #[error("year out of range: {0}")]
    InvalidYear(i32),
}

/// A single cell of the month calendar. Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: Date,
    /// Day of month, 1-based.
    pub day: u8,
    #[serde(serialize_with = "crate::locale::serialize_weekday_pt")]
    pub weekday: Weekday,
}

impl CalendarDay {
    fn from_date(date: Date) -> Self {
        Self {
            date,
            day: date.day(),
            weekday: date.weekday(),
        }
    }
}

fn month_of(month: u8) -> Result<Month, CalendarError> {
    Month::try_from(month).map_err(|_| CalendarError::InvalidMonth(month))
}

fn first_of(year: i32, month: Month) -> Result<Date, CalendarError> {
    Date::from_calendar_date(year, month, 1).map_err(|_| CalendarError::InvalidYear(year))
}

/// Number of days in the given month, proleptic Gregorian.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    Ok(days_in_year_month(year, month_of(month)?))
}

/// Dense day skeleton 1..=N for the month, without week alignment.
pub fn month_days(year: i32, month: u8) -> Result<Vec<CalendarDay>, CalendarError> {
    let month = month_of(month)?;
    let mut date = first_of(year, month)?;
    let len = days_in_year_month(year, month);

    let mut days = Vec::with_capacity(len as usize);
    for _ in 0..len {
        days.push(CalendarDay::from_date(date));
        date = date.next_day().ok_or(CalendarError::InvalidYear(year))?;
    }
    Ok(days)
}

/// Days between `week_start` and `day`, walking forward through the week.
fn days_into_week(week_start: Weekday, day: Weekday) -> u8 {
    (day.number_days_from_sunday() + 7 - week_start.number_days_from_sunday()) % 7
}

/// Week-aligned calendar grid for a month.
///
/// Produces only complete 7-day weeks in chronological order. The first week
/// starts on `week_start` on or before the 1st, the last week ends on or
/// after the month's last day, and overflow cells come from the adjacent
/// months. A month that fills its weeks exactly gets no trailing padding week.
pub fn month_grid(
    year: i32,
    month: u8,
    week_start: Weekday,
) -> Result<Vec<Vec<CalendarDay>>, CalendarError> {
    let m = month_of(month)?;
    let first = first_of(year, m)?;
    let len = days_in_year_month(year, m);

    let lead = days_into_week(week_start, first.weekday());
    let week_count = (lead as u16 + len as u16).div_ceil(7);

    let mut date = first;
    for _ in 0..lead {
        date = date.previous_day().ok_or(CalendarError::InvalidYear(year))?;
    }

    let mut weeks = Vec::with_capacity(week_count as usize);
    for _ in 0..week_count {
        let mut week = Vec::with_capacity(7);
        for _ in 0..7 {
            week.push(CalendarDay::from_date(date));
            date = date.next_day().ok_or(CalendarError::InvalidYear(year))?;
        }
        weeks.push(week);
    }
    Ok(weeks)
}
