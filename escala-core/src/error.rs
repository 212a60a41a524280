use thiserror::Error;

use crate::{calendar::CalendarError, ids::EmployeeId, shift::ShiftCatalogError};

/// Errors raised while folding an assignment set into a view.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Catalog(#[from] ShiftCatalogError),
    #[error("assignment references an employee missing from the roster: {0}")]
    UnknownEmployee(EmployeeId),
    #[error("assignment day {day} outside the month (1..={len})")]
    DayOutOfRange { day: u8, len: u8 },
}
