use thiserror::Error;

use escala_core::{AggregationError, CalendarError, EmployeeId, UnitId};

use crate::repositories::RepositoryError;

/// Errors surfaced by schedule operations.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("unit not found: {0}")]
    UnitNotFound(UnitId),
    #[error("no schedule for unit {unit_id} in {month}/{year}")]
    ScheduleNotFound {
        unit_id: UnitId,
        month: u8,
        year: i32,
    },
    #[error("employee {employee_id} does not belong to unit {unit_id}")]
    EmployeeNotInUnit {
        employee_id: EmployeeId,
        unit_id: UnitId,
    },
    #[error("unknown shift code: {0}")]
    UnknownShiftCode(String),
    #[error("month out of range: {0}")]
    InvalidMonth(u8),
    #[error("day {day} outside the month (1..={len})")]
    InvalidDay { day: u8, len: u8 },
    #[error("year out of range: {0}")]
    InvalidYear(i32),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<CalendarError> for ScheduleError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::InvalidMonth(month) => Self::InvalidMonth(month),
            CalendarError::InvalidYear(year) => Self::InvalidYear(year),
        }
    }
}
