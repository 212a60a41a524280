use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::{EmployeeId, ScheduleId, UnitId};

/// One schedule instance: all assignments of a unit for one month.
///
/// At most one instance exists per (unit, month, year); the assignment store
/// enforces the uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: ScheduleId,
    pub unit_id: UnitId,
    /// 1..=12.
    pub month: u8,
    pub year: i32,
    /// Free-text notes, e.g. vacation windows.
    pub notes: String,
}

/// One assignment fact: an employee works a shift type on a day of the month.
///
/// At most one assignment exists per (schedule, employee, day); writing a new
/// shift type for an already-assigned day replaces the previous fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub employee_id: EmployeeId,
    /// Day of month, 1..=days_in_month.
    pub day: u8,
    pub shift_code: String,
}

/// A national or local holiday, reference data for the data-entry layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: Date,
    /// "FD" (full holiday) or "PF" (optional holiday).
    pub kind: String,
}

/// A vacation window of one employee, reference data for the data-entry layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacation {
    pub employee_id: EmployeeId,
    pub starts_on: Date,
    pub ends_on: Date,
}
