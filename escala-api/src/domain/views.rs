use serde::Serialize;

use escala_core::{CalendarDay, DayCoverage, EmployeeHours, PeriodTotals, Schedule};

/// The composed month schedule: day header, per-employee rows and per-period
/// staffing totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub schedule: Schedule,
    pub unit_name: String,
    pub month_name: String,
    /// Dense day skeleton 1..=N (not week-aligned), for fixed-column rows.
    pub days: Vec<CalendarDay>,
    pub rows: Vec<EmployeeHours>,
    pub period_totals: PeriodTotals,
}

/// The coverage board: a week-aligned grid of dates with the staff on duty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageView {
    pub year: i32,
    pub month: u8,
    pub month_name: String,
    pub unit_name: String,
    pub weeks: Vec<Vec<DayCoverage>>,
}
