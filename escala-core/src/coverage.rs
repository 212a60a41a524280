use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Weekday};

use crate::{
    calendar::{days_in_month, month_grid},
    employee::Employee,
    error::AggregationError,
    ids::EmployeeId,
    schedule::Assignment,
    shift::{ShiftCatalog, ShiftPeriod},
};

/// Who is on duty on one calendar date. Cells from adjacent months carry an
/// empty name list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCoverage {
    pub date: Date,
    pub day: u8,
    #[serde(serialize_with = "crate::locale::serialize_weekday_pt")]
    pub weekday: Weekday,
    pub in_month: bool,
    pub names: Vec<String>,
}

/// Per-day staffing counts by period, each vector indexed day-1..N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub morning: Vec<u32>,
    pub afternoon: Vec<u32>,
    pub night: Vec<u32>,
}

/// Fold a schedule's assignment set onto the week-aligned month grid.
///
/// Names per date follow the same declared ordering as the schedule rows
/// (full name, ties by id) so the two views agree.
pub fn coverage_grid(
    assignments: &[Assignment],
    roster: &[Employee],
    year: i32,
    month: u8,
    week_start: Weekday,
) -> Result<Vec<Vec<DayCoverage>>, AggregationError> {
    let by_id: HashMap<EmployeeId, &Employee> =
        roster.iter().map(|e| (e.id, e)).collect();
    let len = days_in_month(year, month)?;

    let mut on_duty: HashMap<u8, Vec<&Employee>> = HashMap::new();
    for assignment in assignments {
        let employee = by_id
            .get(&assignment.employee_id)
            .ok_or(AggregationError::UnknownEmployee(assignment.employee_id))?;
        if assignment.day < 1 || assignment.day > len {
            return Err(AggregationError::DayOutOfRange {
                day: assignment.day,
                len,
            });
        }
        on_duty.entry(assignment.day).or_default().push(employee);
    }
    for staff in on_duty.values_mut() {
        staff.sort_by(|a, b| a.full_name.cmp(&b.full_name).then_with(|| a.id.cmp(&b.id)));
    }

    let target_month = time::Month::try_from(month)
        .map_err(|_| crate::calendar::CalendarError::InvalidMonth(month))?;

    let weeks = month_grid(year, month, week_start)?;
    let grid = weeks
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|cell| {
                    let in_month = cell.date.year() == year && cell.date.month() == target_month;
                    let names = if in_month {
                        on_duty
                            .get(&cell.day)
                            .map(|staff| staff.iter().map(|e| e.full_name.clone()).collect())
                            .unwrap_or_default()
                    } else {
                        Vec::new()
                    };
                    DayCoverage {
                        date: cell.date,
                        day: cell.day,
                        weekday: cell.weekday,
                        in_month,
                        names,
                    }
                })
                .collect()
        })
        .collect();

    Ok(grid)
}

/// Count assignments per day and period over the dense day index 1..=N.
///
/// Each assignment lands in at most one bucket, decided by the catalog's
/// resolved classification; off and unclassified types count toward none.
pub fn period_totals(
    assignments: &[Assignment],
    catalog: &ShiftCatalog,
    days_in_month: u8,
) -> Result<PeriodTotals, AggregationError> {
    let mut totals = PeriodTotals {
        morning: vec![0; days_in_month as usize],
        afternoon: vec![0; days_in_month as usize],
        night: vec![0; days_in_month as usize],
    };

    for assignment in assignments {
        if assignment.day < 1 || assignment.day > days_in_month {
            return Err(AggregationError::DayOutOfRange {
                day: assignment.day,
                len: days_in_month,
            });
        }
        let idx = (assignment.day - 1) as usize;
        match catalog.classify(&assignment.shift_code)?.period {
            Some(ShiftPeriod::Morning) => totals.morning[idx] += 1,
            Some(ShiftPeriod::Afternoon) => totals.afternoon[idx] += 1,
            Some(ShiftPeriod::Night) => totals.night[idx] += 1,
            Some(ShiftPeriod::Off) | None => {}
        }
    }

    Ok(totals)
}
