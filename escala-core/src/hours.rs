use std::collections::HashMap;

use serde::Serialize;

use crate::{
    employee::Employee,
    error::AggregationError,
    ids::EmployeeId,
    schedule::Assignment,
    shift::ShiftCatalog,
};

/// One schedule row: an employee's month of shift codes plus the worked-hours
/// total (CH).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeHours {
    pub employee: Employee,
    /// Shift code per day of the month, index 0 = day 1. Days without an
    /// assignment carry the empty string ("no shift recorded", which is not
    /// the same as an explicit day-off code).
    pub day_codes: Vec<String>,
    pub total_hours: i64,
}

/// Fold a schedule's assignment set into per-employee rows.
///
/// Hours are floor-truncated to whole hours per assignment before summing,
/// matching the historical accumulation. Rows are ordered by employee full
/// name, ties broken by id; employees without assignments do not appear.
pub fn employee_hours(
    assignments: &[Assignment],
    roster: &[Employee],
    catalog: &ShiftCatalog,
    days_in_month: u8,
) -> Result<Vec<EmployeeHours>, AggregationError> {
    let by_id: HashMap<EmployeeId, &Employee> =
        roster.iter().map(|e| (e.id, e)).collect();

    let mut per_employee: HashMap<EmployeeId, (Vec<String>, i64)> = HashMap::new();

    for assignment in assignments {
        if !by_id.contains_key(&assignment.employee_id) {
            return Err(AggregationError::UnknownEmployee(assignment.employee_id));
        }
        if assignment.day < 1 || assignment.day > days_in_month {
            return Err(AggregationError::DayOutOfRange {
                day: assignment.day,
                len: days_in_month,
            });
        }

        let class = catalog.classify(&assignment.shift_code)?;
        let (day_codes, total) = per_employee
            .entry(assignment.employee_id)
            .or_insert_with(|| (vec![String::new(); days_in_month as usize], 0));

        day_codes[(assignment.day - 1) as usize] = assignment.shift_code.clone();
        *total += class.hours as i64;
    }

    let mut rows: Vec<EmployeeHours> = per_employee
        .into_iter()
        .map(|(id, (day_codes, total_hours))| EmployeeHours {
            employee: (*by_id[&id]).clone(),
            day_codes,
            total_hours,
        })
        .collect();

    rows.sort_by(|a, b| {
        a.employee
            .full_name
            .cmp(&b.employee.full_name)
            .then_with(|| a.employee.id.cmp(&b.employee.id))
    });

    Ok(rows)
}
