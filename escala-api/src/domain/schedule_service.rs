use std::collections::HashSet;
use std::sync::Arc;

use time::{Month, Weekday};

use escala_core::{
    coverage_grid, days_in_month, employee_hours, month_days, month_name_pt, period_totals,
    Assignment, Schedule, UnitId,
};

use crate::repositories::{
    EmployeeRepository, ScheduleRepository, ShiftTypeRepository, UnitRepository,
};

use super::{
    error::ScheduleError,
    views::{CoverageView, ScheduleView},
};

/// Orchestrates the calendar grid, the assignment store and the aggregators
/// into the exposed schedule operations.
pub struct ScheduleService<S, U, E, T> {
    schedules: Arc<S>,
    units: Arc<U>,
    employees: Arc<E>,
    shift_types: Arc<T>,
    week_start: Weekday,
}

impl<S, U, E, T> ScheduleService<S, U, E, T>
where
    S: ScheduleRepository + Send + Sync,
    U: UnitRepository + Send + Sync,
    E: EmployeeRepository + Send + Sync,
    T: ShiftTypeRepository + Send + Sync,
{
    pub fn new(schedules: Arc<S>, units: Arc<U>, employees: Arc<E>, shift_types: Arc<T>) -> Self {
        Self {
            schedules,
            units,
            employees,
            shift_types,
            week_start: Weekday::Sunday,
        }
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// The month schedule of a unit: dense day header, one row per assigned
    /// employee, staffing totals per period.
    pub async fn build_schedule_view(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
    ) -> Result<ScheduleView, ScheduleError> {
        let unit = self
            .units
            .get_unit(unit_id)
            .await?
            .ok_or(ScheduleError::UnitNotFound(unit_id))?;
        let schedule = self
            .schedules
            .find_schedule(unit_id, month, year)
            .await?
            .ok_or(ScheduleError::ScheduleNotFound {
                unit_id,
                month,
                year,
            })?;

        let days = month_days(year, month)?;
        let len = days.len() as u8;
        let assignments = self.schedules.assignments_of(schedule.id).await?;
        let roster = self.employees.employees_of(unit_id, None).await?;
        let catalog = self.shift_types.catalog_snapshot().await?;

        let rows = employee_hours(&assignments, &roster, &catalog, len)?;
        let totals = period_totals(&assignments, &catalog, len)?;

        Ok(ScheduleView {
            schedule,
            unit_name: unit.name,
            month_name: month_name_of(month)?.to_string(),
            days,
            rows,
            period_totals: totals,
        })
    }

    /// The coverage board of a unit for one month. A month without a schedule
    /// yields the bare week grid with empty name lists.
    pub async fn build_coverage_view(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
    ) -> Result<CoverageView, ScheduleError> {
        let unit = self
            .units
            .get_unit(unit_id)
            .await?
            .ok_or(ScheduleError::UnitNotFound(unit_id))?;

        let assignments = match self.schedules.find_schedule(unit_id, month, year).await? {
            Some(schedule) => self.schedules.assignments_of(schedule.id).await?,
            None => Vec::new(),
        };
        let roster = self.employees.employees_of(unit_id, None).await?;

        let weeks = coverage_grid(&assignments, &roster, year, month, self.week_start)?;

        Ok(CoverageView {
            year,
            month,
            month_name: month_name_of(month)?.to_string(),
            unit_name: unit.name,
            weeks,
        })
    }

    /// Bulk data entry: validates every entry against the month, the unit's
    /// roster and the shift catalog, then writes through the idempotent
    /// get-or-create and the last-write-wins upsert. Nothing is written when
    /// any entry is invalid.
    pub async fn record_assignments(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
        notes: &str,
        entries: &[Assignment],
    ) -> Result<Schedule, ScheduleError> {
        self.units
            .get_unit(unit_id)
            .await?
            .ok_or(ScheduleError::UnitNotFound(unit_id))?;

        let len = days_in_month(year, month)?;
        let roster: HashSet<_> = self
            .employees
            .employees_of(unit_id, None)
            .await?
            .into_iter()
            .map(|e| e.id)
            .collect();
        let catalog = self.shift_types.catalog_snapshot().await?;

        for entry in entries {
            if entry.day < 1 || entry.day > len {
                return Err(ScheduleError::InvalidDay {
                    day: entry.day,
                    len,
                });
            }
            if !roster.contains(&entry.employee_id) {
                return Err(ScheduleError::EmployeeNotInUnit {
                    employee_id: entry.employee_id,
                    unit_id,
                });
            }
            if catalog.get(&entry.shift_code).is_none() {
                return Err(ScheduleError::UnknownShiftCode(entry.shift_code.clone()));
            }
        }

        let schedule = self
            .schedules
            .get_or_create_schedule(unit_id, month, year, notes)
            .await?;
        self.schedules
            .bulk_upsert_assignments(schedule.id, entries)
            .await?;

        Ok(schedule)
    }

    /// Drops a schedule and all its assignments.
    pub async fn remove_schedule(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
    ) -> Result<(), ScheduleError> {
        let schedule = self
            .schedules
            .find_schedule(unit_id, month, year)
            .await?
            .ok_or(ScheduleError::ScheduleNotFound {
                unit_id,
                month,
                year,
            })?;
        self.schedules.delete_schedule(schedule.id).await?;
        Ok(())
    }
}

fn month_name_of(month: u8) -> Result<&'static str, ScheduleError> {
    let month = Month::try_from(month).map_err(|_| ScheduleError::InvalidMonth(month))?;
    Ok(month_name_pt(month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockEmployeeRepository, MockScheduleRepository, MockShiftTypeRepository,
        MockUnitRepository, RepositoryError,
    };
    use escala_core::{Employee, EmployeeId, ShiftPeriod, ShiftType, Unit};

    fn unit(id: i32, name: &str) -> Unit {
        Unit {
            id: UnitId::new(id),
            name: name.to_string(),
            ordinance: None,
        }
    }

    fn employee(id: i32, name: &str, unit_id: i32) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            full_name: name.to_string(),
            registration: format!("{:07}", id),
            council_registration: None,
            grade: None,
            role: "TE".to_string(),
            bond: "EBSERH".to_string(),
            weekly_hours: 36,
            unit_id: UnitId::new(unit_id),
            group: None,
            shift_preferences: None,
        }
    }

    fn shift(code: &str, period: Option<ShiftPeriod>, hours: f64) -> ShiftType {
        ShiftType {
            code: code.to_string(),
            description: String::new(),
            period,
            hours,
            starts_at: None,
            ends_at: None,
        }
    }

    fn assignment(employee: i32, day: u8, code: &str) -> Assignment {
        Assignment {
            employee_id: EmployeeId::new(employee),
            day,
            shift_code: code.to_string(),
        }
    }

    type MockService = ScheduleService<
        MockScheduleRepository,
        MockUnitRepository,
        MockEmployeeRepository,
        MockShiftTypeRepository,
    >;

    fn service() -> (MockService, Arc<MockScheduleRepository>) {
        let schedules = Arc::new(MockScheduleRepository::new());
        let units = Arc::new(MockUnitRepository::new().with_units(vec![unit(1, "Obstetrícia")]));
        let employees = Arc::new(MockEmployeeRepository::new().with_employees(vec![
            employee(1, "Ana Souza", 1),
            employee(2, "Bruno Alves", 1),
            employee(9, "Outra Unidade", 2),
        ]));
        let shift_types = Arc::new(MockShiftTypeRepository::new().with_types(vec![
            shift("M6", None, 6.0),
            shift("M12", None, 12.0),
            shift("T6", None, 6.0),
            shift("N12", None, 12.0),
            shift("FO", Some(ShiftPeriod::Off), 0.0),
        ]));
        let service = ScheduleService::new(schedules.clone(), units, employees, shift_types);
        (service, schedules)
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let (_, store) = service();

        let first = store
            .get_or_create_schedule(UnitId::new(1), 4, 2025, "")
            .await
            .unwrap();
        let second = store
            .get_or_create_schedule(UnitId::new(1), 4, 2025, "ignored")
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.schedule_count(), 1);
    }

    #[tokio::test]
    async fn upsert_replaces_same_key() {
        let (_, store) = service();
        let schedule = store
            .get_or_create_schedule(UnitId::new(1), 4, 2025, "")
            .await
            .unwrap();

        store
            .upsert_assignment(schedule.id, EmployeeId::new(1), 5, "M6")
            .await
            .unwrap();
        store
            .upsert_assignment(schedule.id, EmployeeId::new(1), 5, "N12")
            .await
            .unwrap();

        let facts = store.assignments_of(schedule.id).await.unwrap();
        assert_eq!(facts, vec![assignment(1, 5, "N12")]);
    }

    #[tokio::test]
    async fn bulk_upsert_later_entries_win() {
        let (_, store) = service();
        let schedule = store
            .get_or_create_schedule(UnitId::new(1), 4, 2025, "")
            .await
            .unwrap();

        store
            .bulk_upsert_assignments(
                schedule.id,
                &[
                    assignment(1, 1, "M6"),
                    assignment(1, 2, "T6"),
                    assignment(1, 1, "FO"),
                ],
            )
            .await
            .unwrap();

        let facts = store.assignments_of(schedule.id).await.unwrap();
        assert_eq!(facts, vec![assignment(1, 1, "FO"), assignment(1, 2, "T6")]);
    }

    #[tokio::test]
    async fn upsert_rejects_day_outside_month() {
        let (_, store) = service();
        let schedule = store
            .get_or_create_schedule(UnitId::new(1), 4, 2025, "")
            .await
            .unwrap();

        let err = store
            .upsert_assignment(schedule.id, EmployeeId::new(1), 31, "M6")
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::OutOfRange(_)));
        assert!(store.assignments_of(schedule.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bulk_upsert_rejects_day_outside_month_without_writing() {
        let (_, store) = service();
        let schedule = store
            .get_or_create_schedule(UnitId::new(1), 4, 2025, "")
            .await
            .unwrap();

        let err = store
            .bulk_upsert_assignments(
                schedule.id,
                &[assignment(1, 1, "M6"), assignment(1, 31, "M6")],
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::OutOfRange(_)));
        assert!(store.assignments_of(schedule.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn schedule_view_matches_recorded_month() {
        let (service, _) = service();

        service
            .record_assignments(
                UnitId::new(1),
                4,
                2025,
                "Férias de Bruno de 10 a 20",
                &[
                    assignment(1, 1, "M6"),
                    assignment(1, 2, "T6"),
                    assignment(2, 1, "N12"),
                ],
            )
            .await
            .unwrap();

        let view = service
            .build_schedule_view(UnitId::new(1), 4, 2025)
            .await
            .unwrap();

        assert_eq!(view.unit_name, "Obstetrícia");
        assert_eq!(view.month_name, "Abril");
        assert_eq!(view.days.len(), 30);
        assert_eq!(view.rows.len(), 2);

        // Rows follow the declared name ordering.
        let ana = &view.rows[0];
        assert_eq!(ana.employee.full_name, "Ana Souza");
        assert_eq!(ana.day_codes[0], "M6");
        assert_eq!(ana.day_codes[1], "T6");
        assert_eq!(ana.total_hours, 12);

        assert_eq!(view.period_totals.morning[0], 1);
        assert_eq!(view.period_totals.night[0], 1);
        assert_eq!(view.period_totals.afternoon[1], 1);
    }

    #[tokio::test]
    async fn schedule_view_requires_existing_schedule() {
        let (service, _) = service();

        let err = service
            .build_schedule_view(UnitId::new(1), 4, 2025)
            .await
            .unwrap_err();
        assert!(matches!(err, ScheduleError::ScheduleNotFound { .. }));
    }

    #[tokio::test]
    async fn coverage_view_without_schedule_is_a_bare_grid() {
        let (service, _) = service();

        let view = service
            .build_coverage_view(UnitId::new(1), 4, 2025)
            .await
            .unwrap();

        assert_eq!(view.weeks.len(), 5);
        assert!(view.weeks.iter().flatten().all(|d| d.names.is_empty()));
    }

    #[tokio::test]
    async fn coverage_view_lists_staff_per_day() {
        let (service, _) = service();

        service
            .record_assignments(
                UnitId::new(1),
                4,
                2025,
                "",
                &[assignment(1, 5, "M6"), assignment(2, 5, "M12")],
            )
            .await
            .unwrap();

        let view = service
            .build_coverage_view(UnitId::new(1), 4, 2025)
            .await
            .unwrap();

        let day5 = view
            .weeks
            .iter()
            .flatten()
            .find(|d| d.in_month && d.day == 5)
            .unwrap();
        assert_eq!(day5.names, vec!["Ana Souza", "Bruno Alves"]);
    }

    #[tokio::test]
    async fn record_rejects_day_outside_month() {
        let (service, store) = service();

        let err = service
            .record_assignments(UnitId::new(1), 4, 2025, "", &[assignment(1, 31, "M6")])
            .await
            .unwrap_err();

        assert!(matches!(err, ScheduleError::InvalidDay { day: 31, len: 30 }));
        // Rejected before any store mutation.
        assert_eq!(store.schedule_count(), 0);
    }

    #[tokio::test]
    async fn record_rejects_unknown_shift_code() {
        let (service, store) = service();

        let err = service
            .record_assignments(UnitId::new(1), 4, 2025, "", &[assignment(1, 1, "Z9")])
            .await
            .unwrap_err();

        assert!(matches!(err, ScheduleError::UnknownShiftCode(code) if code == "Z9"));
        assert_eq!(store.schedule_count(), 0);
    }

    #[tokio::test]
    async fn record_rejects_foreign_employee() {
        let (service, _) = service();

        let err = service
            .record_assignments(UnitId::new(1), 4, 2025, "", &[assignment(9, 1, "M6")])
            .await
            .unwrap_err();

        assert!(matches!(err, ScheduleError::EmployeeNotInUnit { .. }));
    }

    #[tokio::test]
    async fn record_twice_replaces_instead_of_duplicating() {
        let (service, store) = service();

        service
            .record_assignments(UnitId::new(1), 4, 2025, "", &[assignment(1, 1, "M6")])
            .await
            .unwrap();
        service
            .record_assignments(UnitId::new(1), 4, 2025, "", &[assignment(1, 1, "T6")])
            .await
            .unwrap();

        let schedule = store
            .find_schedule(UnitId::new(1), 4, 2025)
            .await
            .unwrap()
            .unwrap();
        let facts = store.assignments_of(schedule.id).await.unwrap();
        assert_eq!(facts, vec![assignment(1, 1, "T6")]);
        assert_eq!(store.schedule_count(), 1);
    }

    #[tokio::test]
    async fn remove_schedule_drops_assignments() {
        let (service, store) = service();

        service
            .record_assignments(UnitId::new(1), 4, 2025, "", &[assignment(1, 1, "M6")])
            .await
            .unwrap();
        service
            .remove_schedule(UnitId::new(1), 4, 2025)
            .await
            .unwrap();

        assert_eq!(store.schedule_count(), 0);
        assert!(store
            .find_schedule(UnitId::new(1), 4, 2025)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn unknown_unit_is_not_found() {
        let (service, _) = service();

        let err = service
            .build_coverage_view(UnitId::new(42), 4, 2025)
            .await
            .unwrap_err();
        assert!(matches!(err, ScheduleError::UnitNotFound(id) if id == UnitId::new(42)));
    }
}
