//! Mock repository implementations backed by in-memory maps, for testing.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use escala_core::{
    days_in_month, Assignment, Employee, EmployeeId, Schedule, ScheduleId, ShiftCatalog,
    ShiftType, Unit, UnitId,
};

use super::{
    repo_error::RepositoryError, EmployeeRepository, ScheduleRepository, ShiftTypeRepository,
    UnitRepository,
};

/// Mock assignment store.
///
/// A single `RwLock` around both maps serializes the read-check-write
/// sequence of `get_or_create_schedule`, mirroring what the database
/// uniqueness constraint guarantees for the Postgres implementation.
#[derive(Clone, Default)]
pub struct MockScheduleRepository {
    inner: Arc<RwLock<MockScheduleState>>,
}

#[derive(Default)]
struct MockScheduleState {
    next_id: i32,
    schedules: HashMap<(UnitId, u8, i32), Schedule>,
    // BTreeMap keyed by (employee, day) gives the same stable snapshot order
    // as the Postgres ORDER BY.
    assignments: HashMap<ScheduleId, BTreeMap<(EmployeeId, u8), String>>,
}

impl MockScheduleState {
    fn month_len(&self, schedule_id: ScheduleId) -> Result<u8, RepositoryError> {
        let schedule = self
            .schedules
            .values()
            .find(|s| s.id == schedule_id)
            .ok_or_else(|| RepositoryError::NotFound(schedule_id.to_string()))?;
        days_in_month(schedule.year, schedule.month)
            .map_err(|e| RepositoryError::OutOfRange(e.to_string()))
    }
}

fn check_day(day: u8, len: u8) -> Result<(), RepositoryError> {
    if day < 1 || day > len {
        return Err(RepositoryError::OutOfRange(format!(
            "assignment day {} outside the month (1..={})",
            day, len
        )));
    }
    Ok(())
}

impl MockScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored schedules (for test assertions).
    pub fn schedule_count(&self) -> usize {
        self.inner.read().unwrap().schedules.len()
    }
}

#[async_trait]
impl ScheduleRepository for MockScheduleRepository {
    async fn get_or_create_schedule(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
        notes: &str,
    ) -> Result<Schedule, RepositoryError> {
        let mut state = self.inner.write().unwrap();
        if let Some(existing) = state.schedules.get(&(unit_id, month, year)) {
            return Ok(existing.clone());
        }

        state.next_id += 1;
        let schedule = Schedule {
            id: ScheduleId::new(state.next_id),
            unit_id,
            month,
            year,
            notes: notes.to_string(),
        };
        state
            .schedules
            .insert((unit_id, month, year), schedule.clone());
        Ok(schedule)
    }

    async fn find_schedule(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
    ) -> Result<Option<Schedule>, RepositoryError> {
        let state = self.inner.read().unwrap();
        Ok(state.schedules.get(&(unit_id, month, year)).cloned())
    }

    async fn upsert_assignment(
        &self,
        schedule_id: ScheduleId,
        employee_id: EmployeeId,
        day: u8,
        shift_code: &str,
    ) -> Result<(), RepositoryError> {
        let mut state = self.inner.write().unwrap();
        check_day(day, state.month_len(schedule_id)?)?;
        state
            .assignments
            .entry(schedule_id)
            .or_default()
            .insert((employee_id, day), shift_code.to_string());
        Ok(())
    }

    async fn bulk_upsert_assignments(
        &self,
        schedule_id: ScheduleId,
        entries: &[Assignment],
    ) -> Result<(), RepositoryError> {
        let mut state = self.inner.write().unwrap();
        let len = state.month_len(schedule_id)?;
        for entry in entries {
            check_day(entry.day, len)?;
        }
        let facts = state.assignments.entry(schedule_id).or_default();
        for entry in entries {
            facts.insert((entry.employee_id, entry.day), entry.shift_code.clone());
        }
        Ok(())
    }

    async fn assignments_of(
        &self,
        schedule_id: ScheduleId,
    ) -> Result<Vec<Assignment>, RepositoryError> {
        let state = self.inner.read().unwrap();
        Ok(state
            .assignments
            .get(&schedule_id)
            .map(|facts| {
                facts
                    .iter()
                    .map(|(&(employee_id, day), code)| Assignment {
                        employee_id,
                        day,
                        shift_code: code.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete_schedule(&self, schedule_id: ScheduleId) -> Result<(), RepositoryError> {
        let mut state = self.inner.write().unwrap();
        let key = state
            .schedules
            .iter()
            .find(|(_, s)| s.id == schedule_id)
            .map(|(key, _)| *key)
            .ok_or_else(|| RepositoryError::NotFound(schedule_id.to_string()))?;
        state.schedules.remove(&key);
        state.assignments.remove(&schedule_id);
        Ok(())
    }
}

/// Mock unit lookup.
#[derive(Clone, Default)]
pub struct MockUnitRepository {
    units: Arc<RwLock<HashMap<UnitId, Unit>>>,
}

impl MockUnitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(self, units: Vec<Unit>) -> Self {
        {
            let mut map = self.units.write().unwrap();
            for unit in units {
                map.insert(unit.id, unit);
            }
        }
        self
    }
}

#[async_trait]
impl UnitRepository for MockUnitRepository {
    async fn get_unit(&self, id: UnitId) -> Result<Option<Unit>, RepositoryError> {
        Ok(self.units.read().unwrap().get(&id).cloned())
    }

    async fn list_units(&self) -> Result<Vec<Unit>, RepositoryError> {
        let mut units: Vec<Unit> = self.units.read().unwrap().values().cloned().collect();
        units.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(units)
    }
}

/// Mock roster lookup.
#[derive(Clone, Default)]
pub struct MockEmployeeRepository {
    employees: Arc<RwLock<HashMap<EmployeeId, Employee>>>,
}

impl MockEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(self, employees: Vec<Employee>) -> Self {
        {
            let mut map = self.employees.write().unwrap();
            for employee in employees {
                map.insert(employee.id, employee);
            }
        }
        self
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn employees_of(
        &self,
        unit_id: UnitId,
        role: Option<&str>,
    ) -> Result<Vec<Employee>, RepositoryError> {
        let mut employees: Vec<Employee> = self
            .employees
            .read()
            .unwrap()
            .values()
            .filter(|e| e.unit_id == unit_id)
            .filter(|e| role.map_or(true, |r| e.role == r))
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.full_name.cmp(&b.full_name).then_with(|| a.id.cmp(&b.id)));
        Ok(employees)
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.employees.read().unwrap().get(&id).cloned())
    }
}

/// Mock shift catalog.
#[derive(Clone, Default)]
pub struct MockShiftTypeRepository {
    types: Arc<RwLock<Vec<ShiftType>>>,
}

impl MockShiftTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(self, types: Vec<ShiftType>) -> Self {
        {
            let mut stored = self.types.write().unwrap();
            *stored = types;
        }
        self
    }
}

#[async_trait]
impl ShiftTypeRepository for MockShiftTypeRepository {
    async fn list_shift_types(&self) -> Result<Vec<ShiftType>, RepositoryError> {
        Ok(self.types.read().unwrap().clone())
    }

    async fn catalog_snapshot(&self) -> Result<ShiftCatalog, RepositoryError> {
        Ok(ShiftCatalog::from_types(self.types.read().unwrap().clone()))
    }
}
