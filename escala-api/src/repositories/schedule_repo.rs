use async_trait::async_trait;
use sqlx::PgPool;

use escala_core::{days_in_month, Assignment, EmployeeId, Schedule, ScheduleId, UnitId};

use super::repo_error::RepositoryError;

/// The assignment store: schedules and their (employee, day, shift) facts.
#[async_trait]
pub trait ScheduleRepository {
    /// Idempotent factory: returns the schedule for (unit, month, year),
    /// creating it first if missing. Concurrent first-time calls are
    /// serialized by the store's uniqueness constraint and both observe the
    /// same schedule identity.
    async fn get_or_create_schedule(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
        notes: &str,
    ) -> Result<Schedule, RepositoryError>;

    async fn find_schedule(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
    ) -> Result<Option<Schedule>, RepositoryError>;

    /// Last write wins: replaces any existing assignment for the same
    /// (schedule, employee, day) without erroring on overwrite. The day must
    /// fall inside the schedule's month.
    async fn upsert_assignment(
        &self,
        schedule_id: ScheduleId,
        employee_id: EmployeeId,
        day: u8,
        shift_code: &str,
    ) -> Result<(), RepositoryError>;

    /// Applies upserts in input order inside one transaction; later entries
    /// for the same key override earlier ones.
    async fn bulk_upsert_assignments(
        &self,
        schedule_id: ScheduleId,
        entries: &[Assignment],
    ) -> Result<(), RepositoryError>;

    /// All facts of a schedule in a stable order, for reproducible
    /// aggregation.
    async fn assignments_of(
        &self,
        schedule_id: ScheduleId,
    ) -> Result<Vec<Assignment>, RepositoryError>;

    /// Deletes the schedule and, by cascade, its assignments.
    async fn delete_schedule(&self, schedule_id: ScheduleId) -> Result<(), RepositoryError>;
}

pub struct ScheduleRepositoryImpl {
    pool: PgPool,
}

impl ScheduleRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Month length of a stored schedule, for validating assignment days
    /// tighter than the schema's 1..=31 check.
    async fn month_len(&self, schedule_id: ScheduleId) -> Result<u8, RepositoryError> {
        let (month, year) = sqlx::query_as::<_, (i16, i32)>(
            "SELECT month, year FROM schedules WHERE id = $1",
        )
        .bind(schedule_id.as_i32())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(schedule_id.to_string()))?;

        days_in_month(year, month as u8).map_err(|e| RepositoryError::OutOfRange(e.to_string()))
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

#[derive(sqlx::FromRow)]
struct ScheduleRow {
    id: i32,
    unit_id: i32,
    month: i16,
    year: i32,
    notes: String,
}

impl From<ScheduleRow> for Schedule {
    fn from(row: ScheduleRow) -> Self {
        Schedule {
            id: ScheduleId::new(row.id),
            unit_id: UnitId::new(row.unit_id),
            month: row.month as u8,
            year: row.year,
            notes: row.notes,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    employee_id: i32,
    day: i16,
    shift_code: String,
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Assignment {
            employee_id: EmployeeId::new(row.employee_id),
            day: row.day as u8,
            shift_code: row.shift_code,
        }
    }
}

const UPSERT_ASSIGNMENT: &str = r#"
    INSERT INTO assignments (schedule_id, employee_id, day, shift_code)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (schedule_id, employee_id, day) DO UPDATE
    SET shift_code = EXCLUDED.shift_code
"#;

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    async fn get_or_create_schedule(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
        notes: &str,
    ) -> Result<Schedule, RepositoryError> {
        let inserted = sqlx::query_as::<_, ScheduleRow>(
            r#"
            INSERT INTO schedules (unit_id, month, year, notes)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (unit_id, month, year) DO NOTHING
            RETURNING id, unit_id, month, year, notes
            "#,
        )
        .bind(unit_id.as_i32())
        .bind(month as i16)
        .bind(year)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            return Ok(row.into());
        }

        // Lost the insert race (or the schedule already existed): fetch the
        // winner. A miss here means the row was deleted in between.
        self.find_schedule(unit_id, month, year)
            .await?
            .ok_or_else(|| {
                RepositoryError::Conflict(format!(
                    "schedule {}/{} for unit {} disappeared during get-or-create",
                    month, year, unit_id
                ))
            })
    }

    async fn find_schedule(
        &self,
        unit_id: UnitId,
        month: u8,
        year: i32,
    ) -> Result<Option<Schedule>, RepositoryError> {
        let schedule = sqlx::query_as::<_, ScheduleRow>(
            r#"
            SELECT id, unit_id, month, year, notes
            FROM schedules
            WHERE unit_id = $1 AND month = $2 AND year = $3
            "#,
        )
        .bind(unit_id.as_i32())
        .bind(month as i16)
        .bind(year)
        .fetch_optional(&self.pool)
        .await?;

        Ok(schedule.map(Schedule::from))
    }

    async fn upsert_assignment(
        &self,
        schedule_id: ScheduleId,
        employee_id: EmployeeId,
        day: u8,
        shift_code: &str,
    ) -> Result<(), RepositoryError> {
        let len = self.month_len(schedule_id).await?;
        check_day(day, len)?;

        sqlx::query(UPSERT_ASSIGNMENT)
            .bind(schedule_id.as_i32())
            .bind(employee_id.as_i32())
            .bind(day as i16)
            .bind(shift_code)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn bulk_upsert_assignments(
        &self,
        schedule_id: ScheduleId,
        entries: &[Assignment],
    ) -> Result<(), RepositoryError> {
        let len = self.month_len(schedule_id).await?;
        for entry in entries {
            check_day(entry.day, len)?;
        }

        let mut tx = self.pool.begin().await?;

        for entry in entries {
            sqlx::query(UPSERT_ASSIGNMENT)
                .bind(schedule_id.as_i32())
                .bind(entry.employee_id.as_i32())
                .bind(entry.day as i16)
                .bind(entry.shift_code.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn assignments_of(
        &self,
        schedule_id: ScheduleId,
    ) -> Result<Vec<Assignment>, RepositoryError> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT employee_id, day, shift_code
            FROM assignments
            WHERE schedule_id = $1
            ORDER BY employee_id, day
            "#,
        )
        .bind(schedule_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }

    async fn delete_schedule(&self, schedule_id: ScheduleId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(schedule_id.as_i32())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(schedule_id.to_string()));
        }

        Ok(())
    }
}
