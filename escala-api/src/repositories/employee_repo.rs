use async_trait::async_trait;
use sqlx::PgPool;

use escala_core::{Employee, EmployeeId, UnitId};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait EmployeeRepository {
    /// Roster of a unit, ordered by full name, optionally filtered by role.
    async fn employees_of(
        &self,
        unit_id: UnitId,
        role: Option<&str>,
    ) -> Result<Vec<Employee>, RepositoryError>;
    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;
}

pub struct EmployeeRepositoryImpl {
    pool: PgPool,
}

impl EmployeeRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i32,
    full_name: String,
    registration: String,
    council_registration: Option<String>,
    grade: Option<String>,
    role: String,
    bond: String,
    weekly_hours: i32,
    unit_id: i32,
    group_name: Option<String>,
    shift_preferences: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: EmployeeId::new(row.id),
            full_name: row.full_name,
            registration: row.registration,
            council_registration: row.council_registration,
            grade: row.grade,
            role: row.role,
            bond: row.bond,
            weekly_hours: row.weekly_hours,
            unit_id: UnitId::new(row.unit_id),
            group: row.group_name,
            shift_preferences: row.shift_preferences,
        }
    }
}

const EMPLOYEE_COLUMNS: &str = "id, full_name, registration, council_registration, grade, \
     role, bond, weekly_hours, unit_id, group_name, shift_preferences";

#[async_trait]
impl EmployeeRepository for EmployeeRepositoryImpl {
    async fn employees_of(
        &self,
        unit_id: UnitId,
        role: Option<&str>,
    ) -> Result<Vec<Employee>, RepositoryError> {
        let query = format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE unit_id = $1 AND ($2::text IS NULL OR role = $2)
            ORDER BY full_name, id
            "#
        );
        let employees = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(unit_id.as_i32())
            .bind(role)
            .fetch_all(&self.pool)
            .await?;

        Ok(employees.into_iter().map(Employee::from).collect())
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let query = format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE id = $1
            "#
        );
        let employee = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee.map(Employee::from))
    }
}
