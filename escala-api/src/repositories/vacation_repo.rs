use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;

use escala_core::{EmployeeId, Vacation};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait VacationRepository {
    async fn vacations_of(&self, employee_id: EmployeeId)
        -> Result<Vec<Vacation>, RepositoryError>;
}

pub struct VacationRepositoryImpl {
    pool: PgPool,
}

impl VacationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VacationRow {
    employee_id: i32,
    starts_on: Date,
    ends_on: Date,
}

#[async_trait]
impl VacationRepository for VacationRepositoryImpl {
    async fn vacations_of(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<Vacation>, RepositoryError> {
        let rows = sqlx::query_as::<_, VacationRow>(
            r#"
            SELECT employee_id, starts_on, ends_on
            FROM vacations
            WHERE employee_id = $1
            ORDER BY starts_on
            "#,
        )
        .bind(employee_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Vacation {
                employee_id: EmployeeId::new(r.employee_id),
                starts_on: r.starts_on,
                ends_on: r.ends_on,
            })
            .collect())
    }
}
