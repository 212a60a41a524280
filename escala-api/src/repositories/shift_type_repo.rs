use std::str::FromStr;

use async_trait::async_trait;
use sqlx::PgPool;
use time::Time;

use escala_core::{ShiftCatalog, ShiftPeriod, ShiftType};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait ShiftTypeRepository {
    async fn list_shift_types(&self) -> Result<Vec<ShiftType>, RepositoryError>;
    /// Immutable snapshot of the whole catalog for one aggregation pass.
    async fn catalog_snapshot(&self) -> Result<ShiftCatalog, RepositoryError>;
}

pub struct ShiftTypeRepositoryImpl {
    pool: PgPool,
}

impl ShiftTypeRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShiftTypeRow {
    code: String,
    description: String,
    period: Option<String>,
    hours: f64,
    starts_at: Option<Time>,
    ends_at: Option<Time>,
}

impl From<ShiftTypeRow> for ShiftType {
    fn from(row: ShiftTypeRow) -> Self {
        ShiftType {
            code: row.code,
            description: row.description,
            // Unparseable legacy period values fall back to the prefix
            // convention, same as a missing one.
            period: row
                .period
                .as_deref()
                .and_then(|p| ShiftPeriod::from_str(p).ok()),
            hours: row.hours,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
        }
    }
}

#[async_trait]
impl ShiftTypeRepository for ShiftTypeRepositoryImpl {
    async fn list_shift_types(&self) -> Result<Vec<ShiftType>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShiftTypeRow>(
            r#"
            SELECT code, description, period, hours, starts_at, ends_at
            FROM shift_types
            ORDER BY code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ShiftType::from).collect())
    }

    async fn catalog_snapshot(&self) -> Result<ShiftCatalog, RepositoryError> {
        let types = self.list_shift_types().await?;
        Ok(ShiftCatalog::from_types(types))
    }
}
