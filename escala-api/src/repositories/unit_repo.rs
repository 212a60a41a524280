use async_trait::async_trait;
use sqlx::PgPool;

use escala_core::{Unit, UnitId};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait UnitRepository {
    async fn get_unit(&self, id: UnitId) -> Result<Option<Unit>, RepositoryError>;
    async fn list_units(&self) -> Result<Vec<Unit>, RepositoryError>;
}

pub struct UnitRepositoryImpl {
    pool: PgPool,
}

impl UnitRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UnitRow {
    id: i32,
    name: String,
    ordinance: Option<String>,
}

impl From<UnitRow> for Unit {
    fn from(row: UnitRow) -> Self {
        Unit {
            id: UnitId::new(row.id),
            name: row.name,
            ordinance: row.ordinance,
        }
    }
}

#[async_trait]
impl UnitRepository for UnitRepositoryImpl {
    async fn get_unit(&self, id: UnitId) -> Result<Option<Unit>, RepositoryError> {
        let unit = sqlx::query_as::<_, UnitRow>(
            r#"
            SELECT id, name, ordinance
            FROM units
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(unit.map(Unit::from))
    }

    async fn list_units(&self) -> Result<Vec<Unit>, RepositoryError> {
        let units = sqlx::query_as::<_, UnitRow>(
            r#"
            SELECT id, name, ordinance
            FROM units
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(units.into_iter().map(Unit::from).collect())
    }
}
