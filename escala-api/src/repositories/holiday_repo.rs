use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;

use escala_core::Holiday;

use super::repo_error::RepositoryError;

#[async_trait]
pub trait HolidayRepository {
    async fn holidays_in(&self, year: i32, month: u8) -> Result<Vec<Holiday>, RepositoryError>;
}

pub struct HolidayRepositoryImpl {
    pool: PgPool,
}

impl HolidayRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HolidayRow {
    date: Date,
    kind: String,
}

#[async_trait]
impl HolidayRepository for HolidayRepositoryImpl {
    async fn holidays_in(&self, year: i32, month: u8) -> Result<Vec<Holiday>, RepositoryError> {
        let rows = sqlx::query_as::<_, HolidayRow>(
            r#"
            SELECT date, kind
            FROM holidays
            WHERE EXTRACT(YEAR FROM date) = $1 AND EXTRACT(MONTH FROM date) = $2
            ORDER BY date
            "#,
        )
        .bind(year)
        .bind(month as i32)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Holiday {
                date: r.date,
                kind: r.kind,
            })
            .collect())
    }
}
