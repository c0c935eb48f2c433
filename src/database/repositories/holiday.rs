use sqlx::PgPool;

use crate::database::{
    models::{HolidayInput, HolidayRecord},
    utils::sql,
};

#[derive(Clone)]
pub struct HolidayRepository {
    pool: PgPool,
}

impl HolidayRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<HolidayRecord>, sqlx::Error> {
        sqlx::query_as::<_, HolidayRecord>(&sql(r#"
            SELECT
                id,
                date,
                name
            FROM
                holidays
            ORDER BY
                id
        "#))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, input: HolidayInput) -> Result<HolidayRecord, sqlx::Error> {
        sqlx::query_as::<_, HolidayRecord>(&sql(r#"
            INSERT INTO
                holidays (date, name)
            VALUES
                (?, ?)
            RETURNING
                id,
                date,
                name
        "#))
        .bind(input.date)
        .bind(input.name)
        .fetch_one(&self.pool)
        .await
    }
}
