use sqlx::PgPool;

use crate::database::{
    models::{LeaveInput, LeaveRecord},
    utils::sql,
};

#[derive(Clone)]
pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All leave days, oldest row first
    pub async fn find_all(&self) -> Result<Vec<LeaveRecord>, sqlx::Error> {
        sqlx::query_as::<_, LeaveRecord>(&sql(r#"
            SELECT
                id,
                date,
                type,
                COALESCE(reason, '') AS reason
            FROM
                leaves
            ORDER BY
                id
        "#))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, input: LeaveInput) -> Result<LeaveRecord, sqlx::Error> {
        sqlx::query_as::<_, LeaveRecord>(&sql(r#"
            INSERT INTO
                leaves (date, type, reason)
            VALUES
                (?, ?, ?)
            RETURNING
                id,
                date,
                type,
                COALESCE(reason, '') AS reason
        "#))
        .bind(input.date)
        .bind(input.leave_type)
        .bind(input.reason)
        .fetch_one(&self.pool)
        .await
    }
}
