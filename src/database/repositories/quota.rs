use sqlx::PgPool;

use crate::database::{
    models::{QuotaInput, QuotaRecord},
    utils::sql,
};

#[derive(Clone)]
pub struct QuotaRepository {
    pool: PgPool,
}

impl QuotaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<QuotaRecord>, sqlx::Error> {
        sqlx::query_as::<_, QuotaRecord>(&sql(r#"
            SELECT
                id,
                type,
                total
            FROM
                leave_quota
            ORDER BY
                id
        "#))
        .fetch_all(&self.pool)
        .await
    }

    /// Insert the quota for a leave type, or overwrite its total if one exists
    pub async fn upsert(&self, input: QuotaInput) -> Result<QuotaRecord, sqlx::Error> {
        sqlx::query_as::<_, QuotaRecord>(&sql(r#"
            INSERT INTO
                leave_quota (type, total)
            VALUES
                (?, ?)
            ON CONFLICT (type) DO UPDATE
            SET
                total = EXCLUDED.total
            RETURNING
                id,
                type,
                total
        "#))
        .bind(input.leave_type)
        .bind(input.total)
        .fetch_one(&self.pool)
        .await
    }
}
