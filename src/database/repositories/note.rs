use sqlx::PgPool;

use crate::database::{
    models::{NoteInput, NoteRecord},
    utils::sql,
};

#[derive(Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<NoteRecord>, sqlx::Error> {
        sqlx::query_as::<_, NoteRecord>(&sql(r#"
            SELECT
                id,
                date,
                content,
                color
            FROM
                notes
            ORDER BY
                id
        "#))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(&self, input: NoteInput) -> Result<NoteRecord, sqlx::Error> {
        sqlx::query_as::<_, NoteRecord>(&sql(r#"
            INSERT INTO
                notes (date, content, color)
            VALUES
                (?, ?, ?)
            RETURNING
                id,
                date,
                content,
                color
        "#))
        .bind(input.date)
        .bind(input.content)
        .bind(input.color)
        .fetch_one(&self.pool)
        .await
    }
}
