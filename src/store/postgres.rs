use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::{JournalStore, StateKey};
use crate::AppResult;

pub struct PgJournalStore {
    pool: PgPool,
}

impl PgJournalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS journal_state (
                user_id    TEXT NOT NULL,
                key        TEXT NOT NULL,
                data       JSONB NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                PRIMARY KEY (user_id, key)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl JournalStore for PgJournalStore {
    async fn read(&self, user_id: &str, key: StateKey) -> AppResult<Option<Value>> {
        let data = sqlx::query_scalar::<_, Value>(
            r#"SELECT data FROM journal_state WHERE user_id = $1 AND key = $2"#,
        )
        .bind(user_id)
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(data)
    }

    async fn write(&self, user_id: &str, key: StateKey, value: Value) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO journal_state (user_id, key, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, key)
            DO UPDATE SET data = EXCLUDED.data, updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(key.as_str())
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn write_many(&self, user_id: &str, values: Vec<(StateKey, Value)>) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        for (key, value) in values {
            sqlx::query(
                r#"
                INSERT INTO journal_state (user_id, key, data)
                VALUES ($1, $2, $3)
                ON CONFLICT (user_id, key)
                DO UPDATE SET data = EXCLUDED.data, updated_at = now()
                "#,
            )
            .bind(user_id)
            .bind(key.as_str())
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
