//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use chat_core::entities::{Message, MessageType, BROADCAST_RECIPIENT};
use chat_core::traits::{MessageRepository, RepoResult};

use crate::mappers::MessageInsert;
use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, message), fields(from = %message.from, kind = %message.message_type))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        let row = MessageInsert::new(message);

        sqlx::query(
            r#"
            INSERT INTO messages (sender, recipient, text, kind, time)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(row.sender)
        .bind(row.recipient)
        .bind(row.text)
        .bind(row.kind)
        .bind(row.time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, messages), fields(count = messages.len()))]
    async fn create_many(&self, messages: &[Message]) -> RepoResult<()> {
        if messages.is_empty() {
            return Ok(());
        }

        // One multi-row INSERT, so the batch commits or fails as a unit
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("INSERT INTO messages (sender, recipient, text, kind, time) ");
        builder.push_values(messages.iter().map(MessageInsert::new), |mut b, row| {
            b.push_bind(row.sender)
                .push_bind(row.recipient)
                .push_bind(row.text)
                .push_bind(row.kind)
                .push_bind(row.time);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_visible(&self, viewer: &str, limit: Option<usize>) -> RepoResult<Vec<Message>> {
        let limit = limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX));

        // Newest-first window, flipped back to chronological order.
        // LIMIT NULL means no limit.
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, sender, recipient, text, kind, time
            FROM (
                SELECT id, sender, recipient, text, kind, time
                FROM messages
                WHERE kind = $2 OR recipient = $3 OR recipient = $1 OR sender = $1
                ORDER BY id DESC
                LIMIT $4
            ) AS visible
            ORDER BY id ASC
            "#,
        )
        .bind(viewer)
        .bind(MessageType::Message.as_str())
        .bind(BROADCAST_RECIPIENT)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Message::try_from).collect()
    }
}
