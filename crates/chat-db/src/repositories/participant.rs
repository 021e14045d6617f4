//! PostgreSQL implementation of ParticipantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::entities::Participant;
use chat_core::traits::{ParticipantRepository, RepoResult};

use crate::models::ParticipantModel;

use super::error::{map_db_error, map_unique_violation, name_taken};

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Participant>> {
        let result = sqlx::query_as::<_, ParticipantModel>(
            r#"
            SELECT name, last_heartbeat
            FROM participants
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Participant::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, participant: &Participant) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO participants (name, last_heartbeat)
            VALUES ($1, $2)
            "#,
        )
        .bind(&participant.name)
        .bind(participant.last_heartbeat)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || name_taken(&participant.name)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Participant>> {
        let results = sqlx::query_as::<_, ParticipantModel>(
            r#"
            SELECT name, last_heartbeat
            FROM participants
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Participant::from).collect())
    }

    #[instrument(skip(self))]
    async fn touch(&self, name: &str, at_ms: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE participants
            SET last_heartbeat = $2
            WHERE name = $1
            "#,
        )
        .bind(name)
        .bind(at_ms)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_stale(&self, cutoff_ms: i64) -> RepoResult<Vec<Participant>> {
        let results = sqlx::query_as::<_, ParticipantModel>(
            r#"
            SELECT name, last_heartbeat
            FROM participants
            WHERE last_heartbeat < $1
            ORDER BY name
            "#,
        )
        .bind(cutoff_ms)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Participant::from).collect())
    }

    #[instrument(skip(self, names), fields(count = names.len()))]
    async fn delete_stale(&self, names: &[String], cutoff_ms: i64) -> RepoResult<u64> {
        if names.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            r#"
            DELETE FROM participants
            WHERE name = ANY($1) AND last_heartbeat < $2
            "#,
        )
        .bind(names)
        .bind(cutoff_ms)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM participants WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
