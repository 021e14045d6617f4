//! # chat-db
//!
//! Store layer implementing the repository ports from `chat-core`.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool, schema bootstrap, `FromRow`
//!   models, model → entity mappers, and repository implementations
//! - [`MemoryStore`]: an in-process store implementing both ports, for
//!   tests and single-node development runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_db::{create_pool, run_migrations, PgParticipantRepository, PoolConfig};
//!
//! async fn example(database: &chat_common::DatabaseConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&PoolConfig::from(database)).await?;
//!     run_migrations(&pool).await?;
//!     let participants = PgParticipantRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgMessageRepository, PgParticipantRepository};
