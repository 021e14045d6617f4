//! Message database model

use sqlx::FromRow;

/// Database model for messages table
///
/// `sender`, `recipient` and `kind` hold the entity's `from`, `to` and
/// `type`, which are reserved words in SQL.
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub sender: String,
    pub recipient: String,
    pub text: String,
    pub kind: String,
    pub time: String,
}
