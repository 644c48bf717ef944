use adboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full ad row from the `ads` table.
#[derive(Debug, Clone, FromRow)]
pub struct AdRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub price: i64,
    pub account_id: DbId,
    pub created_at: Timestamp,
}
