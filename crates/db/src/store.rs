//! Store capability trait and its Postgres implementation.

use adboard_core::ad::NewAd;
use adboard_core::feed::FeedQuery;
use adboard_core::types::DbId;
use async_trait::async_trait;

use crate::models::{AccountAuth, AdRow};
use crate::pool::DbPool;

/// Column list shared across ad queries to avoid repetition.
const COLUMNS: &str = "id, title, content, image_url, price, account_id, created_at";

/// Errors surfaced by [`Store`] implementations.
///
/// Callers treat store failures as opaque: they are logged and reported as
/// internal errors, never inspected for retry or recovery.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Other(String),
}

/// The four storage operations the service layer depends on.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist a new account, returning its id.
    async fn create_account(&self, name: &str, password_digest: &str)
        -> Result<DbId, StoreError>;

    /// Look up the credential row for a name, if the account exists.
    async fn find_account_by_name(&self, name: &str) -> Result<Option<AccountAuth>, StoreError>;

    /// Persist a new ad owned by `owner_id`, returning its id.
    async fn create_ad(&self, ad: &NewAd, owner_id: DbId) -> Result<DbId, StoreError>;

    /// Fetch one feed page matching the descriptor.
    async fn list_ads(&self, query: &FeedQuery) -> Result<Vec<AdRow>, StoreError>;
}

/// Production [`Store`] over a Postgres pool.
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_account(
        &self,
        name: &str,
        password_digest: &str,
    ) -> Result<DbId, StoreError> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO accounts (name, password_digest) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(password_digest)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    async fn find_account_by_name(&self, name: &str) -> Result<Option<AccountAuth>, StoreError> {
        let auth = sqlx::query_as::<_, AccountAuth>(
            "SELECT id, password_digest FROM accounts WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(auth)
    }

    async fn create_ad(&self, ad: &NewAd, owner_id: DbId) -> Result<DbId, StoreError> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO ads (title, content, image_url, price, account_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&ad.title)
        .bind(&ad.content)
        .bind(&ad.image_url)
        .bind(ad.price)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    async fn list_ads(&self, query: &FeedQuery) -> Result<Vec<AdRow>, StoreError> {
        let rows = sqlx::query_as::<_, AdRow>(&feed_sql(query))
            .bind(query.min_price)
            .bind(query.max_price)
            .bind(query.offset())
            .bind(query.limit())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

/// Build the feed SELECT for a descriptor.
///
/// Only the `as_sql` whitelist values are interpolated; prices, offset and
/// limit travel as bind parameters.
fn feed_sql(query: &FeedQuery) -> String {
    format!(
        "SELECT {COLUMNS} FROM ads \
         WHERE price >= $1 AND price <= $2 \
         ORDER BY {} {} \
         OFFSET $3 LIMIT $4",
        query.sort_by.as_sql(),
        query.order_by.as_sql(),
    )
}
