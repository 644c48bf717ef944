//! Business logic for accounts, sign-in, and ads.
//!
//! [`Classifieds`] is the facade the HTTP handlers call into;
//! [`ClassifiedsService`] is the production implementation over the store,
//! the image checker, and the JWT configuration. Integration tests inject
//! their own collaborators through the same trait.

use std::sync::Arc;
use std::time::Duration;

use adboard_core::account::{Account, SessionToken};
use adboard_core::ad::{Ad, FeedAd, NewAd};
use adboard_core::error::CoreError;
use adboard_core::feed::FeedQuery;
use adboard_core::types::DbId;
use adboard_db::Store;
use adboard_imagecheck::ImageChecker;
use async_trait::async_trait;

use crate::auth::jwt::{issue_token, JwtConfig};
use crate::auth::password;
use crate::error::{AppError, AppResult};

/// Deadline for the ad-image probe.
pub const IMAGE_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// The business operations behind the HTTP surface.
#[async_trait]
pub trait Classifieds: Send + Sync {
    /// Create an account with the given credentials.
    async fn create_account(&self, name: &str, password: &str) -> AppResult<Account>;

    /// Exchange credentials for a session token.
    ///
    /// An unknown name and a wrong password produce the same error, so a
    /// caller cannot probe which names exist.
    async fn sign_in(&self, name: &str, password: &str) -> AppResult<SessionToken>;

    /// Create an ad owned by `owner_id`.
    ///
    /// The image is probed first; an ad with a rejected image never reaches
    /// the store.
    async fn create_ad(&self, ad: NewAd, owner_id: DbId) -> AppResult<Ad>;

    /// Fetch one feed page, marking each row owned by `viewer`.
    async fn list_feed(&self, viewer: Option<DbId>, query: &FeedQuery) -> AppResult<Vec<FeedAd>>;
}

/// Production [`Classifieds`] implementation.
pub struct ClassifiedsService {
    store: Arc<dyn Store>,
    images: Arc<dyn ImageChecker>,
    jwt: JwtConfig,
}

impl ClassifiedsService {
    pub fn new(store: Arc<dyn Store>, images: Arc<dyn ImageChecker>, jwt: JwtConfig) -> Self {
        Self { store, images, jwt }
    }
}

#[async_trait]
impl Classifieds for ClassifiedsService {
    async fn create_account(&self, name: &str, password: &str) -> AppResult<Account> {
        let digest = password::digest(password);
        let id = self.store.create_account(name, &digest).await?;

        tracing::info!(id, name, "account created");
        Ok(Account {
            id,
            name: name.to_string(),
        })
    }

    async fn sign_in(&self, name: &str, password: &str) -> AppResult<SessionToken> {
        let auth = self
            .store
            .find_account_by_name(name)
            .await?
            .ok_or(CoreError::WrongCredentials)?;

        if password::digest(password) != auth.password_digest {
            return Err(CoreError::WrongCredentials.into());
        }

        let token = issue_token(auth.id, &self.jwt)
            .map_err(|err| AppError::Internal(format!("Failed to issue token: {err}")))?;

        tracing::info!(id = auth.id, "signed in");
        Ok(SessionToken { token })
    }

    async fn create_ad(&self, ad: NewAd, owner_id: DbId) -> AppResult<Ad> {
        self.images.check(&ad.image_url, IMAGE_CHECK_TIMEOUT).await?;

        let id = self.store.create_ad(&ad, owner_id).await?;

        tracing::info!(id, owner_id, "ad created");
        Ok(Ad {
            id,
            title: ad.title,
            content: ad.content,
            image_url: ad.image_url,
            price: ad.price,
        })
    }

    async fn list_feed(&self, viewer: Option<DbId>, query: &FeedQuery) -> AppResult<Vec<FeedAd>> {
        let rows = self.store.list_ads(query).await?;
        tracing::debug!(count = rows.len(), page = query.page, "listed feed page");

        let feed = rows
            .into_iter()
            .map(|row| FeedAd {
                id: row.id,
                title: row.title,
                content: row.content,
                image_url: row.image_url,
                price: row.price,
                created_at: row.created_at,
                author_id: row.account_id,
                is_yours: viewer == Some(row.account_id),
            })
            .collect();

        Ok(feed)
    }
}
