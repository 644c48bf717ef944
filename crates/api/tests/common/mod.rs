use std::sync::{Arc, Mutex};
use std::time::Duration;

use adboard_core::ad::NewAd;
use adboard_core::feed::{FeedQuery, SortKey, SortOrder};
use adboard_core::types::{DbId, Timestamp};
use adboard_db::models::{AccountAuth, AdRow};
use adboard_db::{Store, StoreError};
use adboard_imagecheck::{ImageChecker, ImageError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::TimeZone;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use adboard_api::auth::jwt::JwtConfig;
use adboard_api::config::ServerConfig;
use adboard_api::routes;
use adboard_api::service::ClassifiedsService;
use adboard_api::state::AppState;

/// JWT secret shared by every test app, so tests can mint their own tokens.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            token_expiry_hours: 24,
        },
    }
}

/* --------------------------------------------------------------------------
   In-memory collaborators
   -------------------------------------------------------------------------- */

struct StoredAccount {
    id: DbId,
    name: String,
    password_digest: String,
}

/// In-memory [`Store`] used in place of Postgres.
///
/// Implements the same observable contract as the production store: ids are
/// assigned sequentially, account names are unique, and `list_ads` applies
/// the full descriptor (price bounds, sort, offset, limit).
#[derive(Default)]
pub struct MemoryStore {
    accounts: Mutex<Vec<StoredAccount>>,
    ads: Mutex<Vec<AdRow>>,
}

impl MemoryStore {
    /// Number of stored ads, for asserting that failed creations persisted
    /// nothing.
    pub fn ad_count(&self) -> usize {
        self.ads.lock().unwrap().len()
    }

    /// Seed an ad row directly, bypassing the HTTP surface, with a chosen
    /// owner, price, and creation time.
    pub fn seed_ad(&self, owner_id: DbId, price: i64, created_at: Timestamp) -> DbId {
        let mut ads = self.ads.lock().unwrap();
        let id = ads.len() as DbId + 1;
        ads.push(AdRow {
            id,
            title: format!("Seeded ad {id}"),
            content: "Seeded for a feed test".to_string(),
            image_url: "https://example.com/seeded.png".to_string(),
            price,
            account_id: owner_id,
            created_at,
        });
        id
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_account(
        &self,
        name: &str,
        password_digest: &str,
    ) -> Result<DbId, StoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|account| account.name == name) {
            return Err(StoreError::Other(format!(
                "account name '{name}' already taken"
            )));
        }
        let id = accounts.len() as DbId + 1;
        accounts.push(StoredAccount {
            id,
            name: name.to_string(),
            password_digest: password_digest.to_string(),
        });
        Ok(id)
    }

    async fn find_account_by_name(&self, name: &str) -> Result<Option<AccountAuth>, StoreError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|account| account.name == name)
            .map(|account| AccountAuth {
                id: account.id,
                password_digest: account.password_digest.clone(),
            }))
    }

    async fn create_ad(&self, ad: &NewAd, owner_id: DbId) -> Result<DbId, StoreError> {
        let mut ads = self.ads.lock().unwrap();
        let id = ads.len() as DbId + 1;
        ads.push(AdRow {
            id,
            title: ad.title.clone(),
            content: ad.content.clone(),
            image_url: ad.image_url.clone(),
            price: ad.price,
            account_id: owner_id,
            created_at: chrono::Utc::now(),
        });
        Ok(id)
    }

    async fn list_ads(&self, query: &FeedQuery) -> Result<Vec<AdRow>, StoreError> {
        let ads = self.ads.lock().unwrap();
        let mut rows: Vec<AdRow> = ads
            .iter()
            .filter(|ad| ad.price >= query.min_price && ad.price <= query.max_price)
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match query.sort_by {
                SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
                SortKey::Price => a.price.cmp(&b.price),
            };
            match query.order_by {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(rows
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect())
    }
}

/// Image checker with a scripted verdict.
pub struct ScriptedChecker(pub Result<(), ImageError>);

#[async_trait]
impl ImageChecker for ScriptedChecker {
    async fn check(&self, _url: &str, _deadline: Duration) -> Result<(), ImageError> {
        self.0.clone()
    }
}

/// Checker that accepts every URL.
pub fn accepting_checker() -> ScriptedChecker {
    ScriptedChecker(Ok(()))
}

/* --------------------------------------------------------------------------
   App construction
   -------------------------------------------------------------------------- */

/// Build the application router over the given collaborators.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (body logging, request ID, timeout,
/// panic recovery) that production uses.
pub fn build_test_app(store: Arc<MemoryStore>, checker: ScriptedChecker) -> Router {
    let config = Arc::new(test_config());
    let service = Arc::new(ClassifiedsService::new(
        store,
        Arc::new(checker),
        config.jwt.clone(),
    ));
    let state = AppState {
        service,
        config: Arc::clone(&config),
    };

    let request_id_header = HeaderName::from_static("x-request-id");

    routes::router(state)
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}

/// Build an app with an empty store and an accepting image checker.
pub fn simple_test_app() -> Router {
    build_test_app(Arc::new(MemoryStore::default()), accepting_checker())
}

/* --------------------------------------------------------------------------
   Request helpers
   -------------------------------------------------------------------------- */

/// POST a JSON body to `path`.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body to `path` with a bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET `path`.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET `path` with an arbitrary `Authorization` header value.
pub async fn get_with_authorization(app: Router, path: &str, header_value: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(AUTHORIZATION, header_value)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sign up and sign in one account, returning its id and session token.
pub async fn signed_up_account(app: &Router, name: &str, password: &str) -> (DbId, String) {
    let body = serde_json::json!({"name": name, "password": password});

    let signup = post_json(app.clone(), "/signup", body.clone()).await;
    assert_eq!(signup.status(), StatusCode::CREATED);
    let id = body_json(signup).await["id"].as_i64().unwrap();

    let signin = post_json(app.clone(), "/signin", body).await;
    assert_eq!(signin.status(), StatusCode::CREATED);
    let token = body_json(signin).await["token"].as_str().unwrap().to_string();

    (id, token)
}

/// Fixed timestamp helper for seeding feed rows.
pub fn ts(year: i32, month: u32, day: u32) -> Timestamp {
    chrono::Utc
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
}
