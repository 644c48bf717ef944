//! Handlers for ad creation and the public feed.

use adboard_core::ad::NewAd;
use adboard_core::feed::FeedQuery;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Raw feed parameters.
///
/// Every field is optional and holds an uninterpreted string;
/// [`FeedQuery::from_raw`] applies the documented defaults, so no value a
/// caller sends here can fail the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FeedParams {
    pub page: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
}

impl FeedParams {
    /// Parse a raw query string. Total: the first occurrence of each known
    /// key wins, unknown keys are skipped, and undecodable bytes decode
    /// lossily.
    fn parse(raw: Option<&str>) -> Self {
        let mut params = FeedParams::default();
        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or("").as_bytes()) {
            let slot = match key.as_ref() {
                "page" => &mut params.page,
                "min_price" => &mut params.min_price,
                "max_price" => &mut params.max_price,
                "sort_by" => &mut params.sort_by,
                "order_by" => &mut params.order_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    fn into_query(self) -> FeedQuery {
        FeedQuery::from_raw(
            self.page.as_deref(),
            self.min_price.as_deref(),
            self.max_price.as_deref(),
            self.sort_by.as_deref(),
            self.order_by.as_deref(),
        )
    }
}

// ---------------------------------------------------------------------------
// POST /ads
// ---------------------------------------------------------------------------

/// Create an ad owned by the authenticated caller.
pub async fn create_ad(
    identity: Identity,
    State(state): State<AppState>,
    ValidatedJson(ad): ValidatedJson<NewAd>,
) -> AppResult<impl IntoResponse> {
    let created = state.service.create_ad(ad, identity.account_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /ads
// ---------------------------------------------------------------------------

/// List one page of the public feed.
///
/// Served to signed-in and anonymous callers alike; a presented credential
/// only influences the per-row `isYours` flag.
pub async fn feed(
    OptionalIdentity(identity): OptionalIdentity,
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> AppResult<impl IntoResponse> {
    let query = FeedParams::parse(raw.as_deref()).into_query();
    let viewer = identity.map(|caller| caller.account_id);
    let feed = state.service.list_feed(viewer, &query).await?;
    Ok(Json(feed))
}
