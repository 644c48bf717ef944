use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// Payload for creating an ad.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAd {
    #[validate(length(min = 2, max = 255, message = "title must be 2 to 255 characters"))]
    pub title: String,

    #[validate(length(min = 2, max = 1000, message = "content must be 2 to 1000 characters"))]
    pub content: String,

    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: String,

    #[validate(range(min = 1, max = 1_000_000, message = "price must be between 1 and 1000000"))]
    pub price: i64,
}

/// View of a freshly created ad, echoed back from `POST /ads`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub price: i64,
}

/// One row of the public feed.
///
/// `is_yours` is computed per request from the resolved caller identity and
/// is never stored; anonymous callers see `false` everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedAd {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub price: i64,
    pub created_at: Timestamp,
    pub author_id: DbId,
    pub is_yours: bool,
}
