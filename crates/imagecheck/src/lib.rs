//! HEAD-based image checking for ad images.
//!
//! Every ad must point at a reachable image of acceptable size. The check is
//! a single `HEAD` request classified into the three failure modes a caller
//! can report to the user; the image body is never downloaded.

use std::time::Duration;

use async_trait::async_trait;

/// Maximum accepted `Content-Length`, in bytes (50 MB).
pub const MAX_IMAGE_BYTES: u64 = 50_000_000;

/// Why an image URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    /// The HEAD request failed: DNS, connect, TLS, or the deadline elapsed.
    #[error("image URL is unreachable")]
    UrlUnreachable,

    /// The URL answered, but not with an `image/*` content type.
    #[error("URL does not point at an image")]
    NotAnImage,

    /// The reported size is at or above [`MAX_IMAGE_BYTES`].
    #[error("image is too large")]
    TooLarge,
}

/// Capability of vetting an image URL before an ad is accepted.
#[async_trait]
pub trait ImageChecker: Send + Sync {
    /// Check `url`, failing if it cannot be fetched within `deadline` or
    /// does not look like an acceptable image.
    async fn check(&self, url: &str, deadline: Duration) -> Result<(), ImageError>;
}

/// Production [`ImageChecker`] sending a `HEAD` request per check.
pub struct HttpImageChecker {
    client: reqwest::Client,
}

impl HttpImageChecker {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpImageChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageChecker for HttpImageChecker {
    async fn check(&self, url: &str, deadline: Duration) -> Result<(), ImageError> {
        let response = self
            .client
            .head(url)
            .timeout(deadline)
            .send()
            .await
            .map_err(|_| ImageError::UrlUnreachable)?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        // `Response::content_length()` reports the body size, and a HEAD
        // response body is always empty; the advertised image size only
        // exists in the header.
        let content_length = response
            .headers()
            .get(reqwest::header::CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok());

        classify(content_type.as_deref(), content_length)
    }
}

/// Classify a HEAD response by content type and reported length.
///
/// The content type must have an `image` top-level type. An absent
/// `Content-Length` passes the size check (servers commonly omit it on HEAD).
pub fn classify(content_type: Option<&str>, content_length: Option<u64>) -> Result<(), ImageError> {
    let is_image = content_type
        .and_then(|ct| ct.split('/').next())
        .is_some_and(|kind| kind == "image");
    if !is_image {
        return Err(ImageError::NotAnImage);
    }

    if content_length.is_some_and(|len| len >= MAX_IMAGE_BYTES) {
        return Err(ImageError::TooLarge);
    }

    Ok(())
}
