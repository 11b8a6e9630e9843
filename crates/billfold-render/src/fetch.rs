// SPDX-License-Identifier: MIT
//
// Remote image access for logos and signed-QR codes.
//
// Providers never fail: network errors and non-image responses come back as
// `is_valid_image = false` and the caller degrades layout instead of
// aborting the render. One fetch attempt per call, no retries, no timeout
// policy at this layer.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

/// Result of one image fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    /// False when the fetch failed or the content was not an image.
    pub is_valid_image: bool,
}

impl FetchedImage {
    pub fn valid(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            is_valid_image: true,
        }
    }

    pub fn invalid() -> Self {
        Self {
            bytes: Vec::new(),
            is_valid_image: false,
        }
    }
}

/// Async source of image bytes, keyed by URL.
///
/// Implementations must be idempotent: the pagination engine re-fetches the
/// company logo on every page break.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchedImage;
}

/// HTTP-backed provider.
///
/// Validity is judged by the `Content-Type` response header alone (`image/*`),
/// the same contract the billing backend has always applied.
#[derive(Debug, Clone, Default)]
pub struct HttpImageProvider {
    client: reqwest::Client,
}

impl HttpImageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageProvider for HttpImageProvider {
    async fn fetch(&self, url: &str) -> FetchedImage {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(url, error = %err, "image fetch failed");
                return FetchedImage::invalid();
            }
        };

        let is_image = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            warn!(url, "image URL did not return a valid image format");
            return FetchedImage::invalid();
        }

        match response.bytes().await {
            Ok(bytes) => FetchedImage::valid(bytes.to_vec()),
            Err(err) => {
                warn!(url, error = %err, "image body read failed");
                FetchedImage::invalid()
            }
        }
    }
}

/// In-memory provider serving preloaded bytes.
///
/// Used for bundled logos that never leave the binary, for offline rendering,
/// and throughout the test suite. URLs not registered come back invalid.
#[derive(Debug, Clone, Default)]
pub struct StaticImageProvider {
    images: HashMap<String, Vec<u8>>,
}

impl StaticImageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bytes to serve for `url`.
    pub fn insert(&mut self, url: impl Into<String>, bytes: Vec<u8>) {
        self.images.insert(url.into(), bytes);
    }

    pub fn with_image(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(url, bytes);
        self
    }
}

#[async_trait]
impl ImageProvider for StaticImageProvider {
    async fn fetch(&self, url: &str) -> FetchedImage {
        match self.images.get(url) {
            Some(bytes) => FetchedImage::valid(bytes.clone()),
            None => {
                warn!(url, "no static image registered");
                FetchedImage::invalid()
            }
        }
    }
}
