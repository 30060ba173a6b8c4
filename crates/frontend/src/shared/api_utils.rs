//! API utilities for talking to the remote product service
//!
//! Provides the endpoint constants, URL builders and the error type shared
//! by every request the client issues.

use thiserror::Error;

/// Base collection endpoint of the remote product service.
pub const PRODUCTS_ENDPOINT: &str = "https://api.escuelajs.co/api/v1/products";

/// URL of the product collection (list / create).
pub fn products_url() -> String {
    PRODUCTS_ENDPOINT.to_string()
}

/// URL of a single product (update).
pub fn product_url(id: i64) -> String {
    format!("{}/{}", PRODUCTS_ENDPOINT, id)
}

/// Failures of requests against the remote service.
///
/// Non-2xx statuses map to the operation-specific variant carrying the
/// numeric status; transport and body-decoding failures are generic.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("loading products failed: HTTP {0}")]
    Fetch(u16),
    #[error("creating the product failed: HTTP {0}")]
    Create(u16),
    #[error("updating the product failed: HTTP {0}")]
    Update(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}
