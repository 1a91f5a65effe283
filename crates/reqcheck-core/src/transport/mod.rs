// crates/reqcheck-core/src/transport/mod.rs
// ============================================================================
// Module: Transport Boundary
// Description: HTTP client abstraction the case pipeline calls through.
// Purpose: Keep socket I/O outside the core; one attempt per call, no retry.
// Dependencies: async-trait, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The core never constructs raw socket I/O. A test case hands a fully shaped
//! [`ApiRequest`] to an implementation of [`Transport`] and receives the raw
//! status, content type, and body back. Implementations must issue exactly
//! one attempt per call; retry, backoff, and cancellation are the outer
//! runner's concern and are deliberately absent from this boundary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Request and Response Values
// ============================================================================

/// HTTP method of an outgoing call.
///
/// # Invariants
/// - Variants are stable for transcript labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Resource read.
    Get,
    /// Resource creation or submission.
    Post,
    /// Resource replacement.
    Put,
    /// Resource deletion.
    Delete,
}

impl Method {
    /// Returns the wire form of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully shaped outgoing request: resolved URL, headers, optional body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
    /// Header name/value pairs, already including the contract defaults.
    pub headers: Vec<(String, String)>,
    /// JSON body, when the call carries one.
    pub body: Option<Value>,
}

/// The raw response a transport returned: status, content type, body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Content-type header value, when present.
    pub content_type: Option<String>,
    /// Raw body bytes; empty for body-less responses.
    pub body: Vec<u8>,
}

// ============================================================================
// SECTION: Transport Trait
// ============================================================================

/// Transport-boundary errors.
///
/// # Invariants
/// - Variants are stable for per-test failure reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request URL could not be resolved against the contract base.
    #[error("invalid request url: {detail}")]
    InvalidUrl {
        /// Resolution diagnostic.
        detail: String,
    },
    /// The single send attempt failed before a response arrived.
    #[error("{method} {url} failed: {detail}")]
    Send {
        /// Wire form of the request method.
        method: &'static str,
        /// Absolute request URL.
        url: String,
        /// Client diagnostic.
        detail: String,
    },
}

/// Black-box HTTP client the case pipeline calls through.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the raw response.
    ///
    /// Implementations issue exactly one attempt; a transient failure is
    /// returned, never retried.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the attempt fails before a response
    /// arrives.
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}
