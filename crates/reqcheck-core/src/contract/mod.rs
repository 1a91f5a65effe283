// crates/reqcheck-core/src/contract/mod.rs
// ============================================================================
// Module: Contract Specification Registry
// Description: Named, immutable request and response contracts.
// Purpose: Centralize call shape and response expectations for all test cases.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! This module defines the reusable contracts every test case composes with:
//! one [`RequestContract`] describing how outgoing calls are shaped, and one
//! [`ResponseContract`] per expected outcome kind. Contracts are immutable
//! after construction and freely shared across concurrent cases without
//! locking. The request contract is a process-wide singleton with race-safe
//! lazy initialization; it holds no external resource and needs no teardown.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use thiserror::Error;

// ============================================================================
// SECTION: Service Profile
// ============================================================================

/// Default base URL of the remote user-directory service.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Domain suffix every service-issued email address carries.
pub const EMAIL_DOMAIN_SUFFIX: &str = "@reqres.in";

/// Host prefix for service-hosted avatar assets.
pub const ASSET_HOST_PREFIX: &str = "https://reqres.in";

/// Host prefix for user-uploaded assets echoed back by the service.
pub const UPLOAD_ASSET_PREFIX: &str = "https://s3.amazonaws.com";

/// Content type used for all request and response bodies that carry one.
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ============================================================================
// SECTION: Request Contract
// ============================================================================

/// Immutable configuration describing how every outgoing call is shaped.
///
/// # Invariants
/// - Never mutated after construction; rebasing produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContract {
    /// Base URL all call paths are joined onto.
    base_url: String,
    /// Default headers attached to every request.
    headers: Vec<(String, String)>,
}

impl RequestContract {
    /// Builds the standard contract: default base URL plus JSON headers.
    fn standard() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: vec![
                ("content-type".to_string(), JSON_CONTENT_TYPE.to_string()),
                ("accept".to_string(), JSON_CONTENT_TYPE.to_string()),
            ],
        }
    }

    /// Returns a copy of this contract rebased onto another base URL.
    ///
    /// Used by harnesses that point the same call shape at a local stub or an
    /// alternate deployment. The original contract is left untouched.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers attached to every request.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Lazily constructed process-wide request contract.
static REQUEST_CONTRACT: OnceLock<RequestContract> = OnceLock::new();

/// Returns the shared immutable [`RequestContract`].
///
/// Constructed once on first access; concurrent first accesses observe
/// at-most-once construction.
#[must_use]
pub fn request_contract() -> &'static RequestContract {
    REQUEST_CONTRACT.get_or_init(RequestContract::standard)
}

// ============================================================================
// SECTION: Response Contracts
// ============================================================================

/// Expected outcome kind a response contract is keyed by.
///
/// # Invariants
/// - Variants are stable for transcript labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// Successful read, status 200 with a JSON body.
    Ok,
    /// Successful resource creation, status 201 with a JSON body.
    Created,
    /// Successful deletion, status 204 without a body.
    NoContent,
    /// Rejected request, status 400 with a JSON error body.
    BadRequest,
}

impl ResponseKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Created => "created",
            Self::NoContent => "no_content",
            Self::BadRequest => "bad_request",
        }
    }
}

/// Immutable expectation applied to exactly one response per call.
///
/// # Invariants
/// - One instance per [`ResponseKind`]; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseContract {
    /// Outcome kind this contract asserts.
    kind: ResponseKind,
    /// Expected HTTP status code.
    status: u16,
    /// Expected content type; `None` for body-less outcomes.
    content_type: Option<&'static str>,
}

impl ResponseContract {
    /// Creates a contract for a kind with its expected status and content type.
    const fn new(kind: ResponseKind, status: u16, content_type: Option<&'static str>) -> Self {
        Self {
            kind,
            status,
            content_type,
        }
    }

    /// Returns the outcome kind.
    #[must_use]
    pub const fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Returns the expected HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the expected content type, absent for body-less outcomes.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    /// Returns the stable transcript label for this contract.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Checks an actual status and content type against this contract.
    ///
    /// # Errors
    ///
    /// Returns [`ContractMismatch`] when the status differs, or when the
    /// contract expects a body and the content type differs or is missing.
    pub fn check(&self, status: u16, content_type: Option<&str>) -> Result<(), ContractMismatch> {
        if status != self.status {
            return Err(ContractMismatch::Status {
                label: self.label(),
                expected: self.status,
                actual: status,
            });
        }
        if let Some(expected) = self.content_type {
            let actual = content_type.unwrap_or("");
            if media_type(actual) != expected {
                return Err(ContractMismatch::ContentType {
                    label: self.label(),
                    expected,
                    actual: actual.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Strips content-type parameters such as `; charset=utf-8`.
fn media_type(value: &str) -> &str {
    value.split(';').next().unwrap_or("").trim()
}

/// Contract for successful reads (200, JSON body).
static RESPONSE_OK: ResponseContract =
    ResponseContract::new(ResponseKind::Ok, 200, Some(JSON_CONTENT_TYPE));
/// Contract for successful creations (201, JSON body).
static RESPONSE_CREATED: ResponseContract =
    ResponseContract::new(ResponseKind::Created, 201, Some(JSON_CONTENT_TYPE));
/// Contract for successful deletions (204, no body).
static RESPONSE_NO_CONTENT: ResponseContract =
    ResponseContract::new(ResponseKind::NoContent, 204, None);
/// Contract for rejected requests (400, JSON error body).
static RESPONSE_BAD_REQUEST: ResponseContract =
    ResponseContract::new(ResponseKind::BadRequest, 400, Some(JSON_CONTENT_TYPE));

/// Returns the shared immutable [`ResponseContract`] for a kind.
///
/// Repeated calls for the same kind return a contract with identical expected
/// status and content type.
#[must_use]
pub fn response_contract(kind: ResponseKind) -> &'static ResponseContract {
    match kind {
        ResponseKind::Ok => &RESPONSE_OK,
        ResponseKind::Created => &RESPONSE_CREATED,
        ResponseKind::NoContent => &RESPONSE_NO_CONTENT,
        ResponseKind::BadRequest => &RESPONSE_BAD_REQUEST,
    }
}

// ============================================================================
// SECTION: Contract Mismatches
// ============================================================================

/// A response that violated the applied [`ResponseContract`].
///
/// # Invariants
/// - Variants are stable for per-test failure reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractMismatch {
    /// Actual status code differed from the contract.
    #[error("contract {label}: expected status {expected}, got {actual}")]
    Status {
        /// Label of the violated contract.
        label: &'static str,
        /// Status the contract expects.
        expected: u16,
        /// Status the response carried.
        actual: u16,
    },
    /// Actual content type differed from the contract.
    #[error("contract {label}: expected content type {expected}, got {actual}")]
    ContentType {
        /// Label of the violated contract.
        label: &'static str,
        /// Content type the contract expects.
        expected: &'static str,
        /// Content type the response carried, empty when absent.
        actual: String,
    },
}

// ============================================================================
// SECTION: Tests
// ============================================================================
