// crates/reqcheck-core/src/case/mod.rs
// ============================================================================
// Module: Case Pipeline
// Description: Linear build/call/validate/bind/assert pipeline for one case.
// Purpose: Compose contracts, transport, and binding into one observable step.
// Dependencies: serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! Each test case is a linear pipeline: build the request from the shared
//! [`RequestContract`], invoke the transport exactly once, apply the expected
//! [`ResponseContract`], bind the body, then assert field-level properties.
//! Any step's failure short-circuits the rest and surfaces as that case's
//! single [`CaseFailure`]; no failure in one case affects another, and there
//! is no process-abort class.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::binding::BindingError;
use crate::binding::bind_json;
use crate::contract::ContractMismatch;
use crate::contract::RequestContract;
use crate::contract::ResponseContract;
use crate::generate::ConstraintViolation;
use crate::transport::ApiRequest;
use crate::transport::Method;
use crate::transport::RawResponse;
use crate::transport::Transport;
use crate::transport::TransportError;

// ============================================================================
// SECTION: Failure Taxonomy
// ============================================================================

/// The single failure reason a case surfaces to the runner.
///
/// # Invariants
/// - Variants are stable for per-test failure reporting.
/// - Contract, binding, and assertion failures are never conflated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseFailure {
    /// Actual status or content type differed from the response contract.
    #[error("response contract violated: {0}")]
    ContractMismatch(#[from] ContractMismatch),
    /// Body did not parse into the expected record shape.
    #[error("response binding failed: {0}")]
    Binding(#[from] BindingError),
    /// A bound field value violated the scenario's expected property.
    #[error("assertion failed: {0}")]
    Assertion(String),
    /// A generated value failed its own format contract (generator bug).
    #[error("generator constraint violated: {0}")]
    Generator(#[from] ConstraintViolation),
    /// The external transport failed before a response arrived.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
}

// ============================================================================
// SECTION: Call Builder
// ============================================================================

/// One outgoing call before it is resolved against a [`RequestContract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    /// HTTP method.
    method: Method,
    /// Path relative to the contract base URL.
    path: String,
    /// Query name/value pairs appended in order.
    query: Vec<(String, String)>,
    /// JSON body, when the call carries one.
    body: Option<Value>,
}

impl ApiCall {
    /// Starts a call with an explicit method and path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Starts a GET call.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Starts a POST call.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Starts a DELETE call.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Appends one query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Resolves this call against a request contract into a sendable request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] when the contract base URL and
    /// path do not combine into a valid absolute URL.
    pub fn resolve(&self, contract: &RequestContract) -> Result<ApiRequest, TransportError> {
        let joined = format!(
            "{}/{}",
            contract.base_url().trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined).map_err(|err| TransportError::InvalidUrl {
            detail: format!("{joined}: {err}"),
        })?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(ApiRequest {
            method: self.method,
            url: url.into(),
            headers: contract.headers().to_vec(),
            body: self.body.clone(),
        })
    }
}

// ============================================================================
// SECTION: Pipeline
// ============================================================================

/// Runs the build, call, and contract-validation steps of one case.
///
/// The transport is invoked exactly once; a contract mismatch terminates the
/// case before any binding is attempted.
///
/// # Errors
///
/// Returns [`CaseFailure::Transport`] when the request cannot be built or the
/// send attempt fails, and [`CaseFailure::ContractMismatch`] when the
/// response violates `expect`.
pub async fn run_case(
    transport: &dyn Transport,
    contract: &RequestContract,
    call: ApiCall,
    expect: &'static ResponseContract,
) -> Result<CheckedResponse, CaseFailure> {
    let request = call.resolve(contract)?;
    let response = transport.send(&request).await?;
    expect.check(response.status, response.content_type.as_deref())?;
    Ok(CheckedResponse {
        contract: expect,
        response,
    })
}

/// A response that already passed its contract's status and content checks.
#[derive(Debug, Clone)]
pub struct CheckedResponse {
    /// The contract the response was validated against.
    contract: &'static ResponseContract,
    /// The validated raw response.
    response: RawResponse,
}

impl CheckedResponse {
    /// Returns the validated status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.status
    }

    /// Returns the contract this response was validated against.
    #[must_use]
    pub const fn contract(&self) -> &'static ResponseContract {
        self.contract
    }

    /// Returns the raw body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.response.body
    }

    /// Returns whether the applied contract declares a body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.contract.content_type().is_some()
    }

    /// Binds the validated body into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`CaseFailure::Binding`] when the contract declares no body or
    /// the body does not fit the record shape.
    pub fn bind<T: DeserializeOwned>(&self) -> Result<T, CaseFailure> {
        if !self.has_body() {
            return Err(BindingError::NoBody {
                label: self.contract.label(),
            }
            .into());
        }
        bind_json(&self.response.body).map_err(CaseFailure::from)
    }
}

// ============================================================================
// SECTION: Assertion Helpers
// ============================================================================

/// Fails the case unless a scenario property holds.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] with `detail` when `condition` is false.
pub fn ensure(condition: bool, detail: impl Into<String>) -> Result<(), CaseFailure> {
    if condition {
        Ok(())
    } else {
        Err(CaseFailure::Assertion(detail.into()))
    }
}

/// Fails the case unless a bound field equals its expected value.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] naming the field with both values.
pub fn ensure_eq<T: PartialEq + Display>(
    field: &str,
    actual: &T,
    expected: &T,
) -> Result<(), CaseFailure> {
    ensure(actual == expected, format!("{field}: expected `{expected}`, got `{actual}`"))
}

/// Fails the case unless a bound field starts with a prefix.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] naming the field, prefix, and value.
pub fn ensure_starts_with(field: &str, actual: &str, prefix: &str) -> Result<(), CaseFailure> {
    ensure(
        actual.starts_with(prefix),
        format!("{field}: expected prefix `{prefix}`, got `{actual}`"),
    )
}

/// Fails the case unless a bound field ends with a suffix.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] naming the field, suffix, and value.
pub fn ensure_ends_with(field: &str, actual: &str, suffix: &str) -> Result<(), CaseFailure> {
    ensure(
        actual.ends_with(suffix),
        format!("{field}: expected suffix `{suffix}`, got `{actual}`"),
    )
}

/// Fails the case unless a bound field contains a fragment.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] naming the field, fragment, and value.
pub fn ensure_contains(field: &str, actual: &str, fragment: &str) -> Result<(), CaseFailure> {
    ensure(
        actual.contains(fragment),
        format!("{field}: expected fragment `{fragment}`, got `{actual}`"),
    )
}

// ============================================================================
// SECTION: Tests
// ============================================================================
