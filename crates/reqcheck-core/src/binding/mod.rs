// crates/reqcheck-core/src/binding/mod.rs
// ============================================================================
// Module: Response Model Binder
// Description: Schema-checked decoding of response bodies into typed records.
// Purpose: Keep binding failures distinct from contract mismatches.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Converts an opaque response body into one of the typed records in
//! [`crate::model`]. Binding is attempted only after the response contract's
//! status and content-type checks passed; a malformed or mis-shaped body is a
//! [`BindingError`], never conflated with a status mismatch. Decoding runs in
//! two phases so JSON syntax errors and record-shape errors stay
//! distinguishable in test output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// A response body that could not be bound to its expected record shape.
///
/// # Invariants
/// - Variants are stable for per-test failure reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// Body was not valid JSON at all.
    #[error("response body is not valid json: {detail}")]
    Syntax {
        /// Parser diagnostic.
        detail: String,
    },
    /// Body was JSON but did not match the record shape.
    #[error("response body does not match {record}: {detail}")]
    Shape {
        /// Type name of the record that was expected.
        record: &'static str,
        /// Decoder diagnostic, naming the missing or mistyped field.
        detail: String,
    },
    /// The applied contract declares no body, so there is nothing to bind.
    #[error("contract {label} carries no body to bind")]
    NoBody {
        /// Label of the body-less contract.
        label: &'static str,
    },
}

// ============================================================================
// SECTION: Binder
// ============================================================================

/// Binds a raw JSON body into a typed record.
///
/// Fields the record does not declare are ignored; declared non-optional
/// fields that are missing or of the wrong type fail the bind.
///
/// # Errors
///
/// Returns [`BindingError::Syntax`] for malformed JSON and
/// [`BindingError::Shape`] when the JSON does not fit the record.
pub fn bind_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, BindingError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| BindingError::Syntax {
        detail: err.to_string(),
    })?;
    serde_json::from_value(value).map_err(|err| BindingError::Shape {
        record: std::any::type_name::<T>(),
        detail: err.to_string(),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
