// crates/reqcheck-core/src/lib.rs
// ============================================================================
// Module: ReqCheck Core Library
// Description: Reusable contract-test harness for a remote user-directory API.
// Purpose: Provide contracts, synthetic data, typed binding, and the case pipeline.
// Dependencies: serde, serde_json, thiserror, rand, url, async-trait
// ============================================================================

//! ## Overview
//! This crate hosts the reusable specification layer for black-box contract
//! tests against a remote user-directory HTTP API: named request/response
//! contracts, a synthetic test-data generator, typed response binding, and
//! the linear case pipeline that composes them. The HTTP transport itself is
//! an external collaborator behind the [`transport::Transport`] trait; the
//! core never performs socket I/O and never retries a call.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod binding;
pub mod case;
pub mod contract;
pub mod generate;
pub mod model;
pub mod transport;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use binding::BindingError;
pub use binding::bind_json;
pub use case::ApiCall;
pub use case::CaseFailure;
pub use case::CheckedResponse;
pub use case::run_case;
pub use contract::ContractMismatch;
pub use contract::RequestContract;
pub use contract::ResponseContract;
pub use contract::ResponseKind;
pub use contract::request_contract;
pub use contract::response_contract;
pub use generate::ConstraintViolation;
pub use model::CreatedUserRecord;
pub use model::ErrorRecord;
pub use model::RegisterRecord;
pub use model::UserEnvelope;
pub use model::UserPage;
pub use model::UserRecord;
pub use transport::ApiRequest;
pub use transport::Method;
pub use transport::RawResponse;
pub use transport::Transport;
pub use transport::TransportError;
