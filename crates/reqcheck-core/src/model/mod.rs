// crates/reqcheck-core/src/model/mod.rs
// ============================================================================
// Module: Response Models
// Description: Typed records for remote user-directory API responses.
// Purpose: Give each endpoint's expected shape an explicit wire form.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Value objects produced by binding validated response bodies. Success and
//! error shapes differ per endpoint; fields the tests do not assert on are
//! tolerated when absent, while required fields missing or of the wrong type
//! surface as binding failures. All records serialize back to their wire
//! form, which the in-process stub reuses.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: User Records
// ============================================================================

/// A remote user-directory entity.
///
/// # Invariants
/// - `id` is the service-assigned numeric identifier, always >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Service-assigned numeric identifier.
    pub id: u64,
    /// Service-issued email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Service-hosted avatar URL.
    pub avatar: String,
}

/// Wrapper for single-resource responses: `{ "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnvelope {
    /// The requested user.
    pub data: UserRecord,
}

/// One page of the user listing: `{ "data": [ ... ], "page": N, ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    /// 1-based page number.
    pub page: u64,
    /// Requested page size.
    pub per_page: u64,
    /// Total entities across all pages.
    pub total: u64,
    /// Total page count at this page size.
    pub total_pages: u64,
    /// Users on this page.
    pub data: Vec<UserRecord>,
}

// ============================================================================
// SECTION: Creation and Registration Records
// ============================================================================

/// Resource-creation response: echoed submission plus server-assigned fields.
///
/// The service assigns `id` as a string with numeric content and stamps
/// `createdAt` in RFC 3339 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUserRecord {
    /// Echo of the submitted full name.
    pub name: String,
    /// Echo of the submitted job title.
    pub job: String,
    /// Echo of the submitted email, when one was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Echo of the submitted avatar link, when one was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Server-assigned identifier; string on the wire, numeric content.
    pub id: String,
    /// Server-side creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Successful registration response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRecord {
    /// Identifier of the registered user.
    pub id: u64,
    /// Session token issued for the registration.
    pub token: String,
}

// ============================================================================
// SECTION: Error Record
// ============================================================================

/// Failure response carrying a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable error message, e.g. `Missing email`.
    pub error: String,
}
