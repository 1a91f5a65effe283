// system-tests/src/lib.rs
// ============================================================================
// Module: ReqCheck System Tests Library
// Description: Shared configuration and helpers for system test scenarios.
// Purpose: Provide common utilities for ReqCheck system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the ReqCheck system-test
//! binaries in `system-tests/tests`. Scenarios run against an in-process stub
//! of the remote user-directory API by default and against a live deployment
//! when the base-URL override is set.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
