// system-tests/tests/suites/registration.rs
// ============================================================================
// Module: Registration Scenarios
// Description: Black-box contract scenarios for the registration endpoint.
// Purpose: Validate missing-field rejection and the issued-token success path.
// Dependencies: reqcheck-core, helpers
// ============================================================================

//! ## Overview
//! Black-box contract scenarios for the registration endpoint.
//! Invariants:
//! - A request missing a required field is rejected with a named message.
//! - Rejection bodies bind to the error record, never the success record.

use reqcheck_core::ApiCall;
use reqcheck_core::CaseFailure;
use reqcheck_core::ErrorRecord;
use reqcheck_core::RegisterRecord;
use reqcheck_core::ResponseKind;
use reqcheck_core::case::ensure;
use reqcheck_core::case::ensure_contains;
use reqcheck_core::generate;
use reqcheck_core::response_contract;
use reqcheck_core::run_case;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::helpers::artifacts::TestReporter;
use crate::helpers::harness::CaseHarness;

/// Registered address the remote service accepts; kept literal so the live
/// deployment recognizes it.
const KNOWN_EMAIL: &str = "lindsay.ferguson@reqres.in";

/// Builds a full registration payload with a generated password.
fn registration_payload() -> Result<Map<String, Value>, CaseFailure> {
    let password = generate::password();
    generate::verify_password(&password).map_err(CaseFailure::from)?;
    let mut payload = Map::new();
    payload.insert("email".to_string(), json!(KNOWN_EMAIL));
    payload.insert("password".to_string(), json!(password));
    Ok(payload)
}

/// Submits a registration with one required field removed and checks the
/// rejection names that field.
async fn register_without(field: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new(&format!("register_without_{field}"))?;
    let harness = CaseHarness::start()?;

    let mut payload = registration_payload()?;
    payload.remove(field);

    let checked = run_case(
        harness.client(),
        harness.contract(),
        ApiCall::post("/register").json_body(Value::Object(payload)),
        response_contract(ResponseKind::BadRequest),
    )
    .await?;
    let rejection: ErrorRecord = checked.bind()?;
    ensure_contains("error", &rejection.error, &format!("Missing {field}"))?;

    reporter.artifacts().write_json("transcript.json", &harness.client().transcript())?;
    reporter.finish(
        "pass",
        vec![format!("registration without {field} was rejected by name")],
        vec!["summary.json".to_string(), "summary.md".to_string(), "transcript.json".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn register_without_email() -> Result<(), Box<dyn std::error::Error>> {
    register_without("email").await
}

#[tokio::test(flavor = "multi_thread")]
async fn register_without_password() -> Result<(), Box<dyn std::error::Error>> {
    register_without("password").await
}

#[tokio::test(flavor = "multi_thread")]
async fn register_with_full_payload() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("register_with_full_payload")?;
    let harness = CaseHarness::start()?;

    let payload = registration_payload()?;
    let checked = run_case(
        harness.client(),
        harness.contract(),
        ApiCall::post("/register").json_body(Value::Object(payload)),
        response_contract(ResponseKind::Ok),
    )
    .await?;
    let registration: RegisterRecord = checked.bind()?;
    ensure(!registration.token.is_empty(), "issued token is empty")?;
    ensure(registration.id >= 1, format!("registered id must be >= 1, got {}", registration.id))?;

    reporter.artifacts().write_json("transcript.json", &harness.client().transcript())?;
    reporter.finish(
        "pass",
        vec!["full registration issued a token".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string(), "transcript.json".to_string()],
    )?;
    Ok(())
}
