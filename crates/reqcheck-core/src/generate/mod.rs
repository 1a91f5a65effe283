// crates/reqcheck-core/src/generate/mod.rs
// ============================================================================
// Module: Synthetic Data Generator
// Description: Randomized-but-valid field values for request payloads.
// Purpose: Decouple test intent from literal fixtures that could drift or collide.
// Dependencies: rand, thiserror
// ============================================================================

//! ## Overview
//! Pure generators for the field values request payloads need: full names,
//! email addresses, passwords, avatar links, and job titles. Generators
//! perform no I/O and cannot fail; determinism is not required, but every
//! returned value must satisfy its own format contract, checkable per call
//! through the matching `verify_*` operation. A verification failure marks a
//! generator bug, not a remote-service defect.

// ============================================================================
// SECTION: Imports
// ============================================================================

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::thread_rng;
use thiserror::Error;

use crate::contract::UPLOAD_ASSET_PREFIX;

// ============================================================================
// SECTION: Value Pools
// ============================================================================

/// First-name pool sampled independently from last names.
const FIRST_NAMES: &[&str] = &[
    "Avery", "Casey", "Dana", "Elliot", "Frankie", "Harper", "Jordan", "Kendall", "Morgan",
    "Quinn", "Riley", "Sasha",
];

/// Last-name pool sampled independently from first names.
const LAST_NAMES: &[&str] = &[
    "Adler", "Barnes", "Calloway", "Drummond", "Ellison", "Fletcher", "Grantham", "Holloway",
    "Iverson", "Jennings", "Kowalski", "Latimer",
];

/// Domain pool for generated email addresses; none map to real mailboxes.
const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mailtest.dev", "invalid.test"];

/// Job-title pool for short free-text fields.
const JOBS: &[&str] = &[
    "release engineer",
    "staff cartographer",
    "field archivist",
    "night auditor",
    "systems gardener",
    "tape librarian",
];

/// Minimum generated password length; the policy is "present and non-trivial".
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum generated password length.
const MAX_PASSWORD_LENGTH: usize = 16;

// ============================================================================
// SECTION: Generators
// ============================================================================

/// Returns a "First Last" name from independently sampled pools.
#[must_use]
pub fn full_name() -> String {
    let mut rng = thread_rng();
    format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES))
}

/// Returns a syntactically valid email address not tied to any real mailbox.
#[must_use]
pub fn email() -> String {
    let mut rng = thread_rng();
    let local_first = pick(&mut rng, FIRST_NAMES).to_ascii_lowercase();
    let local_last = pick(&mut rng, LAST_NAMES).to_ascii_lowercase();
    let tag = rng.gen_range(10_u32..10_000);
    let domain = pick(&mut rng, EMAIL_DOMAINS);
    format!("{local_first}.{local_last}{tag}@{domain}")
}

/// Returns an alphanumeric password of at least [`MIN_PASSWORD_LENGTH`] characters.
#[must_use]
pub fn password() -> String {
    let mut rng = thread_rng();
    let length = rng.gen_range(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH);
    (&mut rng).sample_iter(Alphanumeric).take(length).map(char::from).collect()
}

/// Returns a syntactically valid upload-asset URL for an avatar image.
#[must_use]
pub fn avatar_link() -> String {
    let mut rng = thread_rng();
    let slug = pick(&mut rng, FIRST_NAMES).to_ascii_lowercase();
    let tag = rng.gen_range(1_u32..100_000);
    format!("{UPLOAD_ASSET_PREFIX}/uploads/{slug}-{tag}.png")
}

/// Returns a short free-text job title.
#[must_use]
pub fn job() -> String {
    let mut rng = thread_rng();
    pick(&mut rng, JOBS).to_string()
}

/// Samples one entry from a non-empty pool.
fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or("")
}

// ============================================================================
// SECTION: Format Contracts
// ============================================================================

/// A generated value that failed its own format contract.
///
/// Indicates a generator bug; fatal to the test case that observed it.
///
/// # Invariants
/// - Variants are stable for per-test failure reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    /// Full name was not two space-separated non-empty parts.
    #[error("full name must be two space-separated non-empty parts, got `{value}`")]
    FullName {
        /// Offending value.
        value: String,
    },
    /// Email was not `local@domain.tld` without whitespace.
    #[error("email must look like local@domain.tld without whitespace, got `{value}`")]
    Email {
        /// Offending value.
        value: String,
    },
    /// Password fell short of the minimum length policy.
    #[error("password must be at least {minimum} characters, got {length}")]
    Password {
        /// Observed character count.
        length: usize,
        /// Policy minimum.
        minimum: usize,
    },
    /// Avatar link was not an absolute https URL.
    #[error("avatar link must be an absolute https url, got `{value}`")]
    AvatarLink {
        /// Offending value.
        value: String,
    },
    /// Job title was empty or contained control characters.
    #[error("job title must be non-empty printable text, got `{value}`")]
    Job {
        /// Offending value.
        value: String,
    },
}

/// Verifies the full-name format contract: exactly two non-empty parts
/// separated by a single space.
///
/// # Errors
///
/// Returns [`ConstraintViolation::FullName`] when the value deviates.
pub fn verify_full_name(value: &str) -> Result<(), ConstraintViolation> {
    let mut parts = value.split(' ');
    let first = parts.next().unwrap_or("");
    let last = parts.next().unwrap_or("");
    if first.is_empty() || last.is_empty() || parts.next().is_some() {
        return Err(ConstraintViolation::FullName {
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Verifies the email format contract: non-empty local part, one `@`, and a
/// dotted domain, with no whitespace anywhere.
///
/// # Errors
///
/// Returns [`ConstraintViolation::Email`] when the value deviates.
pub fn verify_email(value: &str) -> Result<(), ConstraintViolation> {
    let violation = || ConstraintViolation::Email {
        value: value.to_string(),
    };
    if value.chars().any(char::is_whitespace) {
        return Err(violation());
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(violation());
    };
    if local.is_empty() || domain.contains('@') {
        return Err(violation());
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(violation());
    };
    if host.is_empty() || tld.is_empty() {
        return Err(violation());
    }
    Ok(())
}

/// Verifies the password length policy.
///
/// # Errors
///
/// Returns [`ConstraintViolation::Password`] when the value is shorter than
/// [`MIN_PASSWORD_LENGTH`].
pub fn verify_password(value: &str) -> Result<(), ConstraintViolation> {
    let length = value.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(ConstraintViolation::Password {
            length,
            minimum: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Verifies the avatar-link format contract: absolute https URL with a host
/// and no whitespace.
///
/// # Errors
///
/// Returns [`ConstraintViolation::AvatarLink`] when the value deviates.
pub fn verify_avatar_link(value: &str) -> Result<(), ConstraintViolation> {
    let violation = || ConstraintViolation::AvatarLink {
        value: value.to_string(),
    };
    if value.chars().any(char::is_whitespace) {
        return Err(violation());
    }
    let Some(rest) = value.strip_prefix("https://") else {
        return Err(violation());
    };
    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() {
        return Err(violation());
    }
    Ok(())
}

/// Verifies the job-title format contract: non-empty, printable, and short.
///
/// # Errors
///
/// Returns [`ConstraintViolation::Job`] when the value deviates.
pub fn verify_job(value: &str) -> Result<(), ConstraintViolation> {
    if value.trim().is_empty() || value.chars().any(char::is_control) {
        return Err(ConstraintViolation::Job {
            value: value.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
