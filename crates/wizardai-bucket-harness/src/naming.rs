// crates/wizardai-bucket-harness/src/naming.rs
// ============================================================================
// Module: Bucket Naming Expectations
// Description: Environment values and the module's bucket naming convention.
// Purpose: Compose expected bucket names and ARNs for assertion.
// Dependencies: rand, serde
// ============================================================================

//! ## Overview
//! The bucket module names every bucket `wizardai-<fragment>-<environment>`
//! and rejects environment values outside its allow-list at plan time. This
//! module mirrors that contract so scenarios can compute the exact names and
//! ARNs they expect to observe.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Deserialize;
use serde::Serialize;

use crate::error::HarnessError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Validation text the module emits for an out-of-range environment value.
pub const ENVIRONMENT_VALIDATION_MESSAGE: &str =
    "Environment must be one of: development, staging, production";

/// Organization prefix applied to every provisioned bucket.
const BUCKET_PREFIX: &str = "wizardai";

/// ARN prefix for S3 bucket resources.
const BUCKET_ARN_PREFIX: &str = "arn:aws:s3:::";

/// Length of the random suffix appended to scenario bucket fragments.
const UNIQUE_SUFFIX_LEN: usize = 6;

// ============================================================================
// SECTION: Environment
// ============================================================================

/// Deployment environments the module accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment; SSE-S3 encryption, no lifecycle rules.
    Development,
    /// Staging environment; SSE-S3 encryption, no lifecycle rules.
    Staging,
    /// Production environment; KMS encryption plus lifecycle rules.
    Production,
}

impl Environment {
    /// Returns the lowercase wire form used for the `environment` variable.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = HarnessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(HarnessError::InvalidInput(ENVIRONMENT_VALIDATION_MESSAGE.to_string())),
        }
    }
}

// ============================================================================
// SECTION: Naming Convention
// ============================================================================

/// Expected bucket name for a scenario fragment and environment.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidInput`] when the fragment is empty or
/// contains characters outside the S3 name charset used by the module.
pub fn expected_bucket_name(fragment: &str, env: Environment) -> Result<String, HarnessError> {
    validate_fragment(fragment)?;
    Ok(format!("{BUCKET_PREFIX}-{fragment}-{env}"))
}

/// Expected bucket ARN for a scenario fragment and environment.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidInput`] when the fragment is invalid.
pub fn expected_bucket_arn(fragment: &str, env: Environment) -> Result<String, HarnessError> {
    let name = expected_bucket_name(fragment, env)?;
    Ok(format!("{BUCKET_ARN_PREFIX}{name}"))
}

/// Generates a collision-resistant bucket fragment for one scenario.
///
/// The suffix is lowercase alphanumeric so the composed bucket name stays
/// within the S3 naming charset; uniqueness keeps concurrently running
/// scenarios independent.
#[must_use]
pub fn unique_fragment(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNIQUE_SUFFIX_LEN)
        .map(|byte| char::from(byte.to_ascii_lowercase()))
        .collect();
    format!("{prefix}-{suffix}")
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects fragments that would produce an invalid S3 bucket name.
fn validate_fragment(fragment: &str) -> Result<(), HarnessError> {
    if fragment.is_empty() {
        return Err(HarnessError::InvalidInput("bucket fragment must not be empty".to_string()));
    }
    let valid = fragment
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
    if valid {
        Ok(())
    } else {
        Err(HarnessError::InvalidInput(format!(
            "bucket fragment {fragment:?} must be lowercase alphanumeric or hyphen"
        )))
    }
}
