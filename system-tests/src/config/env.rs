// system-tests/src/config/env.rs
// ============================================================================
// Module: Suite Environment
// Description: Environment-backed configuration for bucket acceptance tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed. Defaults match the bucket
//! module's own acceptance setup: region `us-west-2` and a sibling `terraform`
//! checkout holding the `basic` and `production` example configurations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for suite configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteEnv {
    /// Optional artifact run root override.
    RunRoot,
    /// AWS region the scenarios provision into and verify against.
    Region,
    /// Root directory of the module's example configurations.
    ModuleRoot,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Skip teardown after a scenario (`true`/`false` or `1`/`0`).
    KeepResources,
    /// Optional S3 endpoint override for S3-compatible stores.
    S3Endpoint,
    /// Force path-style S3 addressing (`true`/`false` or `1`/`0`).
    ForcePathStyle,
}

impl SuiteEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RunRoot => "WIZARDAI_BUCKET_TEST_RUN_ROOT",
            Self::Region => "WIZARDAI_BUCKET_TEST_REGION",
            Self::ModuleRoot => "WIZARDAI_BUCKET_TEST_MODULE_ROOT",
            Self::TimeoutSeconds => "WIZARDAI_BUCKET_TEST_TIMEOUT_SEC",
            Self::KeepResources => "WIZARDAI_BUCKET_TEST_KEEP_RESOURCES",
            Self::S3Endpoint => "WIZARDAI_BUCKET_TEST_S3_ENDPOINT",
            Self::ForcePathStyle => "WIZARDAI_BUCKET_TEST_FORCE_PATH_STYLE",
        }
    }
}

/// Default region used when no override is present.
const DEFAULT_REGION: &str = "us-west-2";

/// Default module root, relative to the system-tests crate directory.
const DEFAULT_MODULE_ROOT: &str = "../terraform";

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed suite configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Optional artifact run root override.
    pub run_root: Option<PathBuf>,
    /// AWS region to provision into and verify against.
    pub region: String,
    /// Root directory of the module's example configurations.
    pub module_root: PathBuf,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Skip teardown after a scenario (debugging aid).
    pub keep_resources: bool,
    /// Optional S3 endpoint override for S3-compatible stores.
    pub s3_endpoint: Option<String>,
    /// Force path-style S3 addressing.
    pub force_path_style: bool,
}

impl SuiteConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an invalid timeout or boolean
    /// value).
    pub fn load() -> Result<Self, String> {
        let run_root = read_env_nonempty(SuiteEnv::RunRoot.as_str())?.map(PathBuf::from);
        let region = read_env_nonempty(SuiteEnv::Region.as_str())?
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let module_root = read_env_nonempty(SuiteEnv::ModuleRoot.as_str())?
            .map_or_else(|| PathBuf::from(DEFAULT_MODULE_ROOT), PathBuf::from);
        let timeout = read_env_nonempty(SuiteEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SuiteEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let keep_resources = parse_bool_env(
            SuiteEnv::KeepResources.as_str(),
            read_env_nonempty(SuiteEnv::KeepResources.as_str())?,
        )?;
        let s3_endpoint = read_env_nonempty(SuiteEnv::S3Endpoint.as_str())?;
        let force_path_style = parse_bool_env(
            SuiteEnv::ForcePathStyle.as_str(),
            read_env_nonempty(SuiteEnv::ForcePathStyle.as_str())?,
        )?;
        Ok(Self {
            run_root,
            region,
            module_root,
            timeout,
            keep_resources,
            s3_endpoint,
            force_path_style,
        })
    }

    /// Directory of the basic example configuration.
    #[must_use]
    pub fn basic_module_dir(&self) -> PathBuf {
        self.module_root.join("basic")
    }

    /// Directory of the production example configuration.
    #[must_use]
    pub fn production_module_dir(&self) -> PathBuf {
        self.module_root.join("production")
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment variable with permissive defaults.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
