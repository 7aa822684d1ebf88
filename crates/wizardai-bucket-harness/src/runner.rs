// crates/wizardai-bucket-harness/src/runner.rs
// ============================================================================
// Module: Terraform Runner
// Description: Blocking subprocess driver for the terraform binary.
// Purpose: Apply, plan, destroy, and read outputs for one configuration.
// Dependencies: std::process
// ============================================================================

//! ## Overview
//! The runner shells out to `terraform` with the argument vectors built from
//! [`TerraformOptions`]. Invocations are sequential and blocking; there are no
//! retries. A non-zero exit is surfaced as [`HarnessError::Command`] carrying
//! captured stderr, which is how plan-time validation failures reach callers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::process::Command;
use std::process::Output;

use crate::error::HarnessError;
use crate::options::TerraformOptions;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment override for the terraform binary location.
const TERRAFORM_BIN_ENV: &str = "TERRAFORM_BIN";

/// Default binary name resolved from PATH.
const DEFAULT_TERRAFORM_BIN: &str = "terraform";

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Initializes the module directory and applies the configuration.
///
/// # Errors
///
/// Returns [`HarnessError`] when either invocation cannot be spawned or exits
/// non-zero.
pub fn init_and_apply(options: &TerraformOptions) -> Result<(), HarnessError> {
    run(options, &options.init_args())?;
    run(options, &options.apply_args()?)?;
    Ok(())
}

/// Initializes the module directory and produces a plan.
///
/// Returns the plan stdout on success. A plan rejected by variable validation
/// surfaces as [`HarnessError::Command`] whose text contains the module's
/// validation message.
///
/// # Errors
///
/// Returns [`HarnessError`] when either invocation cannot be spawned or exits
/// non-zero.
pub fn init_and_plan(options: &TerraformOptions) -> Result<String, HarnessError> {
    run(options, &options.init_args())?;
    let output = run(options, &options.plan_args()?)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Destroys the configuration's resources.
///
/// # Errors
///
/// Returns [`HarnessError`] when the invocation cannot be spawned or exits
/// non-zero.
pub fn destroy(options: &TerraformOptions) -> Result<(), HarnessError> {
    run(options, &options.destroy_args()?)?;
    Ok(())
}

/// Reads one named string output from the applied configuration.
///
/// # Errors
///
/// Returns [`HarnessError::Output`] when the value is empty, in addition to
/// the usual spawn and exit failures.
pub fn output(options: &TerraformOptions, name: &str) -> Result<String, HarnessError> {
    let result = run(options, &options.output_args(name))?;
    let value = String::from_utf8_lossy(&result.stdout).trim_end_matches('\n').to_string();
    if value.is_empty() {
        return Err(HarnessError::Output {
            name: name.to_string(),
            reason: "value is empty".to_string(),
        });
    }
    Ok(value)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the terraform binary, honoring the `TERRAFORM_BIN` override.
fn terraform_binary() -> String {
    env::var(TERRAFORM_BIN_ENV).unwrap_or_else(|_| DEFAULT_TERRAFORM_BIN.to_string())
}

/// Runs one terraform invocation in the module directory, fail closed.
fn run(options: &TerraformOptions, args: &[String]) -> Result<Output, HarnessError> {
    let program = terraform_binary();
    let output = Command::new(&program)
        .args(args)
        .current_dir(options.module_dir())
        .envs(options.env_vars())
        .output()
        .map_err(|err| HarnessError::Spawn {
            program: program.clone(),
            source: err,
        })?;
    if !output.status.success() {
        return Err(HarnessError::Command {
            command: format!("{program} {}", args.join(" ")),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(output)
}
