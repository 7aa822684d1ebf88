// system-tests/tests/suites/bucket_validation.rs
// ============================================================================
// Module: Environment Validation Scenario
// Description: Plan-time rejection of out-of-range environment values.
// Purpose: Verify the module fails closed before provisioning anything.
// Dependencies: system-tests helpers
// ============================================================================

//! ## Overview
//! Plan-time rejection of out-of-range environment values.
//! Purpose: Verify the module fails closed before provisioning anything.
//! Invariants:
//! - A successful plan with an invalid environment is the test failure.
//! - No resources are created, so no teardown is required.

use helpers::artifacts::TestReporter;
use helpers::scenario::plan_with_environment_literal;
use wizardai_bucket_harness::ENVIRONMENT_VALIDATION_MESSAGE;

use crate::helpers;

#[test]
fn invalid_environment_is_rejected_at_plan_time() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("invalid_environment_is_rejected_at_plan_time")?;

    let result = plan_with_environment_literal("test-invalid", "invalid-env");
    let error_text = match result {
        Ok(_) => return Err("plan succeeded with an invalid environment value".into()),
        Err(text) => text,
    };
    if !error_text.contains(ENVIRONMENT_VALIDATION_MESSAGE) {
        return Err(format!(
            "plan failure does not carry the validation message: {error_text}"
        )
        .into());
    }

    reporter.artifacts().write_text("plan_error.txt", &error_text)?;
    reporter.finish(
        "pass",
        vec!["invalid environment rejected at plan time".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "plan_error.txt".to_string(),
        ],
    )?;
    Ok(())
}
