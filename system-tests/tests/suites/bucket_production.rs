// system-tests/tests/suites/bucket_production.rs
// ============================================================================
// Module: Production Bucket Scenario
// Description: KMS encryption and lifecycle rules of the production configuration.
// Purpose: Verify the production environment hardens encryption and retention.
// Dependencies: system-tests helpers
// ============================================================================

//! ## Overview
//! KMS encryption and lifecycle rules of the production configuration.
//! Purpose: Verify the production environment hardens encryption and retention.
//! Invariants:
//! - The scenario provisions a uniquely named bucket and destroys it on exit.
//! - Cloud state queries are read-only.

use aws_sdk_s3::types::ServerSideEncryption;
use helpers::artifacts::TestReporter;
use helpers::infra::BucketProbe;
use helpers::scenario::BucketScenario;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn production_bucket_uses_kms_and_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("production_bucket_uses_kms_and_lifecycle")?;

    let scenario = BucketScenario::production("test-prod")?;
    let provisioned = scenario.apply()?;

    let bucket_name = provisioned.output("bucket_name")?;
    let bucket_arn = provisioned.output("bucket_arn")?;
    let kms_key_id = provisioned.output("kms_key_id")?;
    let expected_name = scenario.expected_bucket_name()?;
    if bucket_name != expected_name {
        return Err(format!("bucket name {bucket_name} does not match {expected_name}").into());
    }
    let expected_arn = scenario.expected_bucket_arn()?;
    if bucket_arn != expected_arn {
        return Err(format!("bucket arn {bucket_arn} does not match {expected_arn}").into());
    }
    if kms_key_id.trim().is_empty() {
        return Err("expected a non-empty kms_key_id output".into());
    }

    let probe = BucketProbe::connect(&scenario.config).await?;

    let encryption_rules = probe.encryption_rules(&bucket_name).await?;
    let Some(default_encryption) = encryption_rules
        .first()
        .and_then(|rule| rule.apply_server_side_encryption_by_default())
    else {
        return Err("encryption rule or default encryption not configured".into());
    };
    if *default_encryption.sse_algorithm() != ServerSideEncryption::AwsKms {
        return Err(format!(
            "expected aws:kms encryption, got {:?}",
            default_encryption.sse_algorithm()
        )
        .into());
    }
    if default_encryption.kms_master_key_id().is_none() {
        return Err("expected a KMS master key id on the default encryption rule".into());
    }

    let lifecycle_rules = probe.lifecycle_rules(&bucket_name).await?;
    if lifecycle_rules.is_empty() {
        return Err("expected at least one lifecycle rule".into());
    }

    reporter.finish(
        "pass",
        vec![format!("bucket {bucket_name} uses KMS key {kms_key_id} with lifecycle rules")],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}
