// system-tests/tests/helpers/infra.rs
// ============================================================================
// Module: Acceptance Test Infrastructure
// Description: Read-only S3 probe for provisioned bucket state.
// Purpose: Fetch the security snapshot of a bucket for assertion.
// Dependencies: aws-config, aws-sdk-s3
// ============================================================================

//! ## Overview
//! Read-only S3 probe for provisioned bucket state.
//! Purpose: Fetch the security snapshot of a bucket for assertion.
//! Invariants:
//! - Every query is read-only; the probe never mutates bucket state.
//! - Each getter is called at most once per scenario.

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::timeout::TimeoutConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::types::BucketVersioningStatus;
use aws_sdk_s3::types::LifecycleRule;
use aws_sdk_s3::types::ServerSideEncryptionRule;
use system_tests::config::SuiteConfig;

/// The four public-access-block flags, false when a flag is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicAccessFlags {
    /// Blocks new public ACLs.
    pub block_public_acls: bool,
    /// Blocks new public bucket policies.
    pub block_public_policy: bool,
    /// Ignores existing public ACLs.
    pub ignore_public_acls: bool,
    /// Restricts access for buckets with public policies.
    pub restrict_public_buckets: bool,
}

impl PublicAccessFlags {
    /// Returns true when all four flags are set.
    pub const fn all_blocked(self) -> bool {
        self.block_public_acls
            && self.block_public_policy
            && self.ignore_public_acls
            && self.restrict_public_buckets
    }
}

/// Read-only S3 client scoped to the suite's region configuration.
pub struct BucketProbe {
    client: Client,
}

impl BucketProbe {
    /// Builds a probe from the suite configuration.
    ///
    /// Credentials come from the ambient AWS environment. An endpoint
    /// override plus path-style addressing supports S3-compatible stores.
    pub async fn connect(config: &SuiteConfig) -> Result<Self, String> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.s3_endpoint {
            super::env::set_var("AWS_EC2_METADATA_DISABLED", "true");
            loader = loader.endpoint_url(endpoint.clone());
        }
        if let Some(timeout) = config.timeout {
            loader = loader.timeout_config(
                TimeoutConfig::builder().operation_timeout(timeout).build(),
            );
        }
        let shared_config = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if config.force_path_style {
            builder = builder.force_path_style(true);
        }
        Ok(Self {
            client: Client::from_conf(builder.build()),
        })
    }

    /// Confirms the bucket exists and is reachable with current credentials.
    pub async fn head_bucket(&self, bucket: &str) -> Result<(), String> {
        self.client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| format!("head bucket {bucket} failed: {err}"))?;
        Ok(())
    }

    /// Returns the server-side encryption rules configured on the bucket.
    pub async fn encryption_rules(
        &self,
        bucket: &str,
    ) -> Result<Vec<ServerSideEncryptionRule>, String> {
        let output = self
            .client
            .get_bucket_encryption()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| format!("get bucket encryption for {bucket} failed: {err}"))?;
        Ok(output
            .server_side_encryption_configuration()
            .map(|configuration| configuration.rules().to_vec())
            .unwrap_or_default())
    }

    /// Returns the bucket versioning status, when one is set.
    pub async fn versioning_status(
        &self,
        bucket: &str,
    ) -> Result<Option<BucketVersioningStatus>, String> {
        let output = self
            .client
            .get_bucket_versioning()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| format!("get bucket versioning for {bucket} failed: {err}"))?;
        Ok(output.status().cloned())
    }

    /// Returns the four public-access-block flags; absent flags read false.
    pub async fn public_access_flags(&self, bucket: &str) -> Result<PublicAccessFlags, String> {
        let output = self
            .client
            .get_public_access_block()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| format!("get public access block for {bucket} failed: {err}"))?;
        let configuration = output
            .public_access_block_configuration()
            .ok_or_else(|| format!("bucket {bucket} has no public access block configuration"))?;
        Ok(PublicAccessFlags {
            block_public_acls: configuration.block_public_acls().unwrap_or(false),
            block_public_policy: configuration.block_public_policy().unwrap_or(false),
            ignore_public_acls: configuration.ignore_public_acls().unwrap_or(false),
            restrict_public_buckets: configuration.restrict_public_buckets().unwrap_or(false),
        })
    }

    /// Returns the bucket policy document text.
    pub async fn bucket_policy(&self, bucket: &str) -> Result<String, String> {
        let output = self
            .client
            .get_bucket_policy()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| format!("get bucket policy for {bucket} failed: {err}"))?;
        output
            .policy()
            .map(str::to_string)
            .ok_or_else(|| format!("bucket {bucket} returned an empty policy document"))
    }

    /// Returns the lifecycle rules configured on the bucket.
    pub async fn lifecycle_rules(&self, bucket: &str) -> Result<Vec<LifecycleRule>, String> {
        let output = self
            .client
            .get_bucket_lifecycle_configuration()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| format!("get lifecycle configuration for {bucket} failed: {err}"))?;
        Ok(output.rules().to_vec())
    }
}
