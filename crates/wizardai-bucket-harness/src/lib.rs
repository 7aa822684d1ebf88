// crates/wizardai-bucket-harness/src/lib.rs
// ============================================================================
// Module: Wizardai Bucket Harness Library
// Description: Terraform driver and typed expectations for the bucket module.
// Purpose: Provide the building blocks the acceptance suite composes per scenario.
// Dependencies: serde, serde_json, thiserror, rand
// ============================================================================

//! ## Overview
//! This crate drives the external `terraform` binary around a single module
//! configuration and encodes the wizardai bucket module's observable contract:
//! naming convention, environment validation text, and HTTPS-only policy
//! markers. Provisioning semantics live entirely in the Terraform module; this
//! crate only supplies inputs, reads outputs, and exposes the expectations the
//! acceptance suite asserts against.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod naming;
pub mod options;
pub mod policy;
pub mod runner;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use error::HarnessError;
pub use naming::ENVIRONMENT_VALIDATION_MESSAGE;
pub use naming::Environment;
pub use options::TerraformOptions;
pub use options::VarValue;
