// system-tests/src/lib.rs
// ============================================================================
// Module: Wizardai Bucket System Tests Library
// Description: Shared configuration for bucket acceptance scenarios.
// Purpose: Provide typed environment settings to the acceptance suites.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the environment-backed configuration consumed by the
//! acceptance suites in `system-tests/tests`. The Terraform module under test
//! is not part of this repository; configuration points the suites at its
//! checkout and at the AWS region to verify against.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
