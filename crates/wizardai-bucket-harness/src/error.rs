// crates/wizardai-bucket-harness/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Error type for Terraform invocation and output handling.
// Purpose: Fail closed on tool failures while preserving diagnostic text.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! All harness operations return [`HarnessError`]. Command failures carry the
//! captured stderr verbatim so callers can match plan-time validation messages
//! emitted by the module under test.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;

use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors produced while driving Terraform or reading its outputs.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The tool binary could not be started.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The tool ran and exited with a non-zero status.
    ///
    /// Stderr is included in the display form so validation failures surfaced
    /// by `terraform plan` remain matchable from the error text.
    #[error("{command} exited with {status}: {stderr}")]
    Command {
        /// Rendered command line that failed.
        command: String,
        /// Exit status description.
        status: String,
        /// Captured stderr from the failed invocation.
        stderr: String,
    },
    /// A named output was missing, empty, or malformed.
    #[error("output {name} unusable: {reason}")]
    Output {
        /// Output name requested from the configuration.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Scenario inputs were rejected before any tool invocation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
