// system-tests/src/config/mod.rs
// ============================================================================
// Module: Suite Configuration
// Description: Centralized configuration for bucket acceptance tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Suite configuration is read from environment variables and mapped into a
//! small typed structure for reuse across test helpers. Parsing fails closed
//! on invalid UTF-8, empty values, and malformed numbers or booleans.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::SuiteConfig;
pub use env::SuiteEnv;
pub use env::read_env_strict;
