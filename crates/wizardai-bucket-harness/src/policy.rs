// crates/wizardai-bucket-harness/src/policy.rs
// ============================================================================
// Module: Bucket Policy Expectations
// Description: HTTPS-only policy markers and deny-statement detection.
// Purpose: Decide whether a bucket policy document enforces secure transport.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Every bucket the module provisions carries a policy with a Deny statement
//! keyed on `aws:SecureTransport` evaluating false. The policy document is an
//! opaque JSON string from the provider API; this module parses it and walks
//! the statement array rather than trusting substring hits alone.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Statement id the module assigns to the HTTPS enforcement statement.
pub const SECURE_TRANSPORT_SID: &str = "DenyInsecureConnections";

/// Condition key that identifies TLS-carried requests.
pub const SECURE_TRANSPORT_CONDITION: &str = "aws:SecureTransport";

// ============================================================================
// SECTION: Policy Inspection
// ============================================================================

/// Returns true when the policy document denies non-TLS requests.
///
/// A statement qualifies when its effect is `Deny` and any condition operator
/// maps [`SECURE_TRANSPORT_CONDITION`] to `false` (string or boolean form;
/// the provider API returns the string form).
#[must_use]
pub fn enforces_https(policy_json: &str) -> bool {
    let Ok(document) = serde_json::from_str::<Value>(policy_json) else {
        return false;
    };
    statements(&document).into_iter().any(denies_insecure_transport)
}

/// Extracts the statement list from a policy document.
///
/// AWS accepts both a single statement object and an array; both shapes are
/// normalized to a vector here.
fn statements(document: &Value) -> Vec<&Value> {
    match document.get("Statement") {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single @ Value::Object(_)) => vec![single],
        _ => Vec::new(),
    }
}

/// Returns true when one statement is a deny keyed on insecure transport.
fn denies_insecure_transport(statement: &Value) -> bool {
    let deny = statement.get("Effect").and_then(Value::as_str) == Some("Deny");
    if !deny {
        return false;
    }
    let Some(condition) = statement.get("Condition").and_then(Value::as_object) else {
        return false;
    };
    condition.values().any(|operator| {
        operator
            .get(SECURE_TRANSPORT_CONDITION)
            .is_some_and(|value| matches!(value, Value::Bool(false)) || value.as_str() == Some("false"))
    })
}
