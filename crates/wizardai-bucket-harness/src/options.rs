// crates/wizardai-bucket-harness/src/options.rs
// ============================================================================
// Module: Terraform Options
// Description: Typed invocation options for a Terraform module configuration.
// Purpose: Build deterministic CLI argument vectors from named inputs.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Scenario inputs are a module directory, a map of named input variables, and
//! a map of process environment variables. Variables are held in ordered maps
//! so rendered argument vectors are deterministic, and map-valued variables
//! are rendered as HCL-compatible JSON.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use crate::error::HarnessError;

// ============================================================================
// SECTION: Variable Values
// ============================================================================

/// Value of a single Terraform input variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarValue {
    /// Plain string value, passed through unquoted.
    Str(String),
    /// String map, rendered as a JSON object on the CLI.
    Map(BTreeMap<String, String>),
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<BTreeMap<String, String>> for VarValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self::Map(value)
    }
}

impl VarValue {
    /// Renders the value in the form Terraform accepts after `-var name=`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidInput`] when a map value cannot be
    /// serialized to JSON.
    fn render(&self) -> Result<String, HarnessError> {
        match self {
            Self::Str(value) => Ok(value.clone()),
            Self::Map(map) => serde_json::to_string(map)
                .map_err(|err| HarnessError::InvalidInput(format!("map variable: {err}"))),
        }
    }
}

// ============================================================================
// SECTION: Options
// ============================================================================

/// Invocation options for one Terraform module configuration.
#[derive(Debug, Clone, Default)]
pub struct TerraformOptions {
    /// Directory containing the configuration to apply.
    module_dir: PathBuf,
    /// Named input variables, rendered as `-var` arguments in map order.
    vars: BTreeMap<String, VarValue>,
    /// Environment variables set on every tool invocation.
    env_vars: BTreeMap<String, String>,
}

impl TerraformOptions {
    /// Creates options for the configuration rooted at `module_dir`.
    #[must_use]
    pub fn new(module_dir: impl Into<PathBuf>) -> Self {
        Self {
            module_dir: module_dir.into(),
            vars: BTreeMap::new(),
            env_vars: BTreeMap::new(),
        }
    }

    /// Adds a named input variable.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidInput`] when the variable name is not a
    /// valid Terraform identifier.
    pub fn var(mut self, name: &str, value: impl Into<VarValue>) -> Result<Self, HarnessError> {
        validate_var_name(name)?;
        self.vars.insert(name.to_string(), value.into());
        Ok(self)
    }

    /// Adds an environment variable applied to every tool invocation.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidInput`] when the name is empty.
    pub fn env_var(mut self, name: &str, value: &str) -> Result<Self, HarnessError> {
        if name.trim().is_empty() {
            return Err(HarnessError::InvalidInput(
                "environment variable name must not be empty".to_string(),
            ));
        }
        self.env_vars.insert(name.to_string(), value.to_string());
        Ok(self)
    }

    /// Returns the module configuration directory.
    #[must_use]
    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }

    /// Returns the environment variables applied to tool invocations.
    #[must_use]
    pub const fn env_vars(&self) -> &BTreeMap<String, String> {
        &self.env_vars
    }

    /// Arguments for `terraform init`.
    #[must_use]
    pub fn init_args(&self) -> Vec<String> {
        vec!["init".to_string(), "-input=false".to_string(), "-no-color".to_string()]
    }

    /// Arguments for `terraform plan` including rendered variables.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidInput`] when a variable fails to render.
    pub fn plan_args(&self) -> Result<Vec<String>, HarnessError> {
        let mut args =
            vec!["plan".to_string(), "-input=false".to_string(), "-no-color".to_string()];
        args.extend(self.var_args()?);
        Ok(args)
    }

    /// Arguments for `terraform apply` including rendered variables.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidInput`] when a variable fails to render.
    pub fn apply_args(&self) -> Result<Vec<String>, HarnessError> {
        let mut args = vec![
            "apply".to_string(),
            "-input=false".to_string(),
            "-auto-approve".to_string(),
            "-no-color".to_string(),
        ];
        args.extend(self.var_args()?);
        Ok(args)
    }

    /// Arguments for `terraform destroy` including rendered variables.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidInput`] when a variable fails to render.
    pub fn destroy_args(&self) -> Result<Vec<String>, HarnessError> {
        let mut args = vec![
            "destroy".to_string(),
            "-input=false".to_string(),
            "-auto-approve".to_string(),
            "-no-color".to_string(),
        ];
        args.extend(self.var_args()?);
        Ok(args)
    }

    /// Arguments for `terraform output -raw <name>`.
    #[must_use]
    pub fn output_args(&self, name: &str) -> Vec<String> {
        vec![
            "output".to_string(),
            "-no-color".to_string(),
            "-raw".to_string(),
            name.to_string(),
        ]
    }

    /// Renders all variables as `-var name=value` argument pairs.
    fn var_args(&self) -> Result<Vec<String>, HarnessError> {
        let mut args = Vec::with_capacity(self.vars.len() * 2);
        for (name, value) in &self.vars {
            args.push("-var".to_string());
            args.push(format!("{name}={}", value.render()?));
        }
        Ok(args)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Rejects variable names Terraform would not accept as identifiers.
fn validate_var_name(name: &str) -> Result<(), HarnessError> {
    let mut chars = name.chars();
    let valid_head = chars.next().is_some_and(|ch| ch.is_ascii_lowercase() || ch == '_');
    let valid_tail =
        chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-');
    if valid_head && valid_tail {
        Ok(())
    } else {
        Err(HarnessError::InvalidInput(format!("variable name {name:?} is not an identifier")))
    }
}
