use thiserror::Error;

use crate::validate::FieldViolation;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("response is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error(
        "response does not match the {schema} schema ({} violation(s)): {}",
        .violations.len(),
        join_violations(.violations)
    )]
    Invalid {
        schema: &'static str,
        violations: Vec<FieldViolation>,
    },
}

impl ValidationError {
    /// Field-level violations; empty when the response was not JSON at all.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ValidationError::Syntax(_) => &[],
            ValidationError::Invalid { violations, .. } => violations,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
