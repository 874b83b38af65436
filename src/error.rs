// Error taxonomy shared by resolvers, builders and composites.

use thiserror::Error;

/// Errors raised while resolving, registering or composing variants.
///
/// All of these are configuration or programming mistakes; nothing here is
/// transient, so callers should surface them rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("no variant registered under '{key}' in {domain}")]
    NotFound { domain: String, key: String },

    #[error("a variant is already registered under '{key}' in {domain}")]
    Conflict { domain: String, key: String },

    #[error("attaching node {child} under node {parent} would create a cycle")]
    Cycle { parent: usize, child: usize },

    #[error("variant '{variant}' does not satisfy operation '{operation}'")]
    ContractViolation { variant: String, operation: String },
}

impl PatternError {
    pub fn not_found(domain: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            domain: domain.into(),
            key: key.into(),
        }
    }

    pub fn conflict(domain: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Conflict {
            domain: domain.into(),
            key: key.into(),
        }
    }

    pub fn contract_violation(variant: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::ContractViolation {
            variant: variant.into(),
            operation: operation.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = PatternError::not_found("shapes", "sq");
        assert_eq!(err.to_string(), "no variant registered under 'sq' in shapes");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_cycle_display() {
        let err = PatternError::Cycle { parent: 3, child: 1 };
        assert!(err.to_string().contains("node 1 under node 3"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_contract_violation_display() {
        let err = PatternError::contract_violation("dot", "attach");
        assert_eq!(
            err.to_string(),
            "variant 'dot' does not satisfy operation 'attach'"
        );
    }
}
