/*!
 * Error Types
 * Configuration defects raised while building policies and the decision manager
 *
 * Evaluation itself never fails: a policy always renders a Decision. Everything
 * here is surfaced at construction, registration or configuration time.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for policy construction and management
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Policy configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum PolicyError {
    #[error("Policy identity must not be empty")]
    #[diagnostic(
        code(policy::empty_policy_id),
        help("Give every policy a stable, non-empty identifier; it is reported as matched-by.")
    )]
    EmptyPolicyId,

    #[error("Rule identity must not be empty in policy '{policy_id}'")]
    #[diagnostic(
        code(policy::empty_rule_id),
        help("Rule identities appear in decision reasons and must be non-empty.")
    )]
    EmptyRuleId { policy_id: String },

    #[error("Duplicate rule '{rule_id}' in policy '{policy_id}'")]
    #[diagnostic(
        code(policy::duplicate_rule_id),
        help("Rule identities must be unique within a policy so reason strings stay unambiguous.")
    )]
    DuplicateRuleId { policy_id: String, rule_id: String },

    #[error("Policy '{0}' is already registered")]
    #[diagnostic(
        code(policy::duplicate_policy_id),
        help("Use replace() to swap a registered policy for a new version.")
    )]
    DuplicatePolicyId(String),

    #[error("Policy '{0}' not found")]
    #[diagnostic(
        code(policy::not_found),
        help("Register the policy with the decision manager before evaluating against it.")
    )]
    PolicyNotFound(String),

    #[error("Invalid configuration for {key}: {reason}")]
    #[diagnostic(
        code(policy::invalid_config),
        help("Check the POLICY_* environment variables.")
    )]
    InvalidConfig { key: String, reason: String },
}
