/*!
 * Decision
 * The verdict a policy renders, with its reason and deciding policy
 */

use crate::core::limits::{NO_MATCHING_RULES, RULE_ID_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Policy decision
///
/// Carries no timestamp: evaluating the same request twice yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Decision {
    /// Whether access is granted
    pub allow: bool,
    /// Human-readable reason
    pub reason: String,
    /// Identity of the deciding policy, empty when no rule matched
    #[serde(default)]
    pub matched_by: String,
}

impl Decision {
    /// Fail-closed default when no rule applies
    pub fn no_matching_rules() -> Self {
        Self {
            allow: false,
            reason: NO_MATCHING_RULES.to_string(),
            matched_by: String::new(),
        }
    }

    /// Decision made by a policy
    ///
    /// Takes the reason verbatim. The shipped strategies keep `allow` and the
    /// reason prefix in agreement; custom `Policy` implementations must do the
    /// same, nothing here checks it.
    pub fn matched(allow: bool, reason: impl Into<String>, policy_id: impl Into<String>) -> Self {
        Self {
            allow,
            reason: reason.into(),
            matched_by: policy_id.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allow
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn matched_by(&self) -> &str {
        &self.matched_by
    }

    /// True when a policy made the call rather than the fail-closed default
    pub fn is_matched(&self) -> bool {
        !self.matched_by.is_empty()
    }
}

/// Join rule identities with the reason-string separator, keeping order
pub fn join_rule_ids<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for (i, id) in ids.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(RULE_ID_SEPARATOR);
        }
        joined.push_str(id);
    }
    joined
}
