/*!
 * Rule Effect
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome a rule carries when it applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    #[inline]
    pub fn is_allow(&self) -> bool {
        matches!(self, Effect::Allow)
    }

    #[inline]
    pub fn is_deny(&self) -> bool {
        matches!(self, Effect::Deny)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Allow => f.write_str("allow"),
            Effect::Deny => f.write_str("deny"),
        }
    }
}
