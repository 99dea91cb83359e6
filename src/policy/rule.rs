/*!
 * Rules
 * Single predicate units carrying a fixed effect
 */

use super::effect::Effect;
use crate::core::errors::{PolicyError, PolicyResult};
use crate::request::{Action, Resource, Subject};
use ahash::HashSet;
use std::fmt;
use std::sync::Arc;

/// Match predicate over a request triple
///
/// Must be side-effect free and must not block.
pub type Predicate = Box<dyn Fn(&dyn Subject, &dyn Resource, &dyn Action) -> bool + Send + Sync>;

/// A rule that can decide whether it applies to a request
pub trait Rule: Send + Sync {
    /// Test whether the rule applies
    fn matches(&self, subject: &dyn Subject, resource: &dyn Resource, action: &dyn Action) -> bool;

    /// Rule identity, unique within a policy
    fn id(&self) -> &str;

    /// Effect applied when the rule matches
    fn effect(&self) -> Effect;

    /// Currently inert: no combination strategy orders by priority
    fn priority(&self) -> i32 {
        0
    }
}

/// Shared rule handle; a rule can sit in several policies
pub type RuleRef = Arc<dyn Rule>;

/// Rule backed by a closure
pub struct PredicateRule {
    id: String,
    effect: Effect,
    priority: i32,
    predicate: Predicate,
}

impl PredicateRule {
    pub fn new<F>(id: impl Into<String>, effect: Effect, predicate: F) -> Self
    where
        F: Fn(&dyn Subject, &dyn Resource, &dyn Action) -> bool + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            effect,
            priority: 0,
            predicate: Box::new(predicate),
        }
    }

    pub fn allow<F>(id: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&dyn Subject, &dyn Resource, &dyn Action) -> bool + Send + Sync + 'static,
    {
        Self::new(id, Effect::Allow, predicate)
    }

    pub fn deny<F>(id: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&dyn Subject, &dyn Resource, &dyn Action) -> bool + Send + Sync + 'static,
    {
        Self::new(id, Effect::Deny, predicate)
    }

    /// Rule from an already boxed predicate, e.g. one built from `conditions`
    pub fn from_predicate(id: impl Into<String>, effect: Effect, predicate: Predicate) -> Self {
        Self {
            id: id.into(),
            effect,
            priority: 0,
            predicate,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Wrap into a shared handle
    pub fn shared(self) -> RuleRef {
        Arc::new(self)
    }
}

impl Rule for PredicateRule {
    fn matches(&self, subject: &dyn Subject, resource: &dyn Resource, action: &dyn Action) -> bool {
        (self.predicate)(subject, resource, action)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn effect(&self) -> Effect {
        self.effect
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

impl fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("id", &self.id)
            .field("effect", &self.effect)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Reject empty and duplicate rule identities
pub fn validate_rules(policy_id: &str, rules: &[RuleRef]) -> PolicyResult<()> {
    if policy_id.is_empty() {
        return Err(PolicyError::EmptyPolicyId);
    }

    let mut seen = HashSet::default();
    for rule in rules {
        let rule_id = rule.id();
        if rule_id.is_empty() {
            return Err(PolicyError::EmptyRuleId {
                policy_id: policy_id.to_string(),
            });
        }
        if !seen.insert(rule_id) {
            return Err(PolicyError::DuplicateRuleId {
                policy_id: policy_id.to_string(),
                rule_id: rule_id.to_string(),
            });
        }
    }

    Ok(())
}
