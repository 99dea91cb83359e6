/*!
 * All-Must-Allow Policy
 * Deny-overrides combination: any applicable deny defeats every applicable allow
 */

use super::decision::{join_rule_ids, Decision};
use super::rule::{validate_rules, RuleRef};
use super::traits::Policy;
use crate::core::errors::PolicyResult;
use crate::core::limits::{ALL_RULES_ALLOWED, DENIED_BY_RULES};
use crate::request::{Action, Resource, Subject};
use tracing::{debug, trace};

/// Unanimous-consent combination
///
/// No applicable rule is itself a deny.
pub struct AllMustAllowPolicy {
    id: String,
    name: String,
    rules: Vec<RuleRef>,
}

impl AllMustAllowPolicy {
    /// Create a policy, rejecting empty or duplicate identities
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rules: Vec<RuleRef>,
    ) -> PolicyResult<Self> {
        let id = id.into();
        validate_rules(&id, &rules)?;
        Ok(Self {
            id,
            name: name.into(),
            rules,
        })
    }

    pub fn rules(&self) -> &[RuleRef] {
        &self.rules
    }
}

impl Policy for AllMustAllowPolicy {
    fn evaluate(
        &self,
        subject: &dyn Subject,
        resource: &dyn Resource,
        action: &dyn Action,
    ) -> Decision {
        // Matched set keeps stored order
        let matched: Vec<&RuleRef> = self
            .rules
            .iter()
            .filter(|rule| {
                let hit = rule.matches(subject, resource, action);
                trace!(policy_id = %self.id, rule_id = rule.id(), matched = hit, "rule tested");
                hit
            })
            .collect();

        if matched.is_empty() {
            debug!(policy_id = %self.id, "no rule matched, denying");
            return Decision::no_matching_rules();
        }

        let denied_by: Vec<&str> = matched
            .iter()
            .filter(|rule| rule.effect().is_deny())
            .map(|rule| rule.id())
            .collect();

        if !denied_by.is_empty() {
            let reason = format!("{}{}", DENIED_BY_RULES, join_rule_ids(denied_by));
            debug!(policy_id = %self.id, %reason, "deny overrides");
            return Decision::matched(false, reason, self.id.clone());
        }

        let reason = format!(
            "{}{}",
            ALL_RULES_ALLOWED,
            join_rule_ids(matched.iter().map(|rule| rule.id()))
        );
        debug!(policy_id = %self.id, %reason, "all matching rules allowed");
        Decision::matched(true, reason, self.id.clone())
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for AllMustAllowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllMustAllowPolicy")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .finish()
    }
}
