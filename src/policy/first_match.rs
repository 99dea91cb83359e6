/*!
 * First-Match Policy
 * The first applicable rule in stored order decides
 */

use super::decision::Decision;
use super::rule::{validate_rules, RuleRef};
use super::traits::Policy;
use crate::core::errors::PolicyResult;
use crate::request::{Action, Resource, Subject};
use tracing::{debug, trace};

/// First-applicable combination
///
/// List order is the only precedence; rule priority is ignored.
pub struct FirstMatchPolicy {
    id: String,
    name: String,
    rules: Vec<RuleRef>,
}

impl FirstMatchPolicy {
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

impl Policy for FirstMatchPolicy {
    fn evaluate(
        &self,
        subject: &dyn Subject,
        resource: &dyn Resource,
        action: &dyn Action,
    ) -> Decision {
        for rule in &self.rules {
            let matched = rule.matches(subject, resource, action);
            trace!(policy_id = %self.id, rule_id = rule.id(), matched, "rule tested");

            if matched {
                let allow = rule.effect().is_allow();
                debug!(
                    policy_id = %self.id,
                    rule_id = rule.id(),
                    allow,
                    "first matching rule decided"
                );
                return Decision::matched(allow, self.name.clone(), self.id.clone());
            }
        }

        debug!(policy_id = %self.id, "no rule matched, denying");
        Decision::no_matching_rules()
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for FirstMatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstMatchPolicy")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .finish()
    }
}
