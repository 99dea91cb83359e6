/*!
 * Decision Manager
 * Registry of shared, immutable policies with audited evaluation
 *
 * ## Usage
 * ```ignore
 * use policy_kernel::{DecisionManager, FirstMatchPolicy, PredicateRule};
 * use std::sync::Arc;
 *
 * let manager = DecisionManager::new();
 * manager.register(Arc::new(FirstMatchPolicy::new("docs", "Document Access", rules)?))?;
 *
 * let decision = manager.evaluate("docs", &subject, &resource, &action)?;
 * if !decision.is_allowed() {
 *     eprintln!("Denied: {}", decision.reason());
 * }
 * ```
 */

use crate::audit::{AuditEvent, AuditLogger, AuditStats};
use crate::core::config::EngineConfig;
use crate::core::errors::{PolicyError, PolicyResult};
use crate::monitoring::evaluation_span;
use crate::policy::{Decision, Policy};
use crate::request::{Action, Resource, Subject};
use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shared policy handle
pub type PolicyRef = Arc<dyn Policy>;

/// Central decision manager
///
/// Policies are never mutated once registered; `replace` swaps in a new
/// instance while in-flight evaluations finish against the old one.
#[derive(Clone)]
pub struct DecisionManager {
    policies: Arc<DashMap<String, PolicyRef, RandomState>>,
    audit: Arc<AuditLogger>,
    config: EngineConfig,
}

impl DecisionManager {
    pub fn new() -> Self {
        Self {
            policies: Arc::new(DashMap::with_hasher(RandomState::new())),
            audit: Arc::new(AuditLogger::new()),
            config: EngineConfig::default(),
        }
    }

    /// Build from a caller-supplied config, rejecting invalid capacities
    pub fn with_config(config: EngineConfig) -> PolicyResult<Self> {
        debug!(
            audit_enabled = config.audit_enabled,
            audit_capacity = config.audit_capacity,
            "Initializing decision manager"
        );
        let audit = AuditLogger::from_config(&config)?;
        Ok(Self {
            policies: Arc::new(DashMap::with_hasher(RandomState::new())),
            audit: Arc::new(audit),
            config,
        })
    }

    /// Build from POLICY_* environment variables
    pub fn from_env() -> PolicyResult<Self> {
        Self::with_config(EngineConfig::from_env()?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register a policy under its own identity
    pub fn register(&self, policy: PolicyRef) -> PolicyResult<()> {
        let id = policy.id().to_string();
        if id.is_empty() {
            return Err(PolicyError::EmptyPolicyId);
        }

        match self.policies.entry(id) {
            Entry::Occupied(entry) => {
                warn!(policy_id = %entry.key(), "Rejected duplicate policy registration");
                Err(PolicyError::DuplicatePolicyId(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                info!(policy_id = %entry.key(), name = policy.name(), "Registered policy");
                entry.insert(policy);
                Ok(())
            }
        }
    }

    /// Swap a registered policy for a new version, returning the old one
    pub fn replace(&self, policy: PolicyRef) -> PolicyResult<PolicyRef> {
        let id = policy.id().to_string();
        match self.policies.get_mut(&id) {
            Some(mut slot) => {
                info!(policy_id = %id, "Replaced policy");
                Ok(std::mem::replace(slot.value_mut(), policy))
            }
            None => Err(PolicyError::PolicyNotFound(id)),
        }
    }

    /// Unregister a policy and drop its per-policy audit buffer
    ///
    /// The global ring buffer and denial counters keep its events.
    pub fn remove(&self, policy_id: &str) -> PolicyResult<PolicyRef> {
        let (_, policy) = self
            .policies
            .remove(policy_id)
            .ok_or_else(|| PolicyError::PolicyNotFound(policy_id.to_string()))?;

        self.audit.clear_policy(policy_id);
        info!(policy_id, "Removed policy");
        Ok(policy)
    }

    pub fn get(&self, policy_id: &str) -> Option<PolicyRef> {
        self.policies.get(policy_id).map(|entry| Arc::clone(entry.value()))
    }

    /// Registered identities, sorted
    pub fn policy_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.policies.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Evaluate against a registered policy
    pub fn evaluate(
        &self,
        policy_id: &str,
        subject: &dyn Subject,
        resource: &dyn Resource,
        action: &dyn Action,
    ) -> PolicyResult<Decision> {
        // Clone the handle out so no map guard is held during evaluation
        let policy = self.get(policy_id).ok_or_else(|| {
            warn!(policy_id, "Evaluation against unregistered policy");
            PolicyError::PolicyNotFound(policy_id.to_string())
        })?;

        Ok(self.evaluate_with(policy.as_ref(), subject, resource, action))
    }

    /// Evaluate an arbitrary policy with auditing
    ///
    /// Unregistered policies are audited too and get their own per-policy
    /// buffer until `audit().clear_policy` drops it.
    pub fn evaluate_with(
        &self,
        policy: &dyn Policy,
        subject: &dyn Subject,
        resource: &dyn Resource,
        action: &dyn Action,
    ) -> Decision {
        let span = evaluation_span(policy.id(), subject.id(), action.name());
        let _enter = span.enter();

        let decision = policy.evaluate(subject, resource, action);

        if decision.is_allowed() {
            debug!(reason = %decision.reason, "Request allowed");
        } else {
            warn!(
                resource_type = resource.resource_type(),
                resource_id = resource.id(),
                reason = %decision.reason,
                "Request denied"
            );
        }

        if self.config.audit_enabled {
            self.audit.log(AuditEvent::new(
                policy.id(),
                subject,
                resource,
                action,
                decision.clone(),
            ));
        }

        decision
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn audit_stats(&self) -> AuditStats {
        self.audit.stats()
    }
}

impl Default for DecisionManager {
    fn default() -> Self {
        Self::new()
    }
}
