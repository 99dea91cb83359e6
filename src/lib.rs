/*!
 * Policy Kernel Library
 * Attribute-based policy decisions over in-memory rules
 *
 * A caller holds a [`Policy`], hands it a subject, resource and action, and
 * receives a [`Decision`] carrying the verdict, a reason and the deciding
 * policy's identity. Enforcement is the caller's job.
 */

pub mod audit;
pub mod core;
pub mod manager;
pub mod monitoring;
pub mod policy;
pub mod request;

// Re-exports
pub use audit::{AuditEvent, AuditLogger, AuditSeverity, AuditStats};
pub use crate::core::{EngineConfig, PolicyError, PolicyResult};
pub use manager::{DecisionManager, PolicyRef};
pub use monitoring::{evaluation_span, init_tracing};
pub use policy::{
    conditions, AllMustAllowPolicy, Decision, Effect, FirstMatchPolicy, Policy, Predicate,
    PredicateRule, Rule, RuleRef,
};
pub use request::{
    Action, ActionDescriptor, AttributeValue, Attributes, Resource, ResourceDescriptor, Subject,
    SubjectDescriptor,
};
