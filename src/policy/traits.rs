/*!
 * Policy Traits
 * The caller-facing decision contract every combination strategy implements
 */

use super::decision::Decision;
use crate::request::{Action, Resource, Subject};

/// A policy that renders one decision from its rules
///
/// Evaluation takes `&self` and must not mutate policy or rule state, so a
/// single instance can be shared across threads without locking.
pub trait Policy: Send + Sync {
    /// Evaluate a request triple; always total
    fn evaluate(&self, subject: &dyn Subject, resource: &dyn Resource, action: &dyn Action)
        -> Decision;

    /// Policy identity, reported as matched-by
    fn id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;
}
