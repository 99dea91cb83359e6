/*!
 * Engine Limits and Constants
 *
 * Centralized location for capacities and the externally observable reason strings.
 */

// =============================================================================
// AUDIT LIMITS
// =============================================================================

/// Global audit ring buffer size
/// Oldest events are dropped once full
pub const MAX_AUDIT_EVENTS: usize = 10_000;

/// Per-policy audit buffer size
pub const MAX_AUDIT_EVENTS_PER_POLICY: usize = 1_000;

// =============================================================================
// DECISION REASONS
// =============================================================================

/// Reason reported when no rule applies (fail-closed default)
pub const NO_MATCHING_RULES: &str = "no matching rules";

/// Prefix for deny-overrides outcomes
pub const DENIED_BY_RULES: &str = "denied by rules: ";

/// Prefix for unanimous allow outcomes
pub const ALL_RULES_ALLOWED: &str = "all rules allowed: ";

/// Separator between rule identities in reason strings
/// [COMPAT] Callers parse this; it must stay comma + space
pub const RULE_ID_SEPARATOR: &str = ", ";
