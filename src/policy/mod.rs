/*!
 * Policy Module
 * Rules, combination strategies and the decisions they render
 */

pub mod conditions;
mod all_must_allow;
mod decision;
mod effect;
mod first_match;
mod rule;
mod traits;

pub use all_must_allow::AllMustAllowPolicy;
pub use decision::{join_rule_ids, Decision};
pub use effect::Effect;
pub use first_match::FirstMatchPolicy;
pub use rule::{validate_rules, Predicate, PredicateRule, Rule, RuleRef};
pub use traits::Policy;
