/*!
 * All-Must-Allow Policy Integration Tests
 */

use policy_kernel::{
    ActionDescriptor, AllMustAllowPolicy, Decision, Policy, PolicyError, PredicateRule,
    ResourceDescriptor, SubjectDescriptor,
};
use pretty_assertions::assert_eq;

fn triple() -> (SubjectDescriptor, ResourceDescriptor, ActionDescriptor) {
    (
        SubjectDescriptor::new("user123"),
        ResourceDescriptor::new("document", "doc456"),
        ActionDescriptor::new("read"),
    )
}

#[test]
fn test_single_deny_defeats_many_allows() {
    let (s, r, a) = triple();
    let mut rules = Vec::new();
    for i in 0..10 {
        rules.push(PredicateRule::allow(format!("allow-{}", i), |_, _, _| true).shared());
    }
    rules.insert(4, PredicateRule::deny("B", |_, _, _| true).shared());

    let policy = AllMustAllowPolicy::new("amp", "Deny Overrides", rules).unwrap();

    assert_eq!(
        policy.evaluate(&s, &r, &a),
        Decision::matched(false, "denied by rules: B", "amp")
    );
}

#[test]
fn test_unanimous_allow_reason() {
    let (s, r, a) = triple();
    let policy = AllMustAllowPolicy::new(
        "amp",
        "Unanimous",
        vec![
            PredicateRule::allow("r1", |_, _, _| true).shared(),
            PredicateRule::allow("r2", |_, _, _| true).shared(),
        ],
    )
    .unwrap();

    let decision = policy.evaluate(&s, &r, &a);
    assert!(decision.is_allowed());
    assert_eq!(decision.reason(), "all rules allowed: r1, r2");
    assert_eq!(decision.matched_by(), "amp");
}

#[test]
fn test_deny_reason_follows_matched_order() {
    let (s, r, a) = triple();
    let policy = AllMustAllowPolicy::new(
        "amp",
        "Ordered",
        vec![
            PredicateRule::deny("d1", |_, _, _| true).shared(),
            PredicateRule::deny("d-skip", |_, _, _| false).shared(),
            PredicateRule::allow("a1", |_, _, _| true).shared(),
            PredicateRule::deny("d2", |_, _, _| true).shared(),
        ],
    )
    .unwrap();

    assert_eq!(policy.evaluate(&s, &r, &a).reason(), "denied by rules: d1, d2");
}

#[test]
fn test_empty_policy_denies() {
    let (s, r, a) = triple();
    let policy = AllMustAllowPolicy::new("amp", "Empty", Vec::new()).unwrap();

    let decision = policy.evaluate(&s, &r, &a);
    assert_eq!(decision, Decision::no_matching_rules());
    assert_eq!(decision.matched_by(), "");
}

#[test]
fn test_configuration_defects_fail_at_construction() {
    let result = AllMustAllowPolicy::new(
        "amp",
        "Dup",
        vec![
            PredicateRule::allow("x", |_, _, _| true).shared(),
            PredicateRule::allow("x", |_, _, _| true).shared(),
        ],
    );
    assert!(matches!(
        result,
        Err(PolicyError::DuplicateRuleId { ref rule_id, .. }) if rule_id == "x"
    ));

    assert!(matches!(
        AllMustAllowPolicy::new("", "No id", Vec::new()),
        Err(PolicyError::EmptyPolicyId)
    ));
}
