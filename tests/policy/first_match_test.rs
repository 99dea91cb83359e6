/*!
 * First-Match Policy Integration Tests
 */

use policy_kernel::{
    ActionDescriptor, Decision, FirstMatchPolicy, Policy, PredicateRule, ResourceDescriptor,
    RuleRef, SubjectDescriptor,
};
use pretty_assertions::assert_eq;

fn triple() -> (SubjectDescriptor, ResourceDescriptor, ActionDescriptor) {
    (
        SubjectDescriptor::new("user123").with_attribute("role", "editor"),
        ResourceDescriptor::new("document", "doc456"),
        ActionDescriptor::new("write"),
    )
}

#[test]
fn test_first_listed_match_wins() {
    let (s, r, a) = triple();
    let allow: RuleRef = PredicateRule::allow("R1", |_, _, _| true).shared();
    let deny: RuleRef = PredicateRule::deny("R2", |_, _, _| true).shared();

    let forward =
        FirstMatchPolicy::new("fm", "Forward", vec![allow.clone(), deny.clone()]).unwrap();
    let reversed = FirstMatchPolicy::new("fm", "Reversed", vec![deny, allow]).unwrap();

    assert_eq!(forward.evaluate(&s, &r, &a), Decision::matched(true, "Forward", "fm"));
    assert_eq!(reversed.evaluate(&s, &r, &a), Decision::matched(false, "Reversed", "fm"));
}

#[test]
fn test_skips_non_matching_rules() {
    let (s, r, a) = triple();
    let policy = FirstMatchPolicy::new(
        "editors",
        "Editors may write",
        vec![
            PredicateRule::deny("readers-only", |s, _, _| {
                s.attributes().get_str("role") == Some("reader")
            })
            .shared(),
            PredicateRule::allow("editor-write", |s, _, a| {
                s.attributes().get_str("role") == Some("editor") && a.name() == "write"
            })
            .shared(),
        ],
    )
    .unwrap();

    let decision = policy.evaluate(&s, &r, &a);
    assert!(decision.is_allowed());
    assert_eq!(decision.reason(), "Editors may write");
    assert_eq!(decision.matched_by(), "editors");
}

#[test]
fn test_missing_attribute_fails_closed() {
    let s = SubjectDescriptor::new("anonymous");
    let (_, r, a) = triple();
    let policy = FirstMatchPolicy::new(
        "roles",
        "Roles",
        vec![PredicateRule::allow("any-role", |s, _, _| s.attributes().contains("role")).shared()],
    )
    .unwrap();

    assert_eq!(policy.evaluate(&s, &r, &a), Decision::no_matching_rules());
}

#[test]
fn test_accessors() {
    let policy = FirstMatchPolicy::new("id-1", "Display Name", Vec::new()).unwrap();
    assert_eq!(policy.id(), "id-1");
    assert_eq!(policy.name(), "Display Name");
    assert!(policy.rules().is_empty());
}
