/*!
 * Decision Manager Integration Tests
 * Shared-read evaluation, registry lifecycle and audit trail
 */

use policy_kernel::{
    ActionDescriptor, AllMustAllowPolicy, AuditSeverity, Decision, DecisionManager, EngineConfig,
    FirstMatchPolicy, Policy, PolicyError, PolicyRef, PredicateRule, ResourceDescriptor,
    SubjectDescriptor,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

fn owner_policy() -> PolicyRef {
    Arc::new(
        AllMustAllowPolicy::new(
            "owner-policy",
            "Owner Access",
            vec![
                PredicateRule::allow("owner", |s, r, _| {
                    r.attributes().get_str("owner") == Some(s.id())
                })
                .shared(),
                PredicateRule::deny("no-delete", |_, _, a| a.name() == "delete").shared(),
            ],
        )
        .unwrap(),
    )
}

#[test]
fn test_concurrent_evaluation_of_shared_policy() {
    let policy = owner_policy();
    let baseline = policy.evaluate(
        &SubjectDescriptor::new("alice"),
        &ResourceDescriptor::new("document", "d1").with_attribute("owner", "alice"),
        &ActionDescriptor::new("read"),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || {
                let subject = SubjectDescriptor::new("alice");
                let resource =
                    ResourceDescriptor::new("document", "d1").with_attribute("owner", "alice");
                let action = ActionDescriptor::new("read");
                (0..500)
                    .map(|_| policy.evaluate(&subject, &resource, &action))
                    .collect::<Vec<Decision>>()
            })
        })
        .collect();

    for handle in handles {
        for decision in handle.join().unwrap() {
            assert_eq!(decision, baseline);
        }
    }
    assert_eq!(baseline.reason(), "all rules allowed: owner");
}

#[test]
fn test_concurrent_managed_evaluation_is_audited() {
    let manager = DecisionManager::new();
    manager.register(owner_policy()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let manager = manager.clone();
            thread::spawn(move || {
                let subject = SubjectDescriptor::new(format!("user{}", i));
                let resource =
                    ResourceDescriptor::new("document", "d1").with_attribute("owner", "user0");
                for _ in 0..25 {
                    manager
                        .evaluate("owner-policy", &subject, &resource, &ActionDescriptor::new("read"))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = manager.audit_stats();
    assert_eq!(stats.total_events, 100);
    // user1..user3 get no matching rules every time
    assert_eq!(stats.total_denials, 75);
    assert_eq!(manager.audit().denial_count("user0"), 0);
    assert_eq!(manager.audit().denial_count("user2"), 25);
}

#[test]
fn test_replace_swaps_policy_version() {
    let manager = DecisionManager::new();
    manager.register(owner_policy()).unwrap();

    let subject = SubjectDescriptor::new("bob");
    let resource = ResourceDescriptor::new("document", "d1").with_attribute("owner", "alice");
    let read = ActionDescriptor::new("read");

    let before = manager.evaluate("owner-policy", &subject, &resource, &read).unwrap();
    assert!(!before.is_allowed());

    let open: PolicyRef = Arc::new(
        FirstMatchPolicy::new(
            "owner-policy",
            "Open Reads",
            vec![PredicateRule::allow("reads", |_, _, a| a.name() == "read").shared()],
        )
        .unwrap(),
    );
    let old = manager.replace(open).unwrap();
    assert_eq!(old.name(), "Owner Access");

    let after = manager.evaluate("owner-policy", &subject, &resource, &read).unwrap();
    assert_eq!(after, Decision::matched(true, "Open Reads", "owner-policy"));
    assert_eq!(manager.policy_ids(), vec!["owner-policy".to_string()]);
}

#[test]
fn test_unregistered_policy_is_an_error() {
    let manager = DecisionManager::new();
    let result = manager.evaluate(
        "missing",
        &SubjectDescriptor::new("alice"),
        &ResourceDescriptor::new("document", "d1"),
        &ActionDescriptor::new("read"),
    );

    assert_eq!(result, Err(PolicyError::PolicyNotFound("missing".to_string())));
    assert_eq!(manager.audit_stats().total_events, 0);
}

#[test]
fn test_audit_records_decision_details() {
    let manager = DecisionManager::with_config(EngineConfig {
        audit_capacity: 8,
        audit_capacity_per_policy: 4,
        ..EngineConfig::default()
    })
    .unwrap();
    let policy = owner_policy();

    let subject = SubjectDescriptor::new("alice");
    let resource = ResourceDescriptor::new("document", "d1").with_attribute("owner", "alice");

    manager.evaluate_with(policy.as_ref(), &subject, &resource, &ActionDescriptor::new("delete"));

    let events = manager.audit().for_policy("owner-policy", 10);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].subject_id, "alice");
    assert_eq!(events[0].resource_id, "d1");
    assert_eq!(events[0].action, "delete");
    assert_eq!(events[0].severity, AuditSeverity::Warning);
    assert_eq!(events[0].decision.reason(), "denied by rules: no-delete");

    for _ in 0..20 {
        manager.evaluate_with(policy.as_ref(), &subject, &resource, &ActionDescriptor::new("read"));
    }
    assert_eq!(manager.audit_stats().total_events, 8);
    assert_eq!(manager.audit().for_policy("owner-policy", 10).len(), 4);
}
