/*!
 * Conditions
 * Reusable match predicates for attribute, ownership and action checks
 *
 * Every condition reads a missing or mistyped attribute as "no match".
 */

use super::rule::Predicate;
use crate::request::{Action, AttributeValue, Resource, Subject};

/// Subject attribute equals a value of the same type
pub fn subject_attr_eq(key: impl Into<String>, expected: impl Into<AttributeValue>) -> Predicate {
    let key = key.into();
    let expected = expected.into();
    Box::new(move |subject: &dyn Subject, _resource: &dyn Resource, _action: &dyn Action| {
        subject.attributes().get(&key) == Some(&expected)
    })
}

/// Resource attribute equals a value of the same type
pub fn resource_attr_eq(key: impl Into<String>, expected: impl Into<AttributeValue>) -> Predicate {
    let key = key.into();
    let expected = expected.into();
    Box::new(move |_subject: &dyn Subject, resource: &dyn Resource, _action: &dyn Action| {
        resource.attributes().get(&key) == Some(&expected)
    })
}

/// The resource's string attribute `owner_key` names the subject
pub fn subject_owns_resource(owner_key: impl Into<String>) -> Predicate {
    let owner_key = owner_key.into();
    Box::new(move |subject: &dyn Subject, resource: &dyn Resource, _action: &dyn Action| {
        resource
            .attributes()
            .get_str(&owner_key)
            .is_some_and(|owner| owner == subject.id())
    })
}

pub fn subject_id_is(id: impl Into<String>) -> Predicate {
    let id = id.into();
    Box::new(move |subject: &dyn Subject, _resource: &dyn Resource, _action: &dyn Action| {
        subject.id() == id
    })
}

pub fn resource_type_is(resource_type: impl Into<String>) -> Predicate {
    let resource_type = resource_type.into();
    Box::new(move |_subject: &dyn Subject, resource: &dyn Resource, _action: &dyn Action| {
        resource.resource_type() == resource_type
    })
}

pub fn action_is(name: impl Into<String>) -> Predicate {
    let name = name.into();
    Box::new(move |_subject: &dyn Subject, _resource: &dyn Resource, action: &dyn Action| {
        action.name() == name
    })
}

/// All predicates hold; an empty list always holds
pub fn all_of(predicates: Vec<Predicate>) -> Predicate {
    Box::new(move |subject: &dyn Subject, resource: &dyn Resource, action: &dyn Action| {
        predicates.iter().all(|p| p(subject, resource, action))
    })
}

/// Any predicate holds; an empty list never holds
pub fn any_of(predicates: Vec<Predicate>) -> Predicate {
    Box::new(move |subject: &dyn Subject, resource: &dyn Resource, action: &dyn Action| {
        predicates.iter().any(|p| p(subject, resource, action))
    })
}

pub fn not(predicate: Predicate) -> Predicate {
    Box::new(move |subject: &dyn Subject, resource: &dyn Resource, action: &dyn Action| {
        !predicate(subject, resource, action)
    })
}
