/*!
 * Request Module
 * Subject, resource and action carriers with their attribute values
 *
 * Carriers are built fresh per request by the caller and only ever borrowed
 * by the engine. Borrowing also rules out a nil subject, resource or action.
 */

mod carriers;
mod value;

pub use carriers::{
    Action, ActionDescriptor, Resource, ResourceDescriptor, Subject, SubjectDescriptor,
};
pub use value::{AttributeValue, Attributes};
