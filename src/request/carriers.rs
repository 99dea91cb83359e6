/*!
 * Attribute Carriers
 * Read-only descriptors for the subject, resource and action of a request
 */

use super::value::{AttributeValue, Attributes};
use serde::{Deserialize, Serialize};

/// The entity requesting access
pub trait Subject: Send + Sync {
    fn id(&self) -> &str;

    fn attributes(&self) -> &Attributes;
}

/// The entity being accessed
pub trait Resource: Send + Sync {
    /// Type tag, e.g. "document"
    fn resource_type(&self) -> &str;

    fn id(&self) -> &str;

    fn attributes(&self) -> &Attributes;
}

/// The operation being attempted
pub trait Action: Send + Sync {
    fn name(&self) -> &str;
}

/// Owned subject descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectDescriptor {
    pub id: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl SubjectDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

impl Subject for SubjectDescriptor {
    fn id(&self) -> &str {
        &self.id
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Owned resource descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default)]
    pub attributes: Attributes,
}

impl ResourceDescriptor {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

impl Resource for ResourceDescriptor {
    fn resource_type(&self) -> &str {
        &self.resource_type
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Owned action descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionDescriptor {
    pub name: String,
}

impl ActionDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Action for ActionDescriptor {
    fn name(&self) -> &str {
        &self.name
    }
}
