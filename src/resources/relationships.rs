//! Relationship linkage between resources.
//!
//! Every resource object can carry a `relationships` block mapping a
//! relationship name to the identifiers of the linked resources. The same
//! shape is used on the request side (declaring a new linkage) and the
//! response side (describing an existing one). Order is semantically
//! meaningful for some relationships, such as the screenshots of a
//! screenshot set, and is preserved end to end by keeping linkages in a
//! `Vec`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resources::Reference;

/// One (id, type) pair identifying a linked resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linkage {
    /// The identifier of the linked resource.
    pub id: String,
    /// The wire type tag of the linked resource.
    #[serde(rename = "type")]
    pub resource_type: String,
}

impl Linkage {
    /// Creates a new linkage pair.
    #[must_use]
    pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
        }
    }
}

/// The data of a relationship: a single linkage or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkageData {
    /// A to-one relationship.
    One(Linkage),
    /// A to-many relationship, in server order.
    Many(Vec<Linkage>),
}

/// Links describing where a relationship's full data can be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RelationshipLinks {
    /// Link to the relationship itself.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Reference>,
    /// Link to the related resource(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Reference>,
}

/// One named relationship of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Relationship {
    /// The linked resource identifiers, when included in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LinkageData>,
    /// Links for fetching the relationship.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<RelationshipLinks>,
    /// Paging metadata for to-many relationships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// All relationships of a resource, keyed by relationship name.
pub type Relationships = HashMap<String, Relationship>;
