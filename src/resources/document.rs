//! Response document and resource envelope types.
//!
//! Every API response is a document wrapping one resource or an array of
//! resources under `data`, optional heterogeneous related resources under
//! `included`, paging links, and paging metadata.

use serde::{Deserialize, Serialize};

use crate::resources::{IncludedResource, Reference, Relationships};

/// A resource object: the common envelope shared by every resource kind.
///
/// Concrete kinds are aliases of this type over their attribute struct, e.g.
/// [`App`](crate::resources::App) is `Resource<AppAttributes>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A> {
    /// The wire type tag identifying the resource kind.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The resource's identifier.
    pub id: String,
    /// The kind-specific attributes, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<A>,
    /// Linkage to related resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
    /// Links for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

/// Links attached to a single resource object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResourceLinks {
    /// The canonical URL of the resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Reference>,
}

/// Links attached to a response document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DocumentLinks {
    /// The URL that produced this document.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Reference>,
    /// The first page of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Reference>,
    /// The next page of the collection, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Reference>,
}

/// Page accounting for a collection response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PagingMeta {
    /// Total number of resources matching the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Maximum number of resources returned per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Metadata attached to a response document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DocumentMeta {
    /// Paging information for collection responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<PagingMeta>,
}

/// A response document wrapping `data` of shape `T`.
///
/// `T` is a single resource for fetch responses and a `Vec` of resources for
/// list responses. Decoding the document decodes every element of the
/// `included` array through the resource type registry; one unrecognized or
/// malformed element fails the whole document decode.
///
/// # Example
///
/// ```rust,ignore
/// use appstore_connect::resources::{App, Document};
///
/// let page: Document<Vec<App>> = client.get("v1/apps", None).await?;
/// for app in &page.data {
///     println!("{}", app.id);
/// }
/// if let Some(cursor) = page.next_cursor() {
///     // fetch the next page with ?cursor=<cursor>
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    /// The primary resource(s).
    pub data: T,
    /// Related resources of heterogeneous kinds, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<IncludedResource>>,
    /// Links for this document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<DocumentLinks>,
    /// Metadata for this document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<DocumentMeta>,
}

impl<T> Document<T> {
    /// Returns the included resources, or an empty slice when none were
    /// requested.
    #[must_use]
    pub fn included(&self) -> &[IncludedResource] {
        self.included.as_deref().unwrap_or_default()
    }

    /// Returns the continuation cursor for the next page, if one exists.
    ///
    /// A `next` link without a `cursor` parameter means the collection has no
    /// further pages and yields `None`.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_ref())
            .map(Reference::cursor)
            .filter(|cursor| !cursor.is_empty())
    }
}
