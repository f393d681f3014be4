//! Document-level types describing an HTTP API surface.
//!
//! These are the records the renderers walk: operations with their
//! parameters and responses, plus the [`Definition`]s they reference.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::definition::Definition;

/// HTTP methods supported by an operation.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use apidoc_define::RestMethod;
///
/// assert_eq!(RestMethod::from_str("GET").unwrap(), RestMethod::Get);
/// assert_eq!(RestMethod::Post.to_string(), "POST");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

/// Where a parameter is carried in the request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
}

/// A single operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParamLocation,
    #[serde(rename = "type")]
    pub type_expr: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

impl Param {
    /// Creates a parameter. Path parameters are always required.
    pub fn new(
        name: impl Into<String>,
        location: ParamLocation,
        type_expr: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            type_expr: type_expr.into(),
            required: location == ParamLocation::Path,
            description: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

/// A response of an operation. `type_expr` is `None` for bodiless responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_expr: Option<String>,
}

impl Response {
    pub fn new(status: u16, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
            type_expr: None,
        }
    }

    pub fn with_body(mut self, type_expr: impl Into<String>) -> Self {
        self.type_expr = Some(type_expr.into());
        self
    }

    pub fn has_body(&self) -> bool {
        self.type_expr.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A single API operation.
///
/// ## Examples
///
/// ```
/// use apidoc_define::{Operation, Param, ParamLocation, Response, RestMethod};
///
/// let op = Operation::new("GetUser", RestMethod::Get, "/users/{id}")
///     .with_param(Param::new("id", ParamLocation::Path, "integer#int64"))
///     .with_response(Response::new(200, "The user").with_body("Result<User>"));
///
/// let types: Vec<&str> = op.type_exprs().collect();
/// assert_eq!(types, vec!["integer#int64", "Result<User>"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: String,
    pub method: RestMethod,
    pub path: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl Operation {
    pub fn new(id: impl Into<String>, method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            method,
            path: path.into(),
            summary: String::new(),
            tags: Vec::new(),
            params: Vec::new(),
            responses: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }

    /// Type expressions used by this operation: parameters first, then
    /// response bodies, each in declaration order.
    pub fn type_exprs(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .map(|p| p.type_expr.as_str())
            .chain(self.responses.iter().filter_map(|r| r.type_expr.as_deref()))
    }
}

/// A complete API document: the caller-owned value every build works from.
///
/// ## Examples
///
/// ```
/// use apidoc_define::{ApiDocument, Definition, Property};
///
/// let doc = ApiDocument::new("Pets", "1.0.0")
///     .with_definition(Definition::new("Pet").with_property(Property::new("name", "string")));
///
/// assert_eq!(doc.definitions.len(), 1);
/// assert!(doc.operations.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub base_path: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl ApiDocument {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: String::new(),
            base_path: String::new(),
            tags: Vec::new(),
            operations: Vec::new(),
            definitions: Vec::new(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.tags.push(Tag {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.definitions.push(definition);
        self
    }
}
