//! Apidoc Definition Library
//!
//! Plain data types for describing an HTTP API: operations, parameters,
//! responses and the (possibly generic) data-model definitions they refer to.
//! These values are consumed by `apidoc-gen`, which parses their type
//! expressions and specializes generic definitions into emittable ones.
//!
//! ## Core Types
//!
//! - [`ApiDocument`] - The caller-owned document passed to every build
//! - [`Operation`] - A single operation with its [`Param`]s and [`Response`]s
//! - [`Definition`] - A named record type, optionally generic (`Result<T>`)
//! - [`Property`] - A field of a definition, typed by a type expression
//!
//! ## Examples
//!
//! ```
//! use apidoc_define::prelude::*;
//!
//! let doc = ApiDocument::new("Users", "1.0.0")
//!     .with_operation(
//!         Operation::new("GetUser", RestMethod::Get, "/users/{id}")
//!             .with_param(Param::new("id", ParamLocation::Path, "integer#int64"))
//!             .with_response(Response::new(200, "OK").with_body("Result<User>")),
//!     )
//!     .with_definition(Definition::new("User").with_property(Property::new("name", "string")))
//!     .with_definition(
//!         Definition::new("Result")
//!             .with_generic_params(["T"])
//!             .with_property(Property::new("data", "T")),
//!     );
//!
//! assert_eq!(doc.definitions.len(), 2);
//! ```

pub mod definition;
pub mod document;
pub mod prelude;

pub use definition::{Definition, Property, PropertyFacets};
pub use document::{ApiDocument, Operation, Param, ParamLocation, Response, RestMethod, Tag};
