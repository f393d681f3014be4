//! Apidoc type-expression and generics library.
//!
//! This crate is the core between the definition primitives in
//! `apidoc-define` and the Swagger / API Blueprint renderers. It:
//!
//! - parses compact type expressions (`Result<Page<User>>[]`,
//!   `integer#int64`) into a [`TypeNode`] tree
//! - validates type expressions and generic parameter names
//! - preprocesses generic definitions so parameter references are marked
//! - specializes generic definitions for every concrete instantiation used
//!   across an API surface
//!
//! ## Modules
//!
//! - [`parser`] - Type-expression parser
//! - [`validation`] - Structural validation without building a tree
//! - [`generics`] - Generic parameter marking (preprocessing)
//! - [`specialize`] - Discovery and monomorphization of generic definitions
//! - [`surface`] - Used-type collection and the document-build entry point
//! - [`type_expr`] - The parsed type model
//! - [`loader`] - Reading documents from JSON/YAML files
//! - [`errors`] - Error types
//!
//! ## Example Usage
//!
//! ```
//! use apidoc_define::prelude::*;
//! use apidoc_gen::resolve_definitions;
//!
//! let doc = ApiDocument::new("Users", "1.0")
//!     .with_operation(
//!         Operation::new("ListUsers", RestMethod::Get, "/users")
//!             .with_response(Response::new(200, "OK").with_body("Result<Page<User>>")),
//!     )
//!     .with_definition(Definition::new("User").with_property(Property::new("name", "string")))
//!     .with_definition(
//!         Definition::new("Page")
//!             .with_generic_params(["T"])
//!             .with_property(Property::new("data", "T[]")),
//!     )
//!     .with_definition(
//!         Definition::new("Result")
//!             .with_generic_params(["T"])
//!             .with_property(Property::new("data", "T")),
//!     );
//!
//! let names: Vec<String> = resolve_definitions(&doc)
//!     .unwrap()
//!     .into_iter()
//!     .map(|d| d.name)
//!     .collect();
//! assert_eq!(names, vec!["User", "Result<Page<User>>", "Page<User>"]);
//! ```

pub mod errors;
pub mod generics;
mod grammar;
pub mod loader;
pub mod parser;
pub mod specialize;
pub mod surface;
pub mod type_expr;
pub mod validation;

pub use errors::{GeneratorError, TypeGraphError};
pub use generics::preprocess;
pub use parser::parse_type;
pub use specialize::specialize;
pub use surface::{collect_used_types, resolve_definitions};
pub use type_expr::{Primitive, TypeNode};
pub use validation::{validate_generic_name, validate_type};
