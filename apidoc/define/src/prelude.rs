//! Convenient re-exports for authoring API documents.
//!
//! ```
//! use apidoc_define::prelude::*;
//!
//! let def = Definition::new("Page")
//!     .with_generic_params(["T"])
//!     .with_property(Property::new("data", "T[]").required());
//! assert!(def.is_generic());
//! ```

pub use crate::definition::{Definition, Property, PropertyFacets};
pub use crate::document::{
    ApiDocument, Operation, Param, ParamLocation, Response, RestMethod, Tag,
};
