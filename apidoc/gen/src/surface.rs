//! API surface collection and the document-build entry point.
//!
//! [`collect_used_types`] scans an [`ApiDocument`] for every type expression
//! it uses; [`resolve_definitions`] validates them, preprocesses the
//! document's definitions and runs specialization once, yielding the list a
//! renderer emits.

use std::collections::HashSet;

use apidoc_define::{ApiDocument, Definition};
use tracing::{info, instrument};

use crate::errors::TypeGraphError;
use crate::generics::preprocess;
use crate::specialize::specialize;
use crate::validation::validate_type;

/// Collects every type expression used across the document.
///
/// Order: operations in declaration order (parameters before responses),
/// then the property types of non-generic definitions. Duplicates (after
/// trimming) keep their first position.
///
/// ## Examples
///
/// ```
/// use apidoc_define::prelude::*;
/// use apidoc_gen::surface::collect_used_types;
///
/// let doc = ApiDocument::new("Users", "1.0")
///     .with_operation(
///         Operation::new("ListUsers", RestMethod::Get, "/users")
///             .with_param(Param::new("page", ParamLocation::Query, "integer"))
///             .with_response(Response::new(200, "OK").with_body("Page<User>")),
///     )
///     .with_definition(Definition::new("User").with_property(Property::new("age", "integer")));
///
/// assert_eq!(collect_used_types(&doc), vec!["integer", "Page<User>"]);
/// ```
pub fn collect_used_types(doc: &ApiDocument) -> Vec<String> {
    let operation_types = doc.operations.iter().flat_map(|op| op.type_exprs());
    let definition_types = doc
        .definitions
        .iter()
        .filter(|d| !d.is_generic())
        .flat_map(|d| d.properties.iter().map(|p| p.type_expr.as_str()));

    let mut seen = HashSet::new();
    let mut used = Vec::new();
    for type_expr in operation_types.chain(definition_types) {
        let type_expr = type_expr.trim();
        if seen.insert(type_expr) {
            used.push(type_expr.to_string());
        }
    }
    used
}

/// Resolves the definitions a renderer must emit for `doc`.
///
/// ## Examples
///
/// ```
/// use apidoc_define::prelude::*;
/// use apidoc_gen::surface::resolve_definitions;
///
/// let doc = ApiDocument::new("Users", "1.0")
///     .with_operation(
///         Operation::new("GetUser", RestMethod::Get, "/users/{id}")
///             .with_param(Param::new("id", ParamLocation::Path, "integer#int64"))
///             .with_response(Response::new(200, "OK").with_body("Result<User>")),
///     )
///     .with_definition(Definition::new("User").with_property(Property::new("name", "string")))
///     .with_definition(
///         Definition::new("Result")
///             .with_generic_params(["T"])
///             .with_property(Property::new("data", "T")),
///     );
///
/// let resolved = resolve_definitions(&doc).unwrap();
/// let names: Vec<&str> = resolved.iter().map(|d| d.name.as_str()).collect();
/// assert_eq!(names, vec!["User", "Result<User>"]);
/// ```
///
/// ## Errors
///
/// Any [`TypeGraphError`]; there is no partial result.
#[instrument(skip_all, fields(title = %doc.title))]
pub fn resolve_definitions(doc: &ApiDocument) -> Result<Vec<Definition>, TypeGraphError> {
    let used = collect_used_types(doc);
    for type_expr in &used {
        validate_type(type_expr)?;
    }

    let prepared = doc
        .definitions
        .iter()
        .map(preprocess)
        .collect::<Result<Vec<_>, _>>()?;

    let resolved = specialize(&prepared, &used)?;
    info!(
        used_types = used.len(),
        definitions = resolved.len(),
        "Resolved document definitions"
    );
    Ok(resolved)
}
