//! Error types for type-expression handling and definition resolution.

use thiserror::Error;

/// Errors raised while parsing type expressions or resolving definitions.
///
/// Every variant is fatal to the current document build; the offending type
/// string or definition name is always included so the author can fix the
/// declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeGraphError {
    /// A type expression does not match the grammar.
    #[error("Invalid type expression '{type_expr}': {reason}")]
    InvalidType {
        /// The offending type expression (as written).
        type_expr: String,
        /// What part of the grammar was violated.
        reason: String,
    },

    /// A declared generic parameter name is not a bare identifier.
    #[error("Invalid generic parameter '{name}' on definition '{definition}': {reason}")]
    InvalidGenericName {
        definition: String,
        name: String,
        reason: String,
    },

    /// Two input definitions share a name.
    #[error("Duplicate definition '{name}': definition names must be unique")]
    DuplicateDefinition { name: String },

    /// An object type references a definition that was never declared.
    #[error("Unknown type '{type_name}' in '{type_expr}': no definition with that name")]
    UnknownType {
        type_expr: String,
        type_name: String,
    },

    /// The number of generic arguments does not match the definition.
    #[error(
        "Generic arity mismatch in '{type_expr}': '{type_name}' expects {expected} argument(s), found {found}"
    )]
    GenericArity {
        type_expr: String,
        type_name: String,
        expected: usize,
        found: usize,
    },
}

impl TypeGraphError {
    pub(crate) fn invalid_type(type_expr: &str, reason: impl Into<String>) -> Self {
        Self::InvalidType {
            type_expr: type_expr.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the `apidoc-gen` binary.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to read an input document
    #[error("Failed to read input file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input document could not be decoded
    #[error("Failed to decode API document '{path}': {reason}")]
    DecodeError { path: String, reason: String },

    /// Failed to encode output
    #[error("Failed to encode output: {0}")]
    EncodeError(String),

    #[error(transparent)]
    TypeGraph(#[from] TypeGraphError),
}
