//! Structural validation of type expressions.
//!
//! [`validate_type`] checks that a string has the shape of a type expression
//! without building a tree, and is used as a cheap gate before parsing or
//! specialization. It accepts exactly the strings [`crate::parser::parse_type`]
//! accepts. Whether the named object types exist is not its concern.
//!
//! [`validate_generic_name`] checks the stricter subgrammar for declared
//! generic parameter names: a bare, non-reserved identifier.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::TypeGraphError;
use crate::grammar::{is_identifier, is_keyword, is_reserved, primitive, split_generic_args};

lazy_static! {
    /// Shape of a single type (after `[]` suffixes are removed):
    /// identifier, then either a `#format` or a `<...>` argument list.
    static ref TYPE_SHAPE: Regex =
        Regex::new(r"(?s)^([A-Za-z_][A-Za-z0-9_]*)(?:#([^\s#<>,\[\]]*)|<(.*)>)?$").unwrap();
}

/// Validates the structure of a type expression.
///
/// ## Examples
///
/// ```
/// use apidoc_gen::validation::validate_type;
///
/// assert!(validate_type("Result<Page<User>>[]").is_ok());
/// assert!(validate_type("integer#int64").is_ok());
/// assert!(validate_type("Result<Page<User>").is_err());
/// assert!(validate_type("object").is_err());
/// ```
///
/// ## Errors
///
/// Returns `TypeGraphError::InvalidType` for unbalanced brackets, illegal
/// characters, misplaced format tags, or reserved-word misuse.
pub fn validate_type(type_expr: &str) -> Result<(), TypeGraphError> {
    validate_fragment(type_expr, type_expr)
}

fn validate_fragment(fragment: &str, whole: &str) -> Result<(), TypeGraphError> {
    let mut s = fragment.trim();
    while let Some(prefix) = s.strip_suffix("[]") {
        s = prefix.trim();
    }
    if s.is_empty() {
        return Err(TypeGraphError::invalid_type(whole, "empty type"));
    }

    let Some(caps) = TYPE_SHAPE.captures(s) else {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("'{s}' does not match the type grammar"),
        ));
    };
    let base = caps.get(1).map_or("", |m| m.as_str());

    if caps.get(2).is_some() {
        if primitive(base).is_none() {
            return Err(TypeGraphError::invalid_type(
                whole,
                format!("format tags are only allowed on primitives, found '{base}#'"),
            ));
        }
        return Ok(());
    }

    if is_keyword(base) {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("'{base}' is a reserved word"),
        ));
    }

    if let Some(args) = caps.get(3) {
        if primitive(base).is_some() {
            return Err(TypeGraphError::invalid_type(
                whole,
                format!("primitive '{base}' cannot take generic arguments"),
            ));
        }
        let Some(parts) = split_generic_args(args.as_str()) else {
            return Err(TypeGraphError::invalid_type(
                whole,
                format!("unbalanced angle brackets in '{s}'"),
            ));
        };
        for part in parts {
            validate_fragment(part, whole)?;
        }
    }

    Ok(())
}

/// Validates a declared generic parameter name for `definition`.
///
/// ## Examples
///
/// ```
/// use apidoc_gen::validation::validate_generic_name;
///
/// assert!(validate_generic_name("Result", "T").is_ok());
/// assert!(validate_generic_name("Result", "T[]").is_err());
/// assert!(validate_generic_name("Result", "string").is_err());
/// ```
pub fn validate_generic_name(definition: &str, name: &str) -> Result<(), TypeGraphError> {
    let reason = if !is_identifier(name) {
        "generic parameters must be bare identifiers (letters, digits, '_')"
    } else if is_reserved(name) {
        "generic parameters cannot use reserved type names"
    } else {
        return Ok(());
    };

    Err(TypeGraphError::InvalidGenericName {
        definition: definition.to_string(),
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_expressions() {
        for expr in [
            "integer",
            "integer#",
            "number#float",
            "string#date-time[]",
            "User",
            "User[][]",
            "Object<T>",
            "Result<Page<User>>",
            "Map<string, User[]>[]",
            "A<B<C, D<E, F>>, G, H<I>>",
            " Result< integer#int64 > ",
        ] {
            assert!(validate_type(expr).is_ok(), "'{expr}' should validate");
        }
    }

    #[test]
    fn rejects_malformed_expressions() {
        for expr in [
            "",
            "[]",
            "array",
            "object",
            "object#x",
            "array<T>",
            "string<T>",
            "User#x",
            "Result<T",
            "Result<T>>",
            "Result<>",
            "Result<,T>",
            "integer#a#b",
            "Result <T>",
            "«T»",
            "Us-er",
        ] {
            assert!(validate_type(expr).is_err(), "'{expr}' should be rejected");
        }
    }

    #[test]
    fn error_reports_whole_expression() {
        match validate_type("Result<Page<object>>") {
            Err(TypeGraphError::InvalidType { type_expr, reason }) => {
                assert_eq!(type_expr, "Result<Page<object>>");
                assert!(reason.contains("reserved"));
            }
            other => panic!("Expected InvalidType, got: {other:?}"),
        }
    }

    #[test]
    fn generic_names_use_strict_subgrammar() {
        assert!(validate_generic_name("Page", "T").is_ok());
        assert!(validate_generic_name("Page", "Item_2").is_ok());
        for bad in ["", "T<U>", "T#x", "T[]", " T", "«T»", "array", "integer"] {
            match validate_generic_name("Page", bad) {
                Err(TypeGraphError::InvalidGenericName {
                    definition, name, ..
                }) => {
                    assert_eq!(definition, "Page");
                    assert_eq!(name, bad);
                }
                other => panic!("Expected InvalidGenericName for '{bad}', got: {other:?}"),
            }
        }
    }
}
