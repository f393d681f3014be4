//! Recursive-descent parser for type expressions.
//!
//! ## Grammar
//!
//! ```text
//! TypeExpr  := Core ("[]")*
//! Core      := Primitive ("#" Format)? | Identifier ("<" TypeExpr ("," TypeExpr)* ">")?
//! Primitive := "integer" | "number" | "string" | "boolean" | "file"
//! ```
//!
//! `array` and `object` are keywords and never name a type. Without a `#`,
//! `integer` implies `int32` and `number` implies `double`; `integer#` has an
//! explicitly empty format.

use crate::errors::TypeGraphError;
use crate::grammar::{is_format, is_identifier, is_keyword, primitive, split_generic_args};
use crate::type_expr::TypeNode;

/// Parses a type expression into a [`TypeNode`] tree.
///
/// ## Examples
///
/// ```
/// use apidoc_gen::parser::parse_type;
/// use apidoc_gen::type_expr::{Primitive, TypeNode};
///
/// let node = parse_type("integer#int64").unwrap();
/// assert_eq!(
///     node,
///     TypeNode::Primitive {
///         name: "integer#int64".to_string(),
///         base: Primitive::Integer,
///         format: "int64".to_string(),
///     }
/// );
///
/// let node = parse_type("Result<Page<User>>[]").unwrap();
/// assert!(node.is_array());
/// assert_eq!(node.innermost().source(), "Result<Page<User>>");
/// ```
///
/// ## Errors
///
/// Returns `TypeGraphError::InvalidType` carrying the whole expression when
/// any fragment violates the grammar.
pub fn parse_type(type_expr: &str) -> Result<TypeNode, TypeGraphError> {
    parse_fragment(type_expr, type_expr)
}

fn parse_fragment(fragment: &str, whole: &str) -> Result<TypeNode, TypeGraphError> {
    let s = fragment.trim();
    if s.is_empty() {
        return Err(TypeGraphError::invalid_type(whole, "empty type"));
    }

    // One `[]` per level, outermost first.
    if let Some(prefix) = s.strip_suffix("[]") {
        let item = parse_fragment(prefix, whole)?;
        return Ok(TypeNode::Array {
            name: s.to_string(),
            item: Box::new(item),
        });
    }

    if let Some(open) = s.find('<') {
        return parse_generic(s, open, whole);
    }

    if let Some((base, format)) = s.split_once('#') {
        let Some(base_type) = primitive(base) else {
            return Err(TypeGraphError::invalid_type(
                whole,
                format!("format tags are only allowed on primitives, found '{base}#'"),
            ));
        };
        if !is_format(format) {
            return Err(TypeGraphError::invalid_type(
                whole,
                format!("malformed format tag '{format}'"),
            ));
        }
        return Ok(TypeNode::Primitive {
            name: s.to_string(),
            base: base_type,
            format: format.to_string(),
        });
    }

    if !is_identifier(s) {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("'{s}' is not a valid type name"),
        ));
    }
    if is_keyword(s) {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("'{s}' is a reserved word"),
        ));
    }
    if let Some(base) = primitive(s) {
        return Ok(TypeNode::Primitive {
            name: s.to_string(),
            base,
            format: base.default_format().to_string(),
        });
    }

    Ok(TypeNode::Object {
        name: s.to_string(),
        type_name: s.to_string(),
        generic_args: Vec::new(),
    })
}

fn parse_generic(s: &str, open: usize, whole: &str) -> Result<TypeNode, TypeGraphError> {
    let base = &s[..open];
    let Some(inner) = s[open + 1..].strip_suffix('>') else {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("generic argument list of '{base}' is not closed by '>'"),
        ));
    };

    if !is_identifier(base) {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("'{base}' is not a valid generic type name"),
        ));
    }
    if is_keyword(base) {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("'{base}' is a reserved word"),
        ));
    }
    if primitive(base).is_some() {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("primitive '{base}' cannot take generic arguments"),
        ));
    }

    let Some(args) = split_generic_args(inner) else {
        return Err(TypeGraphError::invalid_type(
            whole,
            format!("unbalanced angle brackets in '{s}'"),
        ));
    };

    let generic_args = args
        .into_iter()
        .map(|arg| parse_fragment(arg, whole))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TypeNode::Object {
        name: s.to_string(),
        type_name: base.to_string(),
        generic_args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_expr::Primitive;

    fn object(name: &str) -> TypeNode {
        TypeNode::Object {
            name: name.to_string(),
            type_name: name.to_string(),
            generic_args: vec![],
        }
    }

    fn reason(expr: &str) -> String {
        match parse_type(expr) {
            Err(TypeGraphError::InvalidType { type_expr, reason }) => {
                assert_eq!(type_expr, expr);
                reason
            }
            other => panic!("Expected InvalidType for '{expr}', got: {other:?}"),
        }
    }

    #[test]
    fn bare_primitives_get_default_formats() {
        let cases = [
            ("integer", Primitive::Integer, "int32"),
            ("number", Primitive::Number, "double"),
            ("string", Primitive::String, ""),
            ("boolean", Primitive::Boolean, ""),
            ("file", Primitive::File, ""),
        ];
        for (expr, base, format) in cases {
            assert_eq!(
                parse_type(expr).unwrap(),
                TypeNode::Primitive {
                    name: expr.to_string(),
                    base,
                    format: format.to_string(),
                }
            );
        }
    }

    #[test]
    fn explicit_empty_format_is_not_defaulted() {
        match parse_type("integer#").unwrap() {
            TypeNode::Primitive { base, format, .. } => {
                assert_eq!(base, Primitive::Integer);
                assert!(format.is_empty());
            }
            other => panic!("Expected primitive, got: {other:?}"),
        }
    }

    #[test]
    fn format_tag_is_free_form() {
        match parse_type("string#date-time").unwrap() {
            TypeNode::Primitive { format, .. } => assert_eq!(format, "date-time"),
            other => panic!("Expected primitive, got: {other:?}"),
        }
    }

    #[test]
    fn arrays_peel_one_level_at_a_time() {
        let node = parse_type("User[][]").unwrap();
        match &node {
            TypeNode::Array { name, item } => {
                assert_eq!(name, "User[][]");
                match item.as_ref() {
                    TypeNode::Array { name, item } => {
                        assert_eq!(name, "User[]");
                        assert_eq!(item.as_ref(), &object("User"));
                    }
                    other => panic!("Expected inner array, got: {other:?}"),
                }
            }
            other => panic!("Expected array, got: {other:?}"),
        }
    }

    #[test]
    fn array_of_formatted_primitive() {
        let node = parse_type("number#float[]").unwrap();
        assert_eq!(node.array_depth(), 1);
        assert_eq!(node.innermost().source(), "number#float");
    }

    #[test]
    fn bare_name_is_non_generic_object() {
        assert_eq!(parse_type("  User  ").unwrap(), object("User"));
        assert_eq!(parse_type("Object").unwrap(), object("Object"));
    }

    #[test]
    fn nested_generics_split_on_top_level_commas() {
        let node = parse_type("Object<T1, T2<T3>>[]").unwrap();
        let TypeNode::Array { item, .. } = node else {
            panic!("Expected array");
        };
        let TypeNode::Object {
            type_name,
            generic_args,
            ..
        } = *item
        else {
            panic!("Expected object");
        };
        assert_eq!(type_name, "Object");
        assert_eq!(generic_args.len(), 2);
        assert_eq!(generic_args[0], object("T1"));
        match &generic_args[1] {
            TypeNode::Object {
                name,
                type_name,
                generic_args,
            } => {
                assert_eq!(name, "T2<T3>");
                assert_eq!(type_name, "T2");
                assert_eq!(generic_args, &vec![object("T3")]);
            }
            other => panic!("Expected generic object, got: {other:?}"),
        }
    }

    #[test]
    fn deep_comma_ambiguity_is_resolved_by_depth() {
        let node = parse_type("A<B<C, D<E, F>>, G, H<I>>").unwrap();
        match node {
            TypeNode::Object { generic_args, .. } => {
                let sources: Vec<&str> = generic_args.iter().map(TypeNode::source).collect();
                assert_eq!(sources, vec!["B<C, D<E, F>>", "G", "H<I>"]);
            }
            other => panic!("Expected object, got: {other:?}"),
        }
    }

    #[test]
    fn formatted_primitive_as_generic_argument() {
        let node = parse_type("Result<integer#int64>").unwrap();
        assert_eq!(node.canonical(), "Result<integer#int64>");
    }

    #[test]
    fn keywords_are_rejected_everywhere() {
        assert!(reason("array").contains("reserved"));
        assert!(reason("object").contains("reserved"));
        assert!(reason("object#x").contains("only allowed on primitives"));
        assert!(reason("array<T>").contains("reserved"));
        assert!(reason("Result<object>").contains("reserved"));
        assert!(reason("array[]").contains("reserved"));
    }

    #[test]
    fn primitives_cannot_be_generic() {
        assert!(reason("string<T>").contains("cannot take generic arguments"));
    }

    #[test]
    fn format_on_object_is_rejected() {
        assert!(reason("User#id").contains("only allowed on primitives"));
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        for expr in [
            "",
            "   ",
            "[]",
            "Result<",
            "Result<T",
            "Result<T>>",
            "Result<<T>",
            "Result<>",
            "Result<T,>",
            "Result <T>",
            "Result<T> x",
            "integer#a#b",
            "integer #int64",
            "User]",
            "Us er",
            "«T»",
            ">",
        ] {
            assert!(parse_type(expr).is_err(), "'{expr}' should fail to parse");
        }
    }

    #[test]
    fn whitespace_inside_arguments_is_tolerated() {
        let node = parse_type("Map< string ,  User[] >").unwrap();
        assert_eq!(node.canonical(), "Map<string, User[]>");
        assert_eq!(node.source(), "Map< string ,  User[] >");
    }
}
