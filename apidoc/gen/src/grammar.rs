//! Lexical rules shared by the parser and the validator.
//!
//! Both entry points must accept exactly the same language, so the character
//! classes and the generic-argument splitter live here and nowhere else.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::type_expr::Primitive;

/// Grammar keywords that can never name an instantiable type.
pub const RESERVED_KEYWORDS: [&str; 2] = ["array", "object"];

lazy_static! {
    /// Identifier characters. `«` and `»` are deliberately excluded: they mark
    /// generic parameters after preprocessing.
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();

    /// A format tag: anything but whitespace and grammar punctuation.
    static ref FORMAT: Regex = Regex::new(r"^[^\s#<>,\[\]]*$").unwrap();
}

pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

pub fn is_format(s: &str) -> bool {
    FORMAT.is_match(s)
}

pub fn is_keyword(s: &str) -> bool {
    RESERVED_KEYWORDS.contains(&s)
}

pub fn primitive(s: &str) -> Option<Primitive> {
    Primitive::from_str(s).ok()
}

/// Names that may not be used for objects or generic parameters.
pub fn is_reserved(s: &str) -> bool {
    is_keyword(s) || primitive(s).is_some()
}

/// Splits a generic argument list on top-level commas.
///
/// Returns `None` when the angle brackets are unbalanced. Fragments are not
/// trimmed and may be empty.
pub fn split_generic_args(args: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (idx, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&args[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    parts.push(&args[start..]);
    Some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_reject_marker_characters() {
        assert!(is_identifier("User"));
        assert!(is_identifier("_T1"));
        assert!(!is_identifier("1User"));
        assert!(!is_identifier("«T»"));
        assert!(!is_identifier("User Name"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn format_tags_exclude_punctuation() {
        assert!(is_format("int64"));
        assert!(is_format("date-time"));
        assert!(is_format(""));
        assert!(!is_format("a b"));
        assert!(!is_format("x#y"));
        assert!(!is_format("x>"));
    }

    #[test]
    fn reserved_names_cover_keywords_and_primitives() {
        assert!(is_reserved("array"));
        assert!(is_reserved("object"));
        assert!(is_reserved("integer"));
        assert!(!is_reserved("Object"));
        assert!(!is_reserved("User"));
    }

    #[test]
    fn split_respects_nesting() {
        assert_eq!(
            split_generic_args("Map<string, User>, integer").unwrap(),
            vec!["Map<string, User>", " integer"]
        );
        assert_eq!(
            split_generic_args("A<B<C, D>, E>, F<G>").unwrap(),
            vec!["A<B<C, D>, E>", " F<G>"]
        );
    }

    #[test]
    fn split_keeps_empty_fragments() {
        assert_eq!(split_generic_args("").unwrap(), vec![""]);
        assert_eq!(split_generic_args("A,").unwrap(), vec!["A", ""]);
    }

    #[test]
    fn split_rejects_unbalanced_brackets() {
        assert!(split_generic_args("A<B").is_none());
        assert!(split_generic_args("A>B").is_none());
        assert!(split_generic_args("A>, <B").is_none());
    }
}
