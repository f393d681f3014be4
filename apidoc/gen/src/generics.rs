//! Generic definition preprocessing.
//!
//! Before specialization, every reference to a declared generic parameter in
//! a definition's property types is rewritten to a marked token (`T` becomes
//! `«T»`). Marked tokens cannot collide with caller-chosen type names because
//! `«`/`»` are not identifier characters, so a concrete type that happens to
//! be called `T` elsewhere in the API is never mistaken for the parameter.

use std::collections::HashSet;

use apidoc_define::Definition;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::errors::TypeGraphError;
use crate::validation::{validate_generic_name, validate_type};

pub const MARK_OPEN: char = '«';
pub const MARK_CLOSE: char = '»';

lazy_static! {
    static ref COMMA: Regex = Regex::new(r"\s*,\s*").unwrap();
}

/// Wraps a generic parameter name in marker characters.
///
/// ```
/// use apidoc_gen::generics::mark;
///
/// assert_eq!(mark("T"), "«T»");
/// ```
pub fn mark(name: &str) -> String {
    format!("{MARK_OPEN}{name}{MARK_CLOSE}")
}

/// Returns the bare name inside a marked token.
pub fn unmark(token: &str) -> Option<&str> {
    token.strip_prefix(MARK_OPEN)?.strip_suffix(MARK_CLOSE)
}

/// Prepares a definition for specialization.
///
/// Returns a clone of `def` in which:
///
/// 1. Generic parameter names are deduplicated (first occurrence wins) and
///    validated as bare identifiers; every property type is validated too,
///    whether or not the definition is ever instantiated.
/// 2. Whole-token occurrences of each parameter in every property type are
///    replaced by the marked token.
/// 3. Commas in property types are normalized to `", "`.
/// 4. The stored parameter names are replaced by their marked form.
///
/// Already-marked parameter names are accepted, so running this on its own
/// output is a no-op.
///
/// ## Examples
///
/// ```
/// use apidoc_define::{Definition, Property};
/// use apidoc_gen::generics::preprocess;
///
/// let map = Definition::new("Map")
///     .with_generic_params(["K", "V", "K"])
///     .with_property(Property::new("entries", "Entry<K,V>[]"));
///
/// let prepared = preprocess(&map).unwrap();
/// assert_eq!(prepared.generic_params, vec!["«K»", "«V»"]);
/// assert_eq!(prepared.properties[0].type_expr, "Entry<«K», «V»>[]");
/// ```
///
/// ## Errors
///
/// Returns `TypeGraphError::InvalidGenericName` if a parameter name is not a
/// bare, non-reserved identifier, and `TypeGraphError::InvalidType` if a
/// property type is malformed.
pub fn preprocess(def: &Definition) -> Result<Definition, TypeGraphError> {
    let mut seen = HashSet::new();
    let mut params: Vec<&str> = Vec::new();
    for raw in &def.generic_params {
        let bare = unmark(raw).unwrap_or(raw);
        if !seen.insert(bare) {
            continue;
        }
        validate_generic_name(&def.name, bare).map_err(|err| match err {
            TypeGraphError::InvalidGenericName {
                definition, reason, ..
            } => TypeGraphError::InvalidGenericName {
                definition,
                name: raw.clone(),
                reason,
            },
            other => other,
        })?;
        params.push(bare);
    }

    for prop in &def.properties {
        let bare = params
            .iter()
            .fold(prop.type_expr.clone(), |ty, p| ty.replace(&mark(p), p));
        validate_type(&bare).map_err(|err| match err {
            TypeGraphError::InvalidType { reason, .. } => TypeGraphError::InvalidType {
                type_expr: prop.type_expr.clone(),
                reason,
            },
            other => other,
        })?;
    }

    let mut properties = def.properties.clone();
    for param in &params {
        let pattern = token_pattern(&def.name, param)?;
        let marked = mark(param);
        for prop in &mut properties {
            prop.type_expr = mark_occurrences(&prop.type_expr, &pattern, &marked);
        }
    }
    for prop in &mut properties {
        prop.type_expr = COMMA.replace_all(prop.type_expr.trim(), ", ").into_owned();
    }

    debug!(
        definition = %def.name,
        generic_params = params.len(),
        "Preprocessed definition"
    );

    Ok(Definition {
        name: def.name.clone(),
        description: def.description.clone(),
        generic_params: params.iter().map(|p| mark(p)).collect(),
        properties,
    })
}

/// Pattern matching `param` as a whole token.
fn token_pattern(definition: &str, param: &str) -> Result<Regex, TypeGraphError> {
    let pattern = format!(r"(^|[,\s<]){}([,\s<>\[]|$)", regex::escape(param));
    Regex::new(&pattern).map_err(|err| TypeGraphError::InvalidGenericName {
        definition: definition.to_string(),
        name: param.to_string(),
        reason: err.to_string(),
    })
}

/// Replaces token occurrences until the string stops changing.
///
/// Adjacent occurrences (`Pair<T,T>`) share a boundary character, so a
/// single `replace_all` pass only catches every other one.
fn mark_occurrences(type_expr: &str, pattern: &Regex, marked: &str) -> String {
    let replacement = format!("${{1}}{marked}${{2}}");
    let mut current = type_expr.to_string();
    loop {
        let next = pattern
            .replace_all(&current, replacement.as_str())
            .into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}
