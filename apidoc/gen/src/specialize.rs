//! Generic definition specialization.
//!
//! Given preprocessed definitions (see [`crate::generics::preprocess`]) and
//! the type expressions observed across an API surface, [`specialize`]
//! discovers every concrete instantiation of a generic definition that is
//! needed, including instantiations nested inside other instantiations, and
//! produces one emittable definition per instantiation.
//!
//! ## Ordering
//!
//! The output is deterministic: non-generic definitions first in input
//! order, then specialized definitions in depth-first discovery order
//! (driven by the order of the used types and, within a definition, by the
//! declaration order of its properties, then of its generic arguments).

use std::collections::{HashMap, HashSet};

use apidoc_define::{Definition, Property};
use tracing::{debug, instrument, trace};

use crate::errors::TypeGraphError;
use crate::parser::parse_type;
use crate::type_expr::TypeNode;

/// Computes the flat list of emittable definitions.
///
/// ## Examples
///
/// ```
/// use apidoc_define::{Definition, Property};
/// use apidoc_gen::generics::preprocess;
/// use apidoc_gen::specialize::specialize;
///
/// let result = Definition::new("Result")
///     .with_generic_params(["T"])
///     .with_property(Property::new("code", "integer"))
///     .with_property(Property::new("data", "T"));
/// let defs = vec![preprocess(&result).unwrap()];
///
/// let resolved = specialize(&defs, &["Result<integer>", "Result<integer>"]).unwrap();
/// assert_eq!(resolved.len(), 1);
/// assert_eq!(resolved[0].name, "Result<integer>");
/// assert_eq!(resolved[0].properties[1].type_expr, "integer");
/// ```
///
/// ## Errors
///
/// - `DuplicateDefinition` if two definitions share a name
/// - `InvalidType` if a used or substituted type expression fails to parse
/// - `UnknownType` if an object type has no definition
/// - `GenericArity` if an instantiation has the wrong number of arguments
#[instrument(skip_all, fields(definitions = definitions.len(), used_types = used_types.len()))]
pub fn specialize<S: AsRef<str>>(
    definitions: &[Definition],
    used_types: &[S],
) -> Result<Vec<Definition>, TypeGraphError> {
    let mut specializer = Specializer::new(definitions)?;

    for type_expr in used_types {
        specializer.extract(type_expr.as_ref())?;
    }

    debug!(
        emitted = specializer.output.len(),
        specialized = specializer.output.len() - specializer.plain,
        "Specialization complete"
    );
    Ok(specializer.output)
}

/// State for one `specialize` call.
struct Specializer<'a> {
    index: HashMap<&'a str, &'a Definition>,
    emitted: HashSet<String>,
    output: Vec<Definition>,
    /// Number of non-generic definitions at the head of `output`.
    plain: usize,
}

impl<'a> Specializer<'a> {
    fn new(definitions: &'a [Definition]) -> Result<Self, TypeGraphError> {
        let mut index = HashMap::with_capacity(definitions.len());
        for def in definitions {
            if index.insert(def.name.as_str(), def).is_some() {
                return Err(TypeGraphError::DuplicateDefinition {
                    name: def.name.clone(),
                });
            }
        }

        let output: Vec<Definition> = definitions
            .iter()
            .filter(|d| !d.is_generic())
            .cloned()
            .collect();
        let emitted = output.iter().map(|d| d.name.clone()).collect();
        let plain = output.len();

        Ok(Self {
            index,
            emitted,
            output,
            plain,
        })
    }

    fn extract(&mut self, type_expr: &str) -> Result<(), TypeGraphError> {
        let node = parse_type(type_expr)?;
        let target = node.innermost();
        let TypeNode::Object {
            type_name,
            generic_args,
            ..
        } = target
        else {
            trace!(type_expr, "Primitive type needs no definition");
            return Ok(());
        };

        let name = target.canonical();
        if self.emitted.contains(&name) {
            trace!(name = %name, "Already emitted");
            return Ok(());
        }

        let base = self
            .index
            .get(type_name.as_str())
            .copied()
            .ok_or_else(|| TypeGraphError::UnknownType {
                type_expr: type_expr.to_string(),
                type_name: type_name.clone(),
            })?;

        if generic_args.len() != base.generic_params.len() {
            return Err(TypeGraphError::GenericArity {
                type_expr: type_expr.to_string(),
                type_name: type_name.clone(),
                expected: base.generic_params.len(),
                found: generic_args.len(),
            });
        }
        if generic_args.is_empty() {
            return Ok(());
        }

        let args: Vec<String> = generic_args.iter().map(TypeNode::canonical).collect();
        let properties: Vec<Property> = base
            .properties
            .iter()
            .map(|prop| substitute(prop, &base.generic_params, &args))
            .collect();
        let nested: Vec<String> = properties.iter().map(|p| p.type_expr.clone()).collect();

        debug!(name = %name, base = %base.name, "Emitting specialized definition");
        self.emitted.insert(name.clone());
        self.output.push(Definition {
            name,
            description: base.description.clone(),
            generic_params: Vec::new(),
            properties,
        });

        for nested_type in &nested {
            self.extract(nested_type)?;
        }
        for arg in &args {
            self.extract(arg)?;
        }
        Ok(())
    }
}

/// Replaces every marked parameter token in the property type with the
/// corresponding concrete argument.
fn substitute(prop: &Property, params: &[String], args: &[String]) -> Property {
    let mut out = prop.clone();
    for (param, arg) in params.iter().zip(args) {
        out.type_expr = out.type_expr.replace(param.as_str(), arg);
    }
    out
}
