//! Data-model definitions and their properties.
//!
//! A [`Definition`] is a named record type. It may declare generic parameter
//! names (e.g. `Result<T>`), in which case it is a template that only becomes
//! emittable once the generator specializes it for concrete arguments.

use serde::{Deserialize, Serialize};

/// Validation facets attached to a property.
///
/// These are carried through specialization untouched; the generator never
/// interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFacets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A single field of a [`Definition`].
///
/// ## Examples
///
/// ```
/// use apidoc_define::Property;
///
/// let prop = Property::new("data", "Page<User>")
///     .required()
///     .with_description("Payload");
///
/// assert_eq!(prop.type_expr, "Page<User>");
/// assert!(prop.required);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Field name as it appears in the rendered schema.
    pub name: String,
    /// Type expression, e.g. `integer#int64`, `User[]` or `Result<T>`.
    #[serde(rename = "type")]
    pub type_expr: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub facets: PropertyFacets,
}

impl Property {
    /// Creates an optional property with no description.
    pub fn new(name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            required: false,
            description: String::new(),
            facets: PropertyFacets::default(),
        }
    }

    /// Marks this property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_facets(mut self, facets: PropertyFacets) -> Self {
        self.facets = facets;
        self
    }
}

/// A named, possibly generic, record type.
///
/// ## Examples
///
/// A generic envelope:
///
/// ```
/// use apidoc_define::{Definition, Property};
///
/// let result = Definition::new("Result")
///     .with_generic_params(["T"])
///     .with_property(Property::new("code", "integer").required())
///     .with_property(Property::new("data", "T"));
///
/// assert!(result.is_generic());
/// assert_eq!(result.properties.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Declared generic parameter names, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_params: Vec<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Definition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            generic_params: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Declares the generic parameter names of this definition.
    pub fn with_generic_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Returns true if this definition declares generic parameters.
    pub fn is_generic(&self) -> bool {
        !self.generic_params.is_empty()
    }

    /// Looks up a property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_builder_defaults_to_optional() {
        let prop = Property::new("id", "integer#int64");
        assert!(!prop.required);
        assert!(prop.description.is_empty());
        assert_eq!(prop.facets, PropertyFacets::default());
    }

    #[test]
    fn definition_without_params_is_not_generic() {
        let def = Definition::new("User").with_property(Property::new("name", "string"));
        assert!(!def.is_generic());
        assert_eq!(def.property("name").map(|p| p.type_expr.as_str()), Some("string"));
        assert!(def.property("missing").is_none());
    }

    #[test]
    fn property_deserializes_type_key_and_flattened_facets() {
        let json = r#"{
            "name": "age",
            "type": "integer",
            "required": true,
            "minimum": 0,
            "maximum": 150
        }"#;
        let prop: Property = serde_json::from_str(json).unwrap();
        assert_eq!(prop.type_expr, "integer");
        assert!(prop.required);
        assert_eq!(prop.facets.minimum, Some(0.0));
        assert_eq!(prop.facets.maximum, Some(150.0));
    }

    #[test]
    fn definition_deserializes_with_missing_optional_fields() {
        let json = r#"{ "name": "Page", "generic_params": ["T"], "properties": [
            { "name": "data", "type": "T[]" }
        ] }"#;
        let def: Definition = serde_json::from_str(json).unwrap();
        assert_eq!(def.generic_params, vec!["T".to_string()]);
        assert!(def.description.is_empty());
        assert!(!def.properties[0].required);
    }
}
