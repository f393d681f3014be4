//! Parsed representation of type expressions.
//!
//! A type expression such as `Result<Page<User>>[]` or `integer#int64` is
//! parsed (see [`crate::parser`]) into a [`TypeNode`] tree. Renderers use the
//! tree to choose between an inline primitive/array schema and a reference to
//! a named definition.

use std::fmt;

use strum::{Display, EnumIter, EnumString};

/// The primitive types of the grammar.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use apidoc_gen::type_expr::Primitive;
///
/// assert_eq!(Primitive::from_str("integer").unwrap(), Primitive::Integer);
/// assert_eq!(Primitive::Number.to_string(), "number");
/// assert_eq!(Primitive::Integer.default_format(), "int32");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Primitive {
    Integer,
    Number,
    String,
    Boolean,
    File,
}

impl Primitive {
    /// Format implied when the expression carries no `#` at all.
    pub fn default_format(self) -> &'static str {
        match self {
            Self::Integer => "int32",
            Self::Number => "double",
            Self::String | Self::Boolean | Self::File => "",
        }
    }
}

/// A parsed type expression.
///
/// Every variant keeps `name`, the trimmed source text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    /// `integer`, `string#date-time`, `number#` ...
    Primitive {
        name: String,
        base: Primitive,
        format: String,
    },
    /// `X[]`; `item` is the element type with one `[]` peeled off.
    Array { name: String, item: Box<TypeNode> },
    /// `User` or `Result<T1, T2>`; `generic_args` is empty when non-generic.
    Object {
        name: String,
        type_name: String,
        generic_args: Vec<TypeNode>,
    },
}

impl TypeNode {
    /// The trimmed source text of this node.
    pub fn source(&self) -> &str {
        match self {
            Self::Primitive { name, .. } | Self::Array { name, .. } | Self::Object { name, .. } => {
                name
            }
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object { .. })
    }

    /// Strips every Array layer and returns the element type.
    ///
    /// ```
    /// use apidoc_gen::parser::parse_type;
    ///
    /// let node = parse_type("User[][]").unwrap();
    /// assert_eq!(node.innermost().source(), "User");
    /// assert_eq!(node.array_depth(), 2);
    /// ```
    pub fn innermost(&self) -> &TypeNode {
        let mut node = self;
        while let Self::Array { item, .. } = node {
            node = item;
        }
        node
    }

    pub fn array_depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self;
        while let Self::Array { item, .. } = node {
            depth += 1;
            node = item;
        }
        depth
    }

    /// Normalized rendering: generic arguments joined with `", "`, no
    /// incidental whitespace, explicit format tags kept as written.
    ///
    /// ```
    /// use apidoc_gen::parser::parse_type;
    ///
    /// let node = parse_type(" Result< Page<User>,integer#int64 > [] ").unwrap();
    /// assert_eq!(node.canonical(), "Result<Page<User>, integer#int64>[]");
    /// ```
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    /// Name of the definition a renderer must reference for this type, or
    /// `None` when the (innermost) type is a primitive.
    ///
    /// ```
    /// use apidoc_gen::parser::parse_type;
    ///
    /// assert_eq!(
    ///     parse_type("Page<User>[]").unwrap().referenced_definition(),
    ///     Some("Page<User>".to_string())
    /// );
    /// assert_eq!(parse_type("string[]").unwrap().referenced_definition(), None);
    /// ```
    pub fn referenced_definition(&self) -> Option<String> {
        match self.innermost() {
            node @ Self::Object { .. } => Some(node.canonical()),
            _ => None,
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive { name, base, format } => {
                if name.contains('#') {
                    write!(f, "{base}#{format}")
                } else {
                    write!(f, "{base}")
                }
            }
            Self::Array { item, .. } => write!(f, "{item}[]"),
            Self::Object {
                type_name,
                generic_args,
                ..
            } => {
                write!(f, "{type_name}")?;
                if !generic_args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in generic_args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}
