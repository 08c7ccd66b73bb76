use serde::{Deserialize, Serialize};
use std::fmt;

/// Text emitted for any type form outside the reconstruction grammar.
///
/// It is deliberately not valid Go so that unsupported parameter types fail
/// loudly when the generated file is compiled.
pub const UNRECOGNISED: &str = "<unrecognised>";

/// A reconstructed Go type expression.
///
/// Only the forms a mock needs to round-trip are modelled; everything else
/// collapses into [`TypeExpr::Unrecognised`]. Supporting a new form means
/// adding a variant here, a branch in [`fmt::Display`], and a branch in the
/// parser's `reconstruct_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeExpr {
    /// `T`
    Ident { name: String },
    /// `pkg.T`
    Qualified { package: String, name: String },
    /// `*X`
    Pointer { inner: Box<TypeExpr> },
    /// `[]X` or `[N]X`; `len` holds the raw literal text of `N`
    ArrayOrSlice {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        len: Option<String>,
        elem: Box<TypeExpr>,
    },
    Unrecognised,
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident { name: name.into() }
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer {
            inner: Box::new(inner),
        }
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::ArrayOrSlice {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn array(len: impl Into<String>, elem: TypeExpr) -> Self {
        TypeExpr::ArrayOrSlice {
            len: Some(len.into()),
            elem: Box::new(elem),
        }
    }

    /// True if this expression, or any type nested inside it, is unrecognised
    pub fn is_unrecognised(&self) -> bool {
        match self {
            TypeExpr::Unrecognised => true,
            TypeExpr::Pointer { inner } => inner.is_unrecognised(),
            TypeExpr::ArrayOrSlice { elem, .. } => elem.is_unrecognised(),
            TypeExpr::Ident { .. } | TypeExpr::Qualified { .. } => false,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Ident { name } => f.write_str(name),
            TypeExpr::Qualified { package, name } => write!(f, "{package}.{name}"),
            TypeExpr::Pointer { inner } => write!(f, "*{inner}"),
            TypeExpr::ArrayOrSlice { len, elem } => {
                write!(f, "[{}]{elem}", len.as_deref().unwrap_or(""))
            }
            TypeExpr::Unrecognised => f.write_str(UNRECOGNISED),
        }
    }
}
