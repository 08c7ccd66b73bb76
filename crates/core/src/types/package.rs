use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::type_expr::TypeExpr;

/// Everything the generator needs to know about one Go package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    /// Import path (unquoted) => alias, empty when the package's own name is used.
    /// Kept sorted by path so generated output is reproducible.
    pub imports: BTreeMap<String, String>,
    /// Interfaces in discovery order
    pub interfaces: Vec<Interface>,
}

impl Package {
    pub fn method_count(&self) -> usize {
        self.interfaces.iter().map(|i| i.methods.len()).sum()
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub args: Vec<Param>,
    pub returns: Vec<Param>,
}

impl Method {
    /// True when an argument or result type could not be reconstructed, so
    /// the generated method will not compile
    pub fn has_unrecognised_types(&self) -> bool {
        self.args
            .iter()
            .chain(&self.returns)
            .any(|param| param.ty.is_unrecognised())
    }
}

/// A single parameter or result of a method signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Empty when the source omitted the name
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn unnamed(ty: TypeExpr) -> Self {
        Self::new("", ty)
    }

    /// Reconstructed textual type, as it appears in generated code
    pub fn type_text(&self) -> String {
        self.ty.to_string()
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}
