//! Raw schema document model.
//!
//! The loader materializes YAML input into this tree without interpreting
//! type expressions; resolution happens in a separate pass so the two
//! generators share one resolver. All collections are ordered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw field type expression as written in the document.
///
/// Either a bare scalar shorthand (`text`) or a structured node
/// (`{ type: list, entries: text }`). Element expressions nest without
/// depth limit.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// Bare scalar shorthand for `{ type: <name> }`.
    Name(String),
    /// Structured form carrying the `type` keyword and any element
    /// expressions that were present.
    Node {
        keyword: String,
        entries: Option<Box<TypeExpr>>,
        keys: Option<Box<TypeExpr>>,
        values: Option<Box<TypeExpr>>,
    },
}

impl TypeExpr {
    /// The `type` keyword of this expression (the scalar itself in the
    /// shorthand form).
    pub fn keyword(&self) -> &str {
        match self {
            TypeExpr::Name(name) => name,
            TypeExpr::Node { keyword, .. } => keyword,
        }
    }
}

/// Clustering sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Error for an unrecognized clustering direction.
#[derive(Debug, Error)]
#[error("Unknown sort direction '{0}'")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    /// Parses case-insensitively; documents commonly write `DESC`/`desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// A named user-defined composite type declaration.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: String,

    /// Field name -> type expression, in declaration order.
    pub fields: Vec<(String, TypeExpr)>,
}

/// A table declaration.
#[derive(Debug, Clone)]
pub struct TableDecl {
    pub name: String,

    /// Field name -> type expression, in declaration order.
    pub fields: Vec<(String, TypeExpr)>,

    /// Partition key field names, in declaration order.
    pub partition_key: Vec<String>,

    /// Clustering entries as (field name, direction) pairs.
    pub clustering: Vec<(String, SortOrder)>,

    /// Table options; values are kept as raw YAML scalars/mappings and
    /// serialized by the CQL projection.
    pub options: Vec<(String, serde_yaml::Value)>,
}

/// Document-level settings.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Target Java package. Also determines the directory the generated
    /// sources are written under.
    pub package: String,
}

/// One parsed schema document.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    pub types: Vec<TypeDecl>,
    pub tables: Vec<TableDecl>,
    pub options: DocumentOptions,
}

impl SchemaDocument {
    /// Names of all user-defined types declared in this document, in
    /// declaration order.
    pub fn declared_type_names(&self) -> Vec<String> {
        self.types.iter().map(|decl| decl.name.clone()).collect()
    }
}
