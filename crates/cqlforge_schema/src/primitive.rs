//! The fixed vocabulary of scalar CQL kinds.
//!
//! Both generators match exhaustively on [`Primitive`], so adding or
//! renaming a kind is a compile-time obligation in every projection rather
//! than a lookup that fails only when the keyword is exercised.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for a type keyword that names no known primitive.
#[derive(Debug, Error)]
#[error("Unknown primitive type '{0}'")]
pub struct UnknownPrimitive(pub String);

/// The closed set of non-container, non-user-defined CQL type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Counter,
    Decimal,
    Double,
    Float,
    Inet,
    Int,
    Text,
    Timestamp,
    Timeuuid,
    Uuid,
    Varchar,
    Varint,
}

impl Primitive {
    /// Every kind in the vocabulary, for coverage-style iteration.
    pub const ALL: [Primitive; 16] = [
        Primitive::Ascii,
        Primitive::Bigint,
        Primitive::Blob,
        Primitive::Boolean,
        Primitive::Counter,
        Primitive::Decimal,
        Primitive::Double,
        Primitive::Float,
        Primitive::Inet,
        Primitive::Int,
        Primitive::Text,
        Primitive::Timestamp,
        Primitive::Timeuuid,
        Primitive::Uuid,
        Primitive::Varchar,
        Primitive::Varint,
    ];

    /// The CQL keyword for this kind.
    pub const fn cql_name(self) -> &'static str {
        match self {
            Primitive::Ascii => "ascii",
            Primitive::Bigint => "bigint",
            Primitive::Blob => "blob",
            Primitive::Boolean => "boolean",
            Primitive::Counter => "counter",
            Primitive::Decimal => "decimal",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Inet => "inet",
            Primitive::Int => "int",
            Primitive::Text => "text",
            Primitive::Timestamp => "timestamp",
            Primitive::Timeuuid => "timeuuid",
            Primitive::Uuid => "uuid",
            Primitive::Varchar => "varchar",
            Primitive::Varint => "varint",
        }
    }

    /// True for kinds whose on-wire and in-object representations differ,
    /// requiring a converter in the object projection.
    pub const fn needs_conversion(self) -> bool {
        matches!(self, Primitive::Timestamp)
    }
}

impl FromStr for Primitive {
    type Err = UnknownPrimitive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "ascii" => Primitive::Ascii,
            "bigint" => Primitive::Bigint,
            "blob" => Primitive::Blob,
            "boolean" => Primitive::Boolean,
            "counter" => Primitive::Counter,
            "decimal" => Primitive::Decimal,
            "double" => Primitive::Double,
            "float" => Primitive::Float,
            "inet" => Primitive::Inet,
            "int" => Primitive::Int,
            "text" => Primitive::Text,
            "timestamp" => Primitive::Timestamp,
            "timeuuid" => Primitive::Timeuuid,
            "uuid" => Primitive::Uuid,
            "varchar" => Primitive::Varchar,
            "varint" => Primitive::Varint,
            other => return Err(UnknownPrimitive(other.to_string())),
        };
        Ok(kind)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cql_name())
    }
}
