//! CQL projection errors.

use thiserror::Error;

/// Errors raised while projecting a resolved schema into CQL.
///
/// All of these are fatal for the enclosing document: the DDL artifact is
/// produced whole or not at all.
#[derive(Debug, Error)]
pub enum CqlError {
    /// A scalar type name with no equivalent in the fixed CQL vocabulary.
    #[error("No CQL type for '{name}' at {path}")]
    UnknownPrimitive { path: String, name: String },

    /// An option value of a shape the serializer cannot represent.
    #[error("Cannot serialize option '{option}': {reason}")]
    MalformedOption { option: String, reason: String },
}
