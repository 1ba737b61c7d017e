//! Java projection errors.

use thiserror::Error;

/// Errors raised while projecting a resolved schema into Java sources.
///
/// Fatal for the enclosing document, matching the CQL side: the set of
/// generated files is produced whole or not at all.
#[derive(Debug, Error)]
pub enum JavaError {
    /// A scalar type name with no Java representation in the fixed
    /// vocabulary.
    #[error("No Java type for '{name}' at {path}")]
    UnknownPrimitive { path: String, name: String },
}
