//! Ordered schema documents and type resolution.
//!
//! One YAML document declares named user-defined types, named tables, and
//! document-level options. This crate owns:
//!
//! - [`document`]: the raw, order-preserving document model
//! - [`loader`]: YAML -> [`SchemaDocument`] with shape validation
//! - [`primitive`]: the closed vocabulary of scalar CQL kinds
//! - [`descriptor`]: resolved, immutable descriptors for the generators
//! - [`resolve`]: the shared resolver projecting raw type expressions into
//!   canonical [`TypeDescriptor`] trees
//!
//! Declaration order is load-bearing: it decides the order of emitted DDL
//! statements and generated files, and user-defined types may reference
//! each other regardless of position. Every document-level mapping is
//! therefore an explicit ordered list of pairs, never a hash map.

pub mod descriptor;
pub mod document;
pub mod loader;
pub mod primitive;
pub mod resolve;

pub use descriptor::{
    ClusteringEntry, FieldDescriptor, RecordDescriptor, ResolvedSchema, TableDescriptor,
    TypeDescriptor,
};
pub use document::{DocumentOptions, SchemaDocument, SortOrder, TableDecl, TypeDecl, TypeExpr};
pub use loader::{load_file, load_str, DocumentError};
pub use primitive::{Primitive, UnknownPrimitive};
pub use resolve::{resolve, resolve_document, ResolveError};
