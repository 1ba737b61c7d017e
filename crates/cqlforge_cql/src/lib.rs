//! CQL projection.
//!
//! Projects resolved schema descriptors into the storage side of the
//! output: CQL type syntax, serialized table options, and the DDL create
//! script. The object-language projection lives in `cqlforge_java`; the
//! two share the resolver and never interact.

pub mod ddl;
pub mod error;
pub mod options;
pub mod types;

pub use ddl::render_ddl;
pub use error::CqlError;
pub use options::serialize_option;
pub use types::cql_type;
