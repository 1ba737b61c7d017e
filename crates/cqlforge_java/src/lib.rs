//! Java projection.
//!
//! Projects resolved schema descriptors into the in-process side of the
//! output: Java type names, identifier transforms, per-field accessor
//! expressions, and the generated immutable class sources. The storage
//! side lives in `cqlforge_cql`; the two share the resolver and never
//! interact.

pub mod accessors;
pub mod error;
pub mod naming;
pub mod render;
pub mod types;

pub use accessors::{accessors, Accessors, WriteTarget};
pub use error::JavaError;
pub use naming::{class_name, field_name};
pub use render::{file_name, render_record, render_table};
pub use types::java_type;
