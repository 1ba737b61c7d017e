//! cqlforge - Core Library
//!
//! Shared generation pipeline for the CLI binary: load a schema
//! document, resolve it once, render both projections, and write the
//! output files atomically per document.

pub mod pipeline;

pub use pipeline::{generate_document, package_dir, render_document, RenderedFile};
