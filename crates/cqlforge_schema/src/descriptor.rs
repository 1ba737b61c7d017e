//! Resolved, immutable descriptors consumed by the generators.
//!
//! Built once per document by [`crate::resolve::resolve_document`] and
//! never mutated afterward. Both projections read the same tree.

use crate::document::SortOrder;

/// Canonical resolved form of a field type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// A scalar kind by name. The name is not validated here: each
    /// projection parses it against the primitive vocabulary and fails
    /// with the field path when it has no mapping.
    Primitive(String),
    List(Box<TypeDescriptor>),
    Set(Box<TypeDescriptor>),
    Map(Box<TypeDescriptor>, Box<TypeDescriptor>),
    /// Reference to a type declared in the same document.
    UserDefined(String),
}

/// A resolved field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Stored (CQL) identifier.
    pub name: String,
    pub ty: TypeDescriptor,
    /// True iff the name appears in the owning table's partition key.
    pub is_key: bool,
}

/// A resolved user-defined composite type.
#[derive(Debug, Clone)]
pub struct RecordDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

/// One clustering column with its sort direction.
#[derive(Debug, Clone)]
pub struct ClusteringEntry {
    pub field: String,
    pub order: SortOrder,
}

/// A resolved table.
#[derive(Debug, Clone)]
pub struct TableDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    pub partition_key: Vec<String>,
    pub clustering: Vec<ClusteringEntry>,
    pub options: Vec<(String, serde_yaml::Value)>,
}

impl TableDescriptor {
    pub fn has_clustering(&self) -> bool {
        !self.clustering.is_empty()
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Output of the single resolution pass over one document.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    /// User-defined types, in declaration order.
    pub types: Vec<RecordDescriptor>,
    /// Tables, in declaration order.
    pub tables: Vec<TableDescriptor>,
    /// Target Java package from the document options.
    pub package: String,
}
