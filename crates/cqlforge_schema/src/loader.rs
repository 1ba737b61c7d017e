//! YAML document loading.
//!
//! Walks a `serde_yaml::Value` tree into the ordered [`SchemaDocument`]
//! model. `serde_yaml`'s mapping type preserves insertion order, and the
//! walk keeps it: types, tables, fields, clustering entries, and options
//! all come out in the order they were written.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::debug;

use crate::document::{DocumentOptions, SchemaDocument, SortOrder, TableDecl, TypeDecl, TypeExpr};

/// Errors raised while loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Expected a mapping for {0}")]
    ExpectedMapping(String),

    #[error("Expected a string for {0}")]
    ExpectedString(String),

    #[error("Expected a sequence of field names for {0}")]
    ExpectedSequence(String),

    #[error("Invalid type expression at {path}: {reason}")]
    InvalidTypeExpr { path: String, reason: String },

    #[error("Invalid sort direction '{direction}' at {path}")]
    InvalidSortOrder { path: String, direction: String },

    #[error("Table '{0}' is missing its 'fields' section")]
    MissingFields(String),

    #[error("Table '{0}' is missing its 'partition_key' section")]
    MissingPartitionKey(String),

    #[error("Document is missing 'options.package'")]
    MissingPackage,
}

/// Load a schema document from a file on disk.
pub fn load_file(path: &Path) -> Result<SchemaDocument, DocumentError> {
    let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = load_str(&source)?;
    debug!(
        path = %path.display(),
        types = document.types.len(),
        tables = document.tables.len(),
        "loaded document"
    );
    Ok(document)
}

/// Load a schema document from YAML text.
pub fn load_str(source: &str) -> Result<SchemaDocument, DocumentError> {
    let root: Value = serde_yaml::from_str(source)?;
    let root = expect_mapping(&root, "document root")?;

    let mut types = Vec::new();
    if let Some(section) = root.get("types") {
        for (name, config) in expect_mapping(section, "types")? {
            let name = expect_string(name, "type name")?;
            types.push(load_type(&name, config)?);
        }
    }

    let mut tables = Vec::new();
    if let Some(section) = root.get("tables") {
        for (name, config) in expect_mapping(section, "tables")? {
            let name = expect_string(name, "table name")?;
            tables.push(load_table(&name, config)?);
        }
    }

    let options = load_options(root)?;

    Ok(SchemaDocument {
        types,
        tables,
        options,
    })
}

fn load_type(name: &str, config: &Value) -> Result<TypeDecl, DocumentError> {
    let fields = load_fields(name, config)?;
    Ok(TypeDecl {
        name: name.to_string(),
        fields,
    })
}

fn load_table(name: &str, config: &Value) -> Result<TableDecl, DocumentError> {
    let config = expect_mapping(config, &format!("table '{name}'"))?;

    let fields = match config.get("fields") {
        Some(section) => load_fields(name, section)?,
        None => return Err(DocumentError::MissingFields(name.to_string())),
    };

    let partition_key = match config.get("partition_key") {
        Some(section) => load_name_list(section, &format!("{name}.partition_key"))?,
        None => return Err(DocumentError::MissingPartitionKey(name.to_string())),
    };

    let mut clustering = Vec::new();
    if let Some(section) = config.get("clustering") {
        for (field, direction) in expect_mapping(section, &format!("{name}.clustering"))? {
            let field = expect_string(field, &format!("{name}.clustering key"))?;
            let path = format!("{name}.clustering.{field}");
            let direction = expect_string(direction, &path)?;
            let order: SortOrder =
                direction
                    .parse()
                    .map_err(|_| DocumentError::InvalidSortOrder {
                        path,
                        direction: direction.clone(),
                    })?;
            clustering.push((field, order));
        }
    }

    let mut options = Vec::new();
    if let Some(section) = config.get("options") {
        for (option, value) in expect_mapping(section, &format!("{name}.options"))? {
            let option = expect_string(option, &format!("{name}.options key"))?;
            options.push((option, value.clone()));
        }
    }

    Ok(TableDecl {
        name: name.to_string(),
        fields,
        partition_key,
        clustering,
        options,
    })
}

fn load_fields(entity: &str, section: &Value) -> Result<Vec<(String, TypeExpr)>, DocumentError> {
    let mapping = expect_mapping(section, &format!("fields of '{entity}'"))?;
    let mut fields = Vec::with_capacity(mapping.len());
    for (name, expr) in mapping {
        let name = expect_string(name, &format!("field name in '{entity}'"))?;
        let path = format!("{entity}.{name}");
        fields.push((name, load_type_expr(expr, &path)?));
    }
    Ok(fields)
}

fn load_type_expr(value: &Value, path: &str) -> Result<TypeExpr, DocumentError> {
    match value {
        Value::String(name) => Ok(TypeExpr::Name(name.clone())),
        Value::Mapping(mapping) => {
            let keyword = match mapping.get("type") {
                Some(keyword) => expect_string(keyword, &format!("{path}.type"))?,
                None => {
                    return Err(DocumentError::InvalidTypeExpr {
                        path: path.to_string(),
                        reason: "structured form requires a 'type' key".to_string(),
                    })
                }
            };
            Ok(TypeExpr::Node {
                keyword,
                entries: load_element(mapping, "entries", path)?,
                keys: load_element(mapping, "keys", path)?,
                values: load_element(mapping, "values", path)?,
            })
        }
        _ => Err(DocumentError::InvalidTypeExpr {
            path: path.to_string(),
            reason: "expected a scalar name or a mapping".to_string(),
        }),
    }
}

fn load_element(
    mapping: &Mapping,
    key: &str,
    path: &str,
) -> Result<Option<Box<TypeExpr>>, DocumentError> {
    match mapping.get(key) {
        Some(value) => Ok(Some(Box::new(load_type_expr(
            value,
            &format!("{path}.{key}"),
        )?))),
        None => Ok(None),
    }
}

fn load_name_list(section: &Value, context: &str) -> Result<Vec<String>, DocumentError> {
    let sequence = match section {
        Value::Sequence(sequence) => sequence,
        _ => return Err(DocumentError::ExpectedSequence(context.to_string())),
    };
    sequence
        .iter()
        .map(|value| expect_string(value, context))
        .collect()
}

fn load_options(root: &Mapping) -> Result<DocumentOptions, DocumentError> {
    let section = root
        .get("options")
        .ok_or(DocumentError::MissingPackage)?;
    let section = expect_mapping(section, "options")?;
    let package = section
        .get("package")
        .ok_or(DocumentError::MissingPackage)?;
    let package = expect_string(package, "options.package")?;
    Ok(DocumentOptions { package })
}

fn expect_mapping<'a>(value: &'a Value, context: &str) -> Result<&'a Mapping, DocumentError> {
    value
        .as_mapping()
        .ok_or_else(|| DocumentError::ExpectedMapping(context.to_string()))
}

fn expect_string(value: &Value, context: &str) -> Result<String, DocumentError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DocumentError::ExpectedString(context.to_string()))
}
