//! Type resolution: raw expressions into canonical descriptors.
//!
//! [`resolve`] is the single resolver shared by both generators. It is a
//! pure function over the expression and the set of locally declared type
//! names; it interprets the container keywords, recognizes user-defined
//! references, and leaves every other scalar name uninterpreted for the
//! projections to validate.

use thiserror::Error;
use tracing::debug;

use crate::descriptor::{
    ClusteringEntry, FieldDescriptor, RecordDescriptor, ResolvedSchema, TableDescriptor,
    TypeDescriptor,
};
use crate::document::{SchemaDocument, TypeExpr};

/// Errors raised during the resolution pass.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A structured container expression without its element expression,
    /// e.g. `{ type: list }` with no `entries`.
    #[error("Container type at {path} is missing its '{element}' expression")]
    MissingElement { path: String, element: &'static str },

    /// A partition key naming a field the table does not declare.
    #[error("Table '{table}' partition key references unknown field '{field}'")]
    UnknownPartitionKeyField { table: String, field: String },

    /// A clustering entry naming a field the table does not declare.
    #[error("Table '{table}' clustering references unknown field '{field}'")]
    UnknownClusteringField { table: String, field: String },

    /// Two fields with the same name in one type or table.
    #[error("Duplicate field '{field}' in '{entity}'")]
    DuplicateField { entity: String, field: String },
}

/// Resolve a raw type expression against the locally declared type names.
///
/// Container keywords (`list`, `set`, `map`) take precedence, then
/// user-defined names, and anything else becomes an unvalidated
/// [`TypeDescriptor::Primitive`]. `path` is the dotted `entity.field`
/// location used in error reports.
pub fn resolve(
    expr: &TypeExpr,
    known: &[String],
    path: &str,
) -> Result<TypeDescriptor, ResolveError> {
    let (keyword, entries, keys, values) = match expr {
        TypeExpr::Name(name) => (name.as_str(), None, None, None),
        TypeExpr::Node {
            keyword,
            entries,
            keys,
            values,
        } => (
            keyword.as_str(),
            entries.as_deref(),
            keys.as_deref(),
            values.as_deref(),
        ),
    };

    match keyword {
        "list" => {
            let entries = require_element(entries, path, "entries")?;
            Ok(TypeDescriptor::List(Box::new(resolve(
                entries, known, path,
            )?)))
        }
        "set" => {
            let entries = require_element(entries, path, "entries")?;
            Ok(TypeDescriptor::Set(Box::new(resolve(
                entries, known, path,
            )?)))
        }
        "map" => {
            let keys = require_element(keys, path, "keys")?;
            let values = require_element(values, path, "values")?;
            Ok(TypeDescriptor::Map(
                Box::new(resolve(keys, known, path)?),
                Box::new(resolve(values, known, path)?),
            ))
        }
        name if known.iter().any(|k| k == name) => {
            Ok(TypeDescriptor::UserDefined(name.to_string()))
        }
        name => Ok(TypeDescriptor::Primitive(name.to_string())),
    }
}

fn require_element<'a>(
    element: Option<&'a TypeExpr>,
    path: &str,
    name: &'static str,
) -> Result<&'a TypeExpr, ResolveError> {
    element.ok_or_else(|| ResolveError::MissingElement {
        path: path.to_string(),
        element: name,
    })
}

/// Run the single resolution pass over one parsed document.
///
/// Known type names are collected before any field resolves, so a
/// user-defined type may reference another declared anywhere in the same
/// document. Key references are checked here: a partition-key or
/// clustering name that matches no declared field is fatal for the
/// document, before any projection runs.
pub fn resolve_document(doc: &SchemaDocument) -> Result<ResolvedSchema, ResolveError> {
    let known = doc.declared_type_names();

    let mut types = Vec::with_capacity(doc.types.len());
    for decl in &doc.types {
        let fields = resolve_fields(&decl.name, &decl.fields, &known, &[])?;
        types.push(RecordDescriptor {
            name: decl.name.clone(),
            fields,
        });
    }

    let mut tables = Vec::with_capacity(doc.tables.len());
    for decl in &doc.tables {
        for key in &decl.partition_key {
            if !decl.fields.iter().any(|(name, _)| name == key) {
                return Err(ResolveError::UnknownPartitionKeyField {
                    table: decl.name.clone(),
                    field: key.clone(),
                });
            }
        }
        for (field, _) in &decl.clustering {
            if !decl.fields.iter().any(|(name, _)| name == field) {
                return Err(ResolveError::UnknownClusteringField {
                    table: decl.name.clone(),
                    field: field.clone(),
                });
            }
        }

        let fields = resolve_fields(&decl.name, &decl.fields, &known, &decl.partition_key)?;
        tables.push(TableDescriptor {
            name: decl.name.clone(),
            fields,
            partition_key: decl.partition_key.clone(),
            clustering: decl
                .clustering
                .iter()
                .map(|(field, order)| ClusteringEntry {
                    field: field.clone(),
                    order: *order,
                })
                .collect(),
            options: decl.options.clone(),
        });
    }

    debug!(
        types = types.len(),
        tables = tables.len(),
        "resolved document"
    );

    Ok(ResolvedSchema {
        types,
        tables,
        package: doc.options.package.clone(),
    })
}

fn resolve_fields(
    entity: &str,
    raw: &[(String, TypeExpr)],
    known: &[String],
    partition_key: &[String],
) -> Result<Vec<FieldDescriptor>, ResolveError> {
    let mut fields: Vec<FieldDescriptor> = Vec::with_capacity(raw.len());
    for (name, expr) in raw {
        if fields.iter().any(|field| &field.name == name) {
            return Err(ResolveError::DuplicateField {
                entity: entity.to_string(),
                field: name.clone(),
            });
        }
        let path = format!("{entity}.{name}");
        fields.push(FieldDescriptor {
            name: name.clone(),
            ty: resolve(expr, known, &path)?,
            is_key: partition_key.contains(name),
        });
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentOptions, SortOrder, TableDecl, TypeDecl};

    fn bare(name: &str) -> TypeExpr {
        TypeExpr::Name(name.to_string())
    }

    fn list_of(entries: TypeExpr) -> TypeExpr {
        TypeExpr::Node {
            keyword: "list".to_string(),
            entries: Some(Box::new(entries)),
            keys: None,
            values: None,
        }
    }

    fn map_of(keys: TypeExpr, values: TypeExpr) -> TypeExpr {
        TypeExpr::Node {
            keyword: "map".to_string(),
            entries: None,
            keys: Some(Box::new(keys)),
            values: Some(Box::new(values)),
        }
    }

    #[test]
    fn bare_scalar_resolves_to_primitive() {
        let ty = resolve(&bare("text"), &[], "t.f").unwrap();
        assert_eq!(ty, TypeDescriptor::Primitive("text".to_string()));
    }

    #[test]
    fn unknown_scalar_still_resolves() {
        // Validation of the primitive name belongs to the projections.
        let ty = resolve(&bare("wibble"), &[], "t.f").unwrap();
        assert_eq!(ty, TypeDescriptor::Primitive("wibble".to_string()));
    }

    #[test]
    fn declared_name_resolves_to_user_defined() {
        let known = vec!["address".to_string()];
        let ty = resolve(&bare("address"), &known, "t.f").unwrap();
        assert_eq!(ty, TypeDescriptor::UserDefined("address".to_string()));
    }

    #[test]
    fn container_keyword_wins_over_declared_name() {
        // A document that declares a type literally named `list` cannot
        // shadow the container keyword.
        let known = vec!["list".to_string()];
        let ty = resolve(&list_of(bare("int")), &known, "t.f").unwrap();
        assert_eq!(
            ty,
            TypeDescriptor::List(Box::new(TypeDescriptor::Primitive("int".to_string())))
        );
    }

    #[test]
    fn nested_containers_resolve_recursively() {
        let expr = list_of(map_of(
            bare("text"),
            TypeExpr::Node {
                keyword: "set".to_string(),
                entries: Some(Box::new(bare("int"))),
                keys: None,
                values: None,
            },
        ));
        let ty = resolve(&expr, &[], "t.f").unwrap();
        assert_eq!(
            ty,
            TypeDescriptor::List(Box::new(TypeDescriptor::Map(
                Box::new(TypeDescriptor::Primitive("text".to_string())),
                Box::new(TypeDescriptor::Set(Box::new(TypeDescriptor::Primitive(
                    "int".to_string()
                )))),
            )))
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let known = vec!["address".to_string()];
        let expr = list_of(map_of(bare("text"), bare("address")));
        let first = resolve(&expr, &known, "t.f").unwrap();
        let second = resolve(&expr, &known, "t.f").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn container_missing_element_is_an_error() {
        let expr = TypeExpr::Node {
            keyword: "list".to_string(),
            entries: None,
            keys: None,
            values: None,
        };
        let err = resolve(&expr, &[], "events.tags").unwrap_err();
        assert!(matches!(err, ResolveError::MissingElement { .. }));
        assert!(err.to_string().contains("events.tags"));
    }

    fn sample_table(partition_key: Vec<String>) -> TableDecl {
        TableDecl {
            name: "events".to_string(),
            fields: vec![
                ("id".to_string(), bare("uuid")),
                ("created_at".to_string(), bare("timestamp")),
            ],
            partition_key,
            clustering: vec![("created_at".to_string(), SortOrder::Desc)],
            options: Vec::new(),
        }
    }

    fn sample_document(table: TableDecl) -> SchemaDocument {
        SchemaDocument {
            types: vec![TypeDecl {
                name: "address".to_string(),
                fields: vec![("street".to_string(), bare("text"))],
            }],
            tables: vec![table],
            options: DocumentOptions {
                package: "com.example.store".to_string(),
            },
        }
    }

    #[test]
    fn partition_key_fields_are_marked() {
        let doc = sample_document(sample_table(vec!["id".to_string()]));
        let schema = resolve_document(&doc).unwrap();

        let table = &schema.tables[0];
        assert!(table.fields[0].is_key);
        assert!(!table.fields[1].is_key);
    }

    #[test]
    fn forward_reference_to_later_type_resolves() {
        let doc = SchemaDocument {
            types: vec![
                TypeDecl {
                    name: "person".to_string(),
                    fields: vec![("home".to_string(), bare("address"))],
                },
                TypeDecl {
                    name: "address".to_string(),
                    fields: vec![("street".to_string(), bare("text"))],
                },
            ],
            tables: Vec::new(),
            options: DocumentOptions {
                package: "com.example".to_string(),
            },
        };

        let schema = resolve_document(&doc).unwrap();
        assert_eq!(
            schema.types[0].fields[0].ty,
            TypeDescriptor::UserDefined("address".to_string())
        );
    }

    #[test]
    fn unknown_partition_key_field_is_fatal() {
        let doc = sample_document(sample_table(vec!["missing".to_string()]));
        let err = resolve_document(&doc).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnknownPartitionKeyField { .. }
        ));
    }

    #[test]
    fn unknown_clustering_field_is_fatal() {
        let mut table = sample_table(vec!["id".to_string()]);
        table.clustering = vec![("nope".to_string(), SortOrder::Asc)];
        let err = resolve_document(&sample_document(table)).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownClusteringField { .. }));
    }

    #[test]
    fn duplicate_field_is_fatal() {
        let mut table = sample_table(vec!["id".to_string()]);
        table.fields.push(("id".to_string(), bare("int")));
        let err = resolve_document(&sample_document(table)).unwrap_err();
        assert!(matches!(err, ResolveError::DuplicateField { .. }));
    }
}
