//! Per-field accessor synthesis.
//!
//! For every field the object projection synthesizes a read expression
//! (driver row -> object form), a write statement (object form -> bound
//! column), and, for the kinds whose wire representation differs from the
//! object representation, the storage-form conversion. The tables below
//! are exhaustive over the primitive vocabulary.

use cqlforge_schema::{FieldDescriptor, Primitive, TypeDescriptor};

use crate::error::JavaError;
use crate::naming::{class_name, field_name};
use crate::types::java_type;

/// Where a write expression lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTarget {
    /// Binding a column of a prepared insert.
    BoundStatement,
    /// Filling a field of a freshly created UDT value.
    UdtValue,
}

/// Synthesized accessor expressions for one field.
///
/// The getter reads from a driver row (or UDT value) variable named
/// `row`; the setter writes onto a variable named `target`. When the
/// object form needs converting before it can be bound, the conversion
/// is folded into the setter and also exposed as `converter`.
#[derive(Debug, Clone)]
pub struct Accessors {
    pub getter: String,
    pub setter: String,
    pub converter: Option<String>,
}

/// Synthesize the accessor expressions for `field`, owned by the entity
/// named `owner`.
pub fn accessors(
    field: &FieldDescriptor,
    owner: &str,
    target: WriteTarget,
) -> Result<Accessors, JavaError> {
    let path = format!("{}.{}", owner, field.name);
    let value = field_name(&field.name);

    let getter = read_expr(&field.ty, &field.name, &path)?;
    let (storage, converted) = storage_value(&field.ty, &field.name, &value, target, &path)?;
    let setter = write_stmt(&field.ty, &field.name, &storage, &path)?;

    Ok(Accessors {
        getter,
        setter,
        converter: converted.then_some(storage),
    })
}

/// Row-read expression hydrating the object form of one field.
fn read_expr(ty: &TypeDescriptor, column: &str, path: &str) -> Result<String, JavaError> {
    let expr = match ty {
        TypeDescriptor::Primitive(name) => match parse_primitive(name, path)? {
            Primitive::Ascii | Primitive::Text | Primitive::Varchar => {
                format!("row.getString(\"{column}\")")
            }
            Primitive::Bigint | Primitive::Counter => format!("row.getLong(\"{column}\")"),
            Primitive::Blob => format!("row.getBytes(\"{column}\")"),
            Primitive::Boolean => format!("row.getBool(\"{column}\")"),
            Primitive::Decimal => format!("row.getDecimal(\"{column}\")"),
            Primitive::Double => format!("row.getDouble(\"{column}\")"),
            Primitive::Float => format!("row.getFloat(\"{column}\")"),
            Primitive::Inet => format!("row.getInet(\"{column}\")"),
            Primitive::Int => format!("row.getInt(\"{column}\")"),
            // Wire form is an epoch-millisecond Date; object form is an
            // Instant.
            Primitive::Timestamp => format!("row.getDate(\"{column}\").toInstant()"),
            Primitive::Timeuuid | Primitive::Uuid => format!("row.getUUID(\"{column}\")"),
            Primitive::Varint => format!("row.getVarint(\"{column}\")"),
        },
        TypeDescriptor::List(entries) => format!(
            "row.getList(\"{column}\", {}.class)",
            class_literal(&java_type(entries, true, path)?)
        ),
        TypeDescriptor::Set(entries) => format!(
            "row.getSet(\"{column}\", {}.class)",
            class_literal(&java_type(entries, true, path)?)
        ),
        TypeDescriptor::Map(keys, values) => format!(
            "row.getMap(\"{column}\", {}.class, {}.class)",
            class_literal(&java_type(keys, true, path)?),
            class_literal(&java_type(values, true, path)?)
        ),
        TypeDescriptor::UserDefined(name) => {
            // Delegates to the nested type's own hydration constructor.
            format!("new {}(row.getUDTValue(\"{column}\"))", class_name(name))
        }
    };
    Ok(expr)
}

/// Storage form of the object-side expression `value`, plus whether a
/// conversion applies.
fn storage_value(
    ty: &TypeDescriptor,
    column: &str,
    value: &str,
    target: WriteTarget,
    path: &str,
) -> Result<(String, bool), JavaError> {
    match ty {
        TypeDescriptor::Primitive(name) => match parse_primitive(name, path)? {
            Primitive::Timestamp => Ok((format!("java.util.Date.from({value})"), true)),
            _ => Ok((value.to_string(), false)),
        },
        TypeDescriptor::UserDefined(_) => {
            // Delegates to the nested type's own to-storage method; the
            // receiver supplies the UDT metadata for the column.
            let user_type = match target {
                WriteTarget::BoundStatement => format!(
                    "(com.datastax.driver.core.UserType) target.preparedStatement().getVariables().getType(\"{column}\")"
                ),
                WriteTarget::UdtValue => format!(
                    "(com.datastax.driver.core.UserType) target.getType().getFieldType(\"{column}\")"
                ),
            };
            Ok((format!("{value}.toUdtValue({user_type})"), true))
        }
        _ => Ok((value.to_string(), false)),
    }
}

/// Write statement binding the storage form onto `target`.
fn write_stmt(
    ty: &TypeDescriptor,
    column: &str,
    storage: &str,
    path: &str,
) -> Result<String, JavaError> {
    let stmt = match ty {
        TypeDescriptor::Primitive(name) => match parse_primitive(name, path)? {
            Primitive::Ascii | Primitive::Text | Primitive::Varchar => {
                format!("target.setString(\"{column}\", {storage})")
            }
            Primitive::Bigint | Primitive::Counter => {
                format!("target.setLong(\"{column}\", {storage})")
            }
            Primitive::Blob => format!("target.setBytes(\"{column}\", {storage})"),
            Primitive::Boolean => format!("target.setBool(\"{column}\", {storage})"),
            Primitive::Decimal => format!("target.setDecimal(\"{column}\", {storage})"),
            Primitive::Double => format!("target.setDouble(\"{column}\", {storage})"),
            Primitive::Float => format!("target.setFloat(\"{column}\", {storage})"),
            Primitive::Inet => format!("target.setInet(\"{column}\", {storage})"),
            Primitive::Int => format!("target.setInt(\"{column}\", {storage})"),
            Primitive::Timestamp => format!("target.setDate(\"{column}\", {storage})"),
            Primitive::Timeuuid | Primitive::Uuid => {
                format!("target.setUUID(\"{column}\", {storage})")
            }
            Primitive::Varint => format!("target.setVarint(\"{column}\", {storage})"),
        },
        TypeDescriptor::List(_) => format!("target.setList(\"{column}\", {storage})"),
        TypeDescriptor::Set(_) => format!("target.setSet(\"{column}\", {storage})"),
        TypeDescriptor::Map(_, _) => format!("target.setMap(\"{column}\", {storage})"),
        TypeDescriptor::UserDefined(_) => format!("target.setUDTValue(\"{column}\", {storage})"),
    };
    Ok(stmt)
}

fn parse_primitive(name: &str, path: &str) -> Result<Primitive, JavaError> {
    name.parse().map_err(|_| JavaError::UnknownPrimitive {
        path: path.to_string(),
        name: name.to_string(),
    })
}

/// Class-literal form of a Java type: generic parameters erased, since
/// `Map<K,V>.class` is not legal Java.
fn class_literal(java_type: &str) -> String {
    match java_type.find('<') {
        Some(idx) => java_type[..idx].to_string(),
        None => java_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: TypeDescriptor) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            ty,
            is_key: false,
        }
    }

    fn prim(name: &str) -> TypeDescriptor {
        TypeDescriptor::Primitive(name.to_string())
    }

    #[test]
    fn plain_kinds_read_and_write_without_conversion() {
        let acc = accessors(
            &field("user_name", prim("text")),
            "users",
            WriteTarget::BoundStatement,
        )
        .unwrap();
        assert_eq!(acc.getter, "row.getString(\"user_name\")");
        assert_eq!(acc.setter, "target.setString(\"user_name\", userName)");
        assert!(acc.converter.is_none());
    }

    #[test]
    fn every_primitive_kind_synthesizes_accessors() {
        for kind in Primitive::ALL {
            let acc = accessors(
                &field("f", prim(kind.cql_name())),
                "t",
                WriteTarget::BoundStatement,
            )
            .unwrap();
            assert!(!acc.getter.is_empty());
            assert!(!acc.setter.is_empty());
            assert_eq!(acc.converter.is_some(), kind.needs_conversion());
        }
    }

    #[test]
    fn timestamp_converts_between_date_and_instant() {
        let acc = accessors(
            &field("created_at", prim("timestamp")),
            "events",
            WriteTarget::BoundStatement,
        )
        .unwrap();
        assert_eq!(acc.getter, "row.getDate(\"created_at\").toInstant()");
        assert_eq!(
            acc.setter,
            "target.setDate(\"created_at\", java.util.Date.from(createdAt))"
        );
        assert_eq!(
            acc.converter.as_deref(),
            Some("java.util.Date.from(createdAt)")
        );
    }

    #[test]
    fn containers_use_boxed_element_class_literals() {
        let acc = accessors(
            &field("scores", TypeDescriptor::List(Box::new(prim("int")))),
            "players",
            WriteTarget::BoundStatement,
        )
        .unwrap();
        assert_eq!(acc.getter, "row.getList(\"scores\", Integer.class)");
        assert_eq!(acc.setter, "target.setList(\"scores\", scores)");
    }

    #[test]
    fn nested_container_class_literals_are_erased() {
        let ty = TypeDescriptor::Map(
            Box::new(prim("text")),
            Box::new(TypeDescriptor::Set(Box::new(prim("int")))),
        );
        let acc = accessors(&field("tags", ty), "t", WriteTarget::BoundStatement).unwrap();
        assert_eq!(
            acc.getter,
            "row.getMap(\"tags\", String.class, java.util.Set.class)"
        );
    }

    #[test]
    fn user_defined_delegates_to_hydration_and_to_storage() {
        let acc = accessors(
            &field("home", TypeDescriptor::UserDefined("postal_address".to_string())),
            "users",
            WriteTarget::BoundStatement,
        )
        .unwrap();
        assert_eq!(acc.getter, "new PostalAddress(row.getUDTValue(\"home\"))");
        assert!(acc.setter.starts_with("target.setUDTValue(\"home\", home.toUdtValue("));
        assert!(acc.converter.as_deref().unwrap().contains("toUdtValue"));
    }

    #[test]
    fn udt_metadata_lookup_depends_on_the_write_target() {
        let descriptor = field("home", TypeDescriptor::UserDefined("address".to_string()));
        let via_statement =
            accessors(&descriptor, "users", WriteTarget::BoundStatement).unwrap();
        let via_value = accessors(&descriptor, "person", WriteTarget::UdtValue).unwrap();
        assert!(via_statement
            .setter
            .contains("preparedStatement().getVariables()"));
        assert!(via_value.setter.contains("getType().getFieldType"));
    }

    #[test]
    fn unknown_primitive_is_fatal_with_the_field_path() {
        let err = accessors(
            &field("nick", prim("wibble")),
            "users",
            WriteTarget::BoundStatement,
        )
        .unwrap_err();
        assert!(err.to_string().contains("users.nick"));
    }
}
