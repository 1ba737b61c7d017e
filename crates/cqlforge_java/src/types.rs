//! Java type names for resolved descriptors.

use cqlforge_schema::{Primitive, TypeDescriptor};

use crate::error::JavaError;
use crate::naming::class_name;

/// Render a descriptor as a Java type name.
///
/// `boxed` selects the reference form for the kinds that have a numeric
/// or boolean primitive representation. Element types nested inside a
/// container are always projected boxed, regardless of the flag at the
/// top level: collections require reference elements.
pub fn java_type(
    descriptor: &TypeDescriptor,
    boxed: bool,
    path: &str,
) -> Result<String, JavaError> {
    match descriptor {
        TypeDescriptor::Primitive(name) => {
            let primitive: Primitive =
                name.parse().map_err(|_| JavaError::UnknownPrimitive {
                    path: path.to_string(),
                    name: name.clone(),
                })?;
            Ok(primitive_type(primitive, boxed).to_string())
        }
        TypeDescriptor::List(entries) => Ok(format!(
            "java.util.List<{}>",
            java_type(entries, true, path)?
        )),
        TypeDescriptor::Set(entries) => Ok(format!(
            "java.util.Set<{}>",
            java_type(entries, true, path)?
        )),
        TypeDescriptor::Map(keys, values) => Ok(format!(
            "java.util.Map<{},{}>",
            java_type(keys, true, path)?,
            java_type(values, true, path)?
        )),
        TypeDescriptor::UserDefined(name) => Ok(class_name(name)),
    }
}

/// Java representation for each primitive kind. Counter shares bigint's
/// representation; timestamp maps to the structured instant type, with
/// the epoch-millisecond wire form handled by the accessor converters.
fn primitive_type(primitive: Primitive, boxed: bool) -> &'static str {
    match primitive {
        Primitive::Ascii | Primitive::Text | Primitive::Varchar => "String",
        Primitive::Bigint | Primitive::Counter => {
            if boxed {
                "Long"
            } else {
                "long"
            }
        }
        Primitive::Blob => "java.nio.ByteBuffer",
        Primitive::Boolean => {
            if boxed {
                "Boolean"
            } else {
                "boolean"
            }
        }
        Primitive::Decimal => "java.math.BigDecimal",
        Primitive::Double => {
            if boxed {
                "Double"
            } else {
                "double"
            }
        }
        Primitive::Float => {
            if boxed {
                "Float"
            } else {
                "float"
            }
        }
        Primitive::Inet => "java.net.InetAddress",
        Primitive::Int => {
            if boxed {
                "Integer"
            } else {
                "int"
            }
        }
        Primitive::Timestamp => "java.time.Instant",
        Primitive::Timeuuid | Primitive::Uuid => "java.util.UUID",
        Primitive::Varint => "java.math.BigInteger",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(name: &str) -> TypeDescriptor {
        TypeDescriptor::Primitive(name.to_string())
    }

    #[test]
    fn every_primitive_kind_maps_to_a_non_empty_type() {
        for kind in Primitive::ALL {
            let unboxed = java_type(&prim(kind.cql_name()), false, "t.f").unwrap();
            let boxed = java_type(&prim(kind.cql_name()), true, "t.f").unwrap();
            assert!(!unboxed.is_empty());
            assert!(!boxed.is_empty());
        }
    }

    #[test]
    fn counter_shares_bigint_representation() {
        let counter = java_type(&prim("counter"), false, "t.f").unwrap();
        let bigint = java_type(&prim("bigint"), false, "t.f").unwrap();
        assert_eq!(counter, bigint);
        assert_eq!(counter, "long");
    }

    #[test]
    fn boxed_flag_switches_numeric_kinds() {
        assert_eq!(java_type(&prim("int"), false, "t.f").unwrap(), "int");
        assert_eq!(java_type(&prim("int"), true, "t.f").unwrap(), "Integer");
        assert_eq!(java_type(&prim("boolean"), false, "t.f").unwrap(), "boolean");
        assert_eq!(java_type(&prim("boolean"), true, "t.f").unwrap(), "Boolean");
    }

    #[test]
    fn container_elements_are_always_boxed() {
        let descriptor = TypeDescriptor::List(Box::new(TypeDescriptor::Map(
            Box::new(prim("text")),
            Box::new(TypeDescriptor::Set(Box::new(prim("int")))),
        )));
        // Even with boxed=false at the top, every nested element is boxed.
        assert_eq!(
            java_type(&descriptor, false, "t.f").unwrap(),
            "java.util.List<java.util.Map<String,java.util.Set<Integer>>>"
        );
    }

    #[test]
    fn user_defined_maps_to_pascal_case_class() {
        let descriptor = TypeDescriptor::UserDefined("postal_address".to_string());
        assert_eq!(
            java_type(&descriptor, false, "t.f").unwrap(),
            "PostalAddress"
        );
    }

    #[test]
    fn unknown_primitive_reports_the_field_path() {
        let err = java_type(&prim("wibble"), false, "users.nick").unwrap_err();
        assert!(err.to_string().contains("users.nick"));
    }
}
