//! Rendering of resolved type descriptors as CQL type syntax.

use cqlforge_schema::{Primitive, TypeDescriptor};

use crate::error::CqlError;

/// Render a descriptor as CQL type syntax.
///
/// User-defined references render frozen, as required for UDTs nested in
/// columns and collections. `path` is the dotted `entity.field` location,
/// reported when the descriptor bottoms out in a scalar name outside the
/// primitive vocabulary.
pub fn cql_type(descriptor: &TypeDescriptor, path: &str) -> Result<String, CqlError> {
    match descriptor {
        TypeDescriptor::Primitive(name) => {
            let primitive: Primitive =
                name.parse().map_err(|_| CqlError::UnknownPrimitive {
                    path: path.to_string(),
                    name: name.clone(),
                })?;
            Ok(primitive.cql_name().to_string())
        }
        TypeDescriptor::List(entries) => Ok(format!("list<{}>", cql_type(entries, path)?)),
        TypeDescriptor::Set(entries) => Ok(format!("set<{}>", cql_type(entries, path)?)),
        TypeDescriptor::Map(keys, values) => Ok(format!(
            "map<{},{}>",
            cql_type(keys, path)?,
            cql_type(values, path)?
        )),
        TypeDescriptor::UserDefined(name) => Ok(format!("frozen<{name}>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(name: &str) -> TypeDescriptor {
        TypeDescriptor::Primitive(name.to_string())
    }

    #[test]
    fn every_primitive_kind_renders_non_empty() {
        for kind in Primitive::ALL {
            let rendered = cql_type(&prim(kind.cql_name()), "t.f").unwrap();
            assert!(!rendered.is_empty());
            assert_eq!(rendered, kind.cql_name());
        }
    }

    #[test]
    fn nested_containers_render_exactly() {
        let descriptor = TypeDescriptor::List(Box::new(TypeDescriptor::Map(
            Box::new(prim("text")),
            Box::new(TypeDescriptor::Set(Box::new(prim("int")))),
        )));
        assert_eq!(
            cql_type(&descriptor, "t.f").unwrap(),
            "list<map<text,set<int>>>"
        );
    }

    #[test]
    fn user_defined_renders_frozen() {
        let descriptor = TypeDescriptor::UserDefined("address".to_string());
        assert_eq!(cql_type(&descriptor, "t.f").unwrap(), "frozen<address>");
    }

    #[test]
    fn unknown_primitive_reports_the_field_path() {
        let err = cql_type(&prim("wibble"), "users.nick").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("wibble"));
        assert!(message.contains("users.nick"));
    }

    #[test]
    fn unknown_primitive_inside_a_container_is_still_fatal() {
        let descriptor = TypeDescriptor::Set(Box::new(prim("wibble")));
        assert!(cql_type(&descriptor, "t.f").is_err());
    }
}
