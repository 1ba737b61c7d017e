//! Serialization of table option values as CQL literals.

use serde_yaml::Value;

use crate::error::CqlError;

/// Serialize one option value as a CQL literal.
///
/// Mappings render as `{ k: v, ... }` with keys and values serialized
/// recursively in mapping order. Strings are single-quoted with embedded
/// quotes doubled. Numbers and booleans pass through in their literal
/// textual form. Anything else has no CQL literal form and is fatal.
pub fn serialize_option(option: &str, value: &Value) -> Result<String, CqlError> {
    match value {
        Value::Mapping(mapping) => {
            let mut parts = Vec::with_capacity(mapping.len());
            for (key, val) in mapping {
                parts.push(format!(
                    "{}: {}",
                    serialize_option(option, key)?,
                    serialize_option(option, val)?
                ));
            }
            Ok(format!("{{ {} }}", parts.join(", ")))
        }
        Value::String(text) => Ok(format!("'{}'", text.replace('\'', "''"))),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(CqlError::MalformedOption {
            option: option.to_string(),
            reason: format!("a {} value has no CQL literal form", value_kind(other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn mapping_serializes_in_order_with_quoted_strings() {
        let value = yaml("class: SizeTieredCompactionStrategy");
        assert_eq!(
            serialize_option("compaction", &value).unwrap(),
            "{ 'class': 'SizeTieredCompactionStrategy' }"
        );
    }

    #[test]
    fn embedded_single_quotes_are_doubled() {
        let value = Value::String("O'Brien".to_string());
        assert_eq!(serialize_option("comment", &value).unwrap(), "'O''Brien'");
    }

    #[test]
    fn scalars_pass_through_literally() {
        assert_eq!(serialize_option("o", &yaml("0.1")).unwrap(), "0.1");
        assert_eq!(serialize_option("o", &yaml("42")).unwrap(), "42");
        assert_eq!(serialize_option("o", &yaml("true")).unwrap(), "true");
    }

    #[test]
    fn nested_mappings_recurse_in_mapping_order() {
        let value = yaml(
            "class: LeveledCompactionStrategy\nsstable_size_in_mb: 160",
        );
        assert_eq!(
            serialize_option("compaction", &value).unwrap(),
            "{ 'class': 'LeveledCompactionStrategy', 'sstable_size_in_mb': 160 }"
        );
    }

    #[test]
    fn sequences_and_nulls_are_malformed() {
        assert!(serialize_option("o", &yaml("[1, 2]")).is_err());
        assert!(serialize_option("o", &Value::Null).is_err());
    }
}
