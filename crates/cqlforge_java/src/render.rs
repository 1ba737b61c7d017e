//! Java source emission.
//!
//! One immutable final class per declared entity: final fields, a
//! hydration constructor from the driver row (tables) or UDT value
//! (records), an all-args constructor, getters, and the persistence
//! routine (`bind` for tables, `toUdtValue` for records).

use cqlforge_schema::{FieldDescriptor, RecordDescriptor, TableDescriptor};
use tracing::debug;

use crate::accessors::{accessors, WriteTarget};
use crate::error::JavaError;
use crate::naming::{class_name, field_name};
use crate::types::java_type;

/// File name for a generated entity: PascalCase class name plus `.java`.
pub fn file_name(entity: &str) -> String {
    format!("{}.java", class_name(entity))
}

/// Render the class for a user-defined type.
pub fn render_record(record: &RecordDescriptor, package: &str) -> Result<String, JavaError> {
    render_class(
        &record.name,
        &record.fields,
        package,
        "user-defined type",
        "com.datastax.driver.core.UDTValue",
        WriteTarget::UdtValue,
    )
}

/// Render the class for a table row.
pub fn render_table(table: &TableDescriptor, package: &str) -> Result<String, JavaError> {
    render_class(
        &table.name,
        &table.fields,
        package,
        "table",
        "com.datastax.driver.core.Row",
        WriteTarget::BoundStatement,
    )
}

fn render_class(
    name: &str,
    fields: &[FieldDescriptor],
    package: &str,
    entity_kind: &str,
    row_type: &str,
    target: WriteTarget,
) -> Result<String, JavaError> {
    let class = class_name(name);
    debug!(entity = name, class = %class, "rendering class");

    let mut decls = Vec::with_capacity(fields.len());
    let mut hydrations = Vec::with_capacity(fields.len());
    let mut params = Vec::with_capacity(fields.len());
    let mut assignments = Vec::with_capacity(fields.len());
    let mut getters = Vec::with_capacity(fields.len());
    let mut setters = Vec::with_capacity(fields.len());

    for descriptor in fields {
        let path = format!("{}.{}", name, descriptor.name);
        let ty = java_type(&descriptor.ty, false, &path)?;
        let java = field_name(&descriptor.name);
        let acc = accessors(descriptor, name, target)?;

        decls.push(format!("    private final {ty} {java};"));
        hydrations.push(format!("        this.{java} = {};", acc.getter));
        params.push(format!("{ty} {java}"));
        assignments.push(format!("        this.{java} = {java};"));
        getters.push(format!(
            "    public {ty} get{pascal}() {{\n        return {java};\n    }}",
            pascal = class_name(&descriptor.name)
        ));
        setters.push(format!("        {};", acc.setter));
    }

    let mut out = String::new();
    out.push_str(&format!("package {package};\n\n"));
    out.push_str(&format!(
        "/**\n * Generated mapping for the '{name}' {entity_kind}.\n *\n * Regenerate with cqlforge instead of editing by hand.\n */\n"
    ));
    out.push_str(&format!("public final class {class} {{\n"));
    out.push_str(&decls.join("\n"));
    out.push_str("\n\n");

    // Hydration constructor: storage form in, object form out.
    out.push_str(&format!("    public {class}({row_type} row) {{\n"));
    out.push_str(&hydrations.join("\n"));
    out.push_str("\n    }\n\n");

    out.push_str(&format!("    public {class}({}) {{\n", params.join(", ")));
    out.push_str(&assignments.join("\n"));
    out.push_str("\n    }\n\n");

    out.push_str(&getters.join("\n\n"));
    out.push_str("\n\n");

    match target {
        WriteTarget::BoundStatement => {
            out.push_str(
                "    public void bind(com.datastax.driver.core.BoundStatement target) {\n",
            );
            out.push_str(&setters.join("\n"));
            out.push_str("\n    }\n");
        }
        WriteTarget::UdtValue => {
            out.push_str(
                "    public com.datastax.driver.core.UDTValue toUdtValue(com.datastax.driver.core.UserType type) {\n",
            );
            out.push_str("        com.datastax.driver.core.UDTValue target = type.newValue();\n");
            out.push_str(&setters.join("\n"));
            out.push_str("\n        return target;\n    }\n");
        }
    }

    out.push_str("}\n");
    Ok(out)
}
