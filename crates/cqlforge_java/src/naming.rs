//! Identifier transforms between schema snake_case and Java conventions.

/// snake_case to PascalCase: `user_account` becomes `UserAccount`.
pub fn class_name(identifier: &str) -> String {
    identifier.split('_').map(capitalize).collect()
}

/// snake_case to camelCase: `created_at` becomes `createdAt`. The first
/// segment is kept as written.
pub fn field_name(identifier: &str) -> String {
    let mut parts = identifier.split('_');
    let mut out = String::with_capacity(identifier.len());
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        out.push_str(&capitalize(part));
    }
    out
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
