//! Naming utilities for auth-schema-gen
//!
//! This module converts between the extractor's logical naming convention
//! (camelCase field names, PascalCase-ish model names) and the storage and
//! export conventions used in the generated schema document.

/// Convert a logical identifier to its storage-case form.
///
/// When the adapter runs in `camel_case` mode this is the identity function.
/// Otherwise the identifier is converted to snake_case by a single pass over
/// the characters, splitting on two kinds of word boundary:
///
/// - an acronym followed by a capitalized word (`HTTPServer` -> `http_server`)
/// - a lowercase letter or digit followed by a capital (`myID` -> `my_id`)
///
/// The acronym rule must be checked alongside the camel rule; splitting only
/// on lowercase-to-capital transitions would mis-split embedded acronyms.
pub fn to_storage_case(name: &str, camel_case: bool) -> String {
    if camel_case {
        return name.to_string();
    }
    to_snake_case(name)
}

fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let camel_boundary = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let acronym_boundary = prev.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if camel_boundary || acronym_boundary {
                result.push('_');
            }
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}

/// Convert a canonical model name to the export-form identifier the table
/// is bound to in the generated document.
///
/// Lower-cases the first character; `use_plural` appends a literal `s` with
/// no irregular-plural handling.
pub fn to_export_name(model_name: &str, use_plural: bool) -> String {
    let mut chars = model_name.chars();
    let base: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };

    if use_plural {
        format!("{}s", base)
    } else {
        base
    }
}
