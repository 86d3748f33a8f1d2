//! Column type resolution
//!
//! Maps a field's logical type and referential metadata to the Astro DB
//! column kind it is stored as.

use crate::error::{Error, Result};
use crate::schema::types::{FieldDescriptor, FieldType};

/// The column kinds offered by the target schema DSL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Boolean,
    Number,
    Date,
    Json,
}

impl ColumnType {
    /// The `column.<type>` factory name in the generated source
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Boolean => "boolean",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::Json => "json",
        }
    }
}

/// Resolve the column type for one field.
///
/// Fields referencing another table's `id` take their type from the global
/// numeric-identifier setting alone; the referenced field's declared type is
/// irrelevant. Enumerations of string literals are stored as plain text, not
/// validated at the schema level. Any other non-scalar shape is refused with
/// an error naming the owning model rather than guessed at.
pub fn resolve_column_type(
    field: &FieldDescriptor,
    model_name: &str,
    use_number_id: bool,
) -> Result<ColumnType> {
    if let Some(reference) = &field.references {
        if reference.field == "id" {
            return Ok(if use_number_id {
                ColumnType::Number
            } else {
                ColumnType::Text
            });
        }
    }

    match &field.field_type {
        FieldType::Literal(values) => {
            if values.iter().all(|v| v.is_string()) {
                Ok(ColumnType::Text)
            } else {
                Err(Error::InvalidFieldType(model_name.to_string()))
            }
        }
        FieldType::String => Ok(ColumnType::Text),
        FieldType::Boolean => Ok(ColumnType::Boolean),
        FieldType::Number => Ok(ColumnType::Number),
        FieldType::Date => Ok(ColumnType::Date),
        FieldType::StringArray | FieldType::NumberArray | FieldType::Json => Ok(ColumnType::Json),
        // Permissive fallback for tags this resolver does not know
        FieldType::Custom(_) => Ok(ColumnType::Text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_dispatch() {
        let cases = [
            (FieldType::String, ColumnType::Text),
            (FieldType::Boolean, ColumnType::Boolean),
            (FieldType::Number, ColumnType::Number),
            (FieldType::Date, ColumnType::Date),
            (FieldType::StringArray, ColumnType::Json),
            (FieldType::NumberArray, ColumnType::Json),
            (FieldType::Json, ColumnType::Json),
        ];

        for (field_type, expected) in cases {
            let field = FieldDescriptor::new(field_type);
            assert_eq!(resolve_column_type(&field, "user", false).unwrap(), expected);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_text() {
        let field = FieldDescriptor::new(FieldType::from_tag("uuid"));
        assert_eq!(
            resolve_column_type(&field, "user", false).unwrap(),
            ColumnType::Text
        );
    }

    #[test]
    fn test_reference_to_id_ignores_declared_type() {
        // Declared as date, but the id reference wins
        let field = FieldDescriptor::new(FieldType::Date).references("user", "id");

        assert_eq!(
            resolve_column_type(&field, "session", false).unwrap(),
            ColumnType::Text
        );
        assert_eq!(
            resolve_column_type(&field, "session", true).unwrap(),
            ColumnType::Number
        );
    }

    #[test]
    fn test_reference_to_non_id_uses_declared_type() {
        let field = FieldDescriptor::new(FieldType::Number).references("user", "email");
        assert_eq!(
            resolve_column_type(&field, "session", false).unwrap(),
            ColumnType::Number
        );
    }

    #[test]
    fn test_string_literals_resolve_to_text() {
        let field = FieldDescriptor::new(FieldType::Literal(vec![
            json!("active"),
            json!("banned"),
        ]));
        assert_eq!(
            resolve_column_type(&field, "user", false).unwrap(),
            ColumnType::Text
        );
    }

    #[test]
    fn test_non_string_literals_are_fatal() {
        let field = FieldDescriptor::new(FieldType::Literal(vec![json!(1), json!(2)]));
        let err = resolve_column_type(&field, "user", false).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldType(model) if model == "user"));
    }
}
