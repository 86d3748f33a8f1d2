//! Schema document generator
//!
//! This module renders table descriptors into an Astro DB schema document:
//! one import header plus one `defineTable` statement per table.

use indexmap::IndexMap;
use serde_json::Value;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::schema::resolver::resolve_column_type;
use crate::schema::types::{FieldDescriptor, GeneratedSchema, TableDescriptor};
use crate::utils::naming::{to_export_name, to_storage_case};

/// Default location of the generated schema file
pub const DEFAULT_SCHEMA_PATH: &str = "./db/auth-config.ts";

/// Astro DB schema document generator
pub struct SchemaGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SchemaGenerator<'a> {
    /// Create a new schema generator
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the full schema document for the given tables.
    ///
    /// The tables are rendered in iteration order. A type resolution failure
    /// on any field aborts the whole run; no partial document is returned.
    /// The only filesystem interaction is the existence check behind the
    /// `overwrite` flag; persisting the document is the caller's job.
    pub fn generate(
        &self,
        tables: &IndexMap<String, TableDescriptor>,
    ) -> Result<GeneratedSchema> {
        let file_name = self
            .config
            .output
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH));
        let file_exists = file_name.exists();

        let mut code = generate_import();
        for table in tables.values() {
            let rendered = self.generate_table(table)?;
            code.push('\n');
            code.push_str(&rendered);
            code.push('\n');
        }

        tracing::debug!(
            tables = tables.len(),
            file = %file_name.display(),
            "generated schema document"
        );

        Ok(GeneratedSchema {
            code: Some(code),
            file_name,
            overwrite: file_exists,
            append: false,
        })
    }

    /// Render one table as a `defineTable` statement
    fn generate_table(&self, table: &TableDescriptor) -> Result<String> {
        let model_name = to_export_name(&table.model_name, self.config.adapter.use_plural);

        let mut entries = Vec::with_capacity(table.fields.len() + 1);
        let mut has_id = false;
        for (key, field) in &table.fields {
            let name = field.field_name.as_deref().unwrap_or(key);
            if name == "id" {
                has_id = true;
            }
            let column = self.build_column(name, field, &model_name)?;
            entries.push(format!("    {}: {}", name, column));
        }

        // Every table carries exactly one primary key named `id`; inject it
        // only when the extractor did not supply one.
        if !has_id {
            let id_type = if self.config.database.use_number_id {
                "number"
            } else {
                "text"
            };
            entries.insert(
                0,
                format!("    id: column.{}({{ primaryKey: true }})", id_type),
            );
        }

        Ok(format!(
            "export const {} = defineTable({{\n  columns: {{\n{}\n  }},\n}});",
            model_name,
            entries.join(",\n")
        ))
    }

    /// Build one column declaration, modifiers in fixed order
    fn build_column(
        &self,
        name: &str,
        field: &FieldDescriptor,
        model_name: &str,
    ) -> Result<String> {
        let storage_name = to_storage_case(name, self.config.adapter.camel_case);
        let column_type =
            resolve_column_type(field, model_name, self.config.database.use_number_id)?;

        let mut opts: Vec<String> = Vec::new();

        if name == "id" {
            opts.push("primaryKey: true".to_string());
        }
        if field.unique {
            opts.push("unique: true".to_string());
        }
        match field.required {
            Some(true) => opts.push("optional: false".to_string()),
            Some(false) => opts.push("optional: true".to_string()),
            // Absent tri-state: defer to the DSL's own nullability default
            None => {}
        }
        if storage_name != name {
            opts.push(format!("name: \"{}\"", storage_name));
        }
        match &field.default {
            Some(Value::String(s)) => opts.push(format!("default: \"{}\"", s)),
            Some(Value::Number(n)) => opts.push(format!("default: {}", n)),
            Some(Value::Bool(b)) => opts.push(format!("default: {}", b)),
            // Other default kinds are not serializable and are dropped
            Some(other) => {
                tracing::warn!(field = name, value = %other, "dropping unserializable default");
            }
            None if name == "createdAt" || name == "updatedAt" => {
                opts.push(
                    "default: sql`(cast(unixepoch('subsecond') * 1000 as integer))`".to_string(),
                );
            }
            None => {}
        }
        if let Some(reference) = &field.references {
            let ref_model = to_export_name(&reference.model, self.config.adapter.use_plural);
            opts.push(format!(
                "references: () => {}.columns.{}",
                ref_model, reference.field
            ));
        }

        if opts.is_empty() {
            Ok(format!("column.{}()", column_type.as_str()))
        } else {
            Ok(format!(
                "column.{}({{ {} }})",
                column_type.as_str(),
                opts.join(", ")
            ))
        }
    }
}

/// The import header naming the three schema DSL primitives used by every
/// generated document
fn generate_import() -> String {
    let root_imports = ["defineTable", "column", "sql"];
    format!("import {{ {} }} from \"astro:db\";\n", root_imports.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldType;
    use serde_json::json;

    fn generator_config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    fn build(field: &FieldDescriptor, name: &str) -> String {
        let config = generator_config();
        let generator = SchemaGenerator::new(&config);
        generator.build_column(name, field, "user").unwrap()
    }

    #[test]
    fn test_plain_column_has_no_options_clause() {
        let field = FieldDescriptor::new(FieldType::String);
        assert_eq!(build(&field, "bio"), "column.text()");
    }

    #[test]
    fn test_id_column_is_primary_key() {
        let field = FieldDescriptor::new(FieldType::String);
        assert_eq!(build(&field, "id"), "column.text({ primaryKey: true })");
    }

    #[test]
    fn test_modifier_order() {
        let field = FieldDescriptor::new(FieldType::String)
            .unique()
            .required()
            .default_value("active");
        assert_eq!(
            build(&field, "accountStatus"),
            "column.text({ unique: true, optional: false, name: \"account_status\", default: \"active\" })"
        );
    }

    #[test]
    fn test_string_default_is_quoted_number_is_not() {
        let field = FieldDescriptor::new(FieldType::String).default_value("active");
        assert!(build(&field, "status").contains("default: \"active\""));

        let field = FieldDescriptor::new(FieldType::Number).default_value(5);
        assert!(build(&field, "attempts").contains("default: 5"));

        let field = FieldDescriptor::new(FieldType::Boolean).default_value(false);
        assert!(build(&field, "banned").contains("default: false"));
    }

    #[test]
    fn test_unsupported_default_is_dropped() {
        let field =
            FieldDescriptor::new(FieldType::Json).default_value(json!({ "nested": true }));
        assert_eq!(build(&field, "payload"), "column.json()");
    }

    #[test]
    fn test_timestamp_fields_get_synthesized_default() {
        let expected = "default: sql`(cast(unixepoch('subsecond') * 1000 as integer))`";

        let field = FieldDescriptor::new(FieldType::Date);
        assert!(build(&field, "createdAt").contains(expected));
        assert!(build(&field, "updatedAt").contains(expected));
        assert!(!build(&field, "expiresAt").contains("default"));
    }

    #[test]
    fn test_explicit_default_beats_synthesized_timestamp() {
        let field = FieldDescriptor::new(FieldType::Number).default_value(0);
        let column = build(&field, "createdAt");
        assert!(column.contains("default: 0"));
        assert!(!column.contains("sql`"));
    }

    #[test]
    fn test_required_tristate() {
        let required = FieldDescriptor::new(FieldType::String).required();
        assert!(build(&required, "email").contains("optional: false"));

        let optional = FieldDescriptor::new(FieldType::String).optional();
        assert!(build(&optional, "image").contains("optional: true"));

        let unspecified = FieldDescriptor::new(FieldType::String);
        assert!(!build(&unspecified, "image").contains("optional"));
    }

    #[test]
    fn test_storage_name_override_only_when_it_differs() {
        let field = FieldDescriptor::new(FieldType::Boolean);
        assert!(build(&field, "emailVerified").contains("name: \"email_verified\""));
        assert!(!build(&field, "email").contains("name:"));
    }

    #[test]
    fn test_reference_points_at_export_name() {
        let field = FieldDescriptor::new(FieldType::String)
            .required()
            .references("user", "id");
        assert!(build(&field, "userId").contains("references: () => user.columns.id"));
    }

    #[test]
    fn test_missing_id_is_injected_first() {
        let table = TableDescriptor::new("session")
            .with_field("token", FieldDescriptor::new(FieldType::String));

        let config = generator_config();
        let generator = SchemaGenerator::new(&config);
        let rendered = generator.generate_table(&table).unwrap();

        let id_pos = rendered.find("id: column.text({ primaryKey: true })").unwrap();
        let token_pos = rendered.find("token:").unwrap();
        assert!(id_pos < token_pos);
    }

    #[test]
    fn test_injected_id_respects_number_id_setting() {
        let table = TableDescriptor::new("session")
            .with_field("token", FieldDescriptor::new(FieldType::String));

        let mut config = generator_config();
        config.database.use_number_id = true;
        let generator = SchemaGenerator::new(&config);
        let rendered = generator.generate_table(&table).unwrap();
        assert!(rendered.contains("id: column.number({ primaryKey: true })"));
    }

    #[test]
    fn test_supplied_id_is_not_duplicated() {
        let table = TableDescriptor::new("user")
            .with_field("id", FieldDescriptor::new(FieldType::String));

        let config = generator_config();
        let generator = SchemaGenerator::new(&config);
        let rendered = generator.generate_table(&table).unwrap();
        assert_eq!(rendered.matches("primaryKey: true").count(), 1);
    }

    #[test]
    fn test_field_name_override_is_used_as_property_key() {
        let table = TableDescriptor::new("user").with_field(
            "emailAddress",
            FieldDescriptor::new(FieldType::String).field_name("email"),
        );

        let config = generator_config();
        let generator = SchemaGenerator::new(&config);
        let rendered = generator.generate_table(&table).unwrap();
        assert!(rendered.contains("    email: column.text()"));
        assert!(!rendered.contains("emailAddress"));
    }

    #[test]
    fn test_plural_export_name() {
        let table = TableDescriptor::new("User")
            .with_field("name", FieldDescriptor::new(FieldType::String));

        let mut config = generator_config();
        config.adapter.use_plural = true;
        let generator = SchemaGenerator::new(&config);
        let rendered = generator.generate_table(&table).unwrap();
        assert!(rendered.starts_with("export const users = defineTable({"));
    }

    #[test]
    fn test_fatal_type_aborts_whole_run() {
        let mut tables = IndexMap::new();
        tables.insert(
            "user".to_string(),
            TableDescriptor::new("user")
                .with_field("name", FieldDescriptor::new(FieldType::String)),
        );
        tables.insert(
            "flags".to_string(),
            TableDescriptor::new("flags").with_field(
                "bits",
                FieldDescriptor::new(FieldType::Literal(vec![json!(1), json!(2)])),
            ),
        );

        let config = generator_config();
        let generator = SchemaGenerator::new(&config);
        assert!(generator.generate(&tables).is_err());
    }

    #[test]
    fn test_import_header() {
        assert_eq!(
            generate_import(),
            "import { defineTable, column, sql } from \"astro:db\";\n"
        );
    }
}
