//! Type definitions for auth table metadata and generation results

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::path::PathBuf;

/// Represents one logical database table supplied by the extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescriptor {
    /// Canonical model name, e.g. `user` or `UserProfile`
    pub model_name: String,
    /// Field key -> descriptor; insertion order is declaration order
    pub fields: IndexMap<String, FieldDescriptor>,
}

impl TableDescriptor {
    /// Create a new table descriptor with the given model name
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field to the table
    pub fn add_field(&mut self, key: &str, field: FieldDescriptor) {
        self.fields.insert(key.to_string(), field);
    }

    /// Add a field and return the table, for chained construction
    pub fn with_field(mut self, key: &str, field: FieldDescriptor) -> Self {
        self.add_field(key, field);
        self
    }
}

/// Represents one column's logical metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Storage-name override of the field key
    pub field_name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Tri-state nullability: `None` defers to the schema DSL's own default
    pub required: Option<bool>,
    #[serde(default)]
    pub unique: bool,
    /// Only string, number and boolean defaults are serializable; anything
    /// else is dropped at emission time
    pub default: Option<Value>,
    pub references: Option<FieldReference>,
}

impl FieldDescriptor {
    /// Create a new field descriptor of the given logical type
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_name: None,
            field_type,
            required: None,
            unique: false,
            default: None,
            references: None,
        }
    }

    /// Mark the field as required (`optional: false` in the emitted column)
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Mark the field as explicitly optional (`optional: true`)
    pub fn optional(mut self) -> Self {
        self.required = Some(false);
        self
    }

    /// Mark the field as unique
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Override the storage name used instead of the field key
    pub fn field_name(mut self, name: &str) -> Self {
        self.field_name = Some(name.to_string());
        self
    }

    /// Set a default value for the field
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Point the field at another table's column
    pub fn references(mut self, model: &str, field: &str) -> Self {
        self.references = Some(FieldReference {
            model: model.to_string(),
            field: field.to_string(),
        });
        self
    }
}

/// Foreign-key linkage to another table's column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReference {
    /// Canonical model name of the referenced table
    pub model: String,
    /// Referenced column key, typically `id`
    pub field: String,
}

/// The closed set of logical field kinds understood by the resolver.
///
/// The extractor side of the auth framework describes types dynamically, as
/// either a tag string or an array of literal values. That open shape is
/// pinned down here: known tags get their own variant, an array of literals
/// becomes [`FieldType::Literal`] (only all-string sets are storable), and an
/// unknown tag is preserved in [`FieldType::Custom`] so it can fall back to
/// text storage.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Boolean,
    Number,
    Date,
    StringArray,
    NumberArray,
    Json,
    /// An enumeration of literal values, e.g. `["active", "banned"]`
    Literal(Vec<Value>),
    /// An unrecognized scalar tag, stored as text
    Custom(String),
}

impl FieldType {
    /// Parse a type tag in the extractor's wire convention
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => FieldType::String,
            "boolean" => FieldType::Boolean,
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            "string[]" => FieldType::StringArray,
            "number[]" => FieldType::NumberArray,
            "json" => FieldType::Json,
            other => FieldType::Custom(other.to_string()),
        }
    }

}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldType::String => serializer.serialize_str("string"),
            FieldType::Boolean => serializer.serialize_str("boolean"),
            FieldType::Number => serializer.serialize_str("number"),
            FieldType::Date => serializer.serialize_str("date"),
            FieldType::StringArray => serializer.serialize_str("string[]"),
            FieldType::NumberArray => serializer.serialize_str("number[]"),
            FieldType::Json => serializer.serialize_str("json"),
            FieldType::Custom(tag) => serializer.serialize_str(tag),
            FieldType::Literal(values) => values.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(tag) => Ok(FieldType::from_tag(&tag)),
            Value::Array(values) => Ok(FieldType::Literal(values)),
            other => Err(D::Error::custom(format!(
                "expected a type tag or an array of literals, got {}",
                other
            ))),
        }
    }
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct GeneratedSchema {
    /// Full source text of the schema document; absent when generation failed
    pub code: Option<String>,
    /// Target path the caller should persist to
    pub file_name: PathBuf,
    /// A file already exists at `file_name`; persisting will clobber it.
    /// Informational only, the generator never writes anything itself.
    pub overwrite: bool,
    /// Policy hint for callers that append rather than replace
    pub append: bool,
}
