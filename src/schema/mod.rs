//! Schema module for auth-schema-gen
//!
//! This module handles column type resolution and schema document generation.

pub mod generator;
pub mod resolver;
pub mod types;

// Re-export key types
pub use generator::{SchemaGenerator, DEFAULT_SCHEMA_PATH};
pub use resolver::{resolve_column_type, ColumnType};
pub use types::{
    FieldDescriptor, FieldReference, FieldType, GeneratedSchema, TableDescriptor,
};
