//! auth-schema-gen: generates Astro DB schema definitions from auth table metadata
//!
//! Given the canonical, framework-neutral description of an authentication
//! system's tables, this crate emits an `astro:db` schema document binding one
//! `defineTable` statement per table. The crate never writes the document
//! itself; it reports the target path and whether persisting would clobber an
//! existing file, and leaves the write to the caller.

pub mod config;
pub mod error;
pub mod schema;
pub mod tables;
pub mod utils;


// Re-export main types for easier access
pub use config::{AdapterConfig, DatabaseConfig, GeneratorConfig, OutputConfig};
pub use error::{Error, Result};
pub use schema::generator::SchemaGenerator;
pub use schema::types::{FieldDescriptor, FieldType, GeneratedSchema, TableDescriptor};
pub use tables::{AuthOptions, AuthTables, TableSource};

/// Initialize a client from the specified configuration file
pub fn init(config_path: &std::path::Path) -> Result<SchemaGenClient> {
    let config = config::load_from_file(config_path)?;
    Ok(SchemaGenClient::new(config))
}

/// The main client for running schema generation
pub struct SchemaGenClient {
    config: GeneratorConfig,
}

impl SchemaGenClient {
    /// Create a new client from configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this client generates with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Retrieve table metadata from the source and generate the schema
    /// document. Each run is a pure function of the metadata and the
    /// configuration; the only suspension point is the metadata retrieval.
    pub async fn generate(&self, source: &dyn TableSource) -> Result<GeneratedSchema> {
        let tables = source.tables().await?;
        tracing::debug!(tables = tables.len(), "retrieved table metadata");

        let generator = SchemaGenerator::new(&self.config);
        generator.generate(&tables)
    }
}
