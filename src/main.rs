//! Command-line entry point: generates the schema document and persists it.
//!
//! Persisting is the caller-side half of the contract; the library itself
//! only reports the target path and the overwrite recommendation.

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use auth_schema_gen::{
    config, utils, AuthOptions, AuthTables, GeneratorConfig, SchemaGenClient,
};

#[derive(Parser, Debug)]
#[command(
    name = "auth-schema-gen",
    version,
    about = "Generate an Astro DB schema file from auth table metadata"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target schema file, overrides the configured output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep camelCase storage names instead of converting to snake_case
    #[arg(long)]
    camel_case: bool,

    /// Pluralize exported table identifiers
    #[arg(long)]
    plural: bool,

    /// Use numeric instead of textual identifiers
    #[arg(long)]
    number_id: bool,

    /// Include credential fields for email/password sign-in
    #[arg(long)]
    email_and_password: bool,

    /// Include username fields on the user table
    #[arg(long)]
    username: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if cli.camel_case {
        config.adapter.camel_case = true;
    }
    if cli.plural {
        config.adapter.use_plural = true;
    }
    if cli.number_id {
        config.database.use_number_id = true;
    }
    if let Some(output) = cli.output {
        config.output.file = Some(output);
    }

    utils::logging::init_logging(&config.logging)?;

    let source = AuthTables::new(AuthOptions {
        email_and_password: cli.email_and_password,
        username: cli.username,
    });

    let client = SchemaGenClient::new(config);
    let result = client.generate(&source).await?;

    let code = match result.code {
        Some(code) => code,
        None => anyhow::bail!("generation produced no schema document"),
    };

    if result.overwrite {
        tracing::warn!(
            file = %result.file_name.display(),
            "overwriting existing schema file"
        );
    }

    if let Some(parent) = result.file_name.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(&result.file_name, &code)
        .with_context(|| format!("failed to write {}", result.file_name.display()))?;

    tracing::info!(file = %result.file_name.display(), "schema file written");
    println!("wrote {}", result.file_name.display());

    Ok(())
}
