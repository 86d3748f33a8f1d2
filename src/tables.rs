//! Auth table extraction
//!
//! This module supplies the canonical auth table metadata the generator
//! consumes. The built-in [`AuthTables`] source derives the table shape from
//! enabled features; the [`TableSource`] trait lets callers plug in their own
//! extractor, which may perform asynchronous setup before returning.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::types::{FieldDescriptor, FieldType, TableDescriptor};

/// A source of table metadata for one generation run.
///
/// The generator treats the returned mapping as opaque; iteration order is
/// declaration order in the emitted document.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn tables(&self) -> Result<IndexMap<String, TableDescriptor>>;
}

/// Feature toggles that shape the extracted auth tables
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AuthOptions {
    /// Store credential material on the account table
    pub email_and_password: bool,
    /// Add username fields to the user table
    pub username: bool,
}

/// The built-in extractor for the core auth data model:
/// user, session, account and verification tables.
pub struct AuthTables {
    options: AuthOptions,
}

impl AuthTables {
    /// Create an extractor for the given feature set
    pub fn new(options: AuthOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl TableSource for AuthTables {
    async fn tables(&self) -> Result<IndexMap<String, TableDescriptor>> {
        let mut tables = IndexMap::new();
        tables.insert("user".to_string(), user_table(&self.options));
        tables.insert("session".to_string(), session_table());
        tables.insert("account".to_string(), account_table(&self.options));
        tables.insert("verification".to_string(), verification_table());
        Ok(tables)
    }
}

fn user_table(options: &AuthOptions) -> TableDescriptor {
    let mut table = TableDescriptor::new("user")
        .with_field("name", FieldDescriptor::new(FieldType::String).required())
        .with_field(
            "email",
            FieldDescriptor::new(FieldType::String).required().unique(),
        )
        .with_field(
            "emailVerified",
            FieldDescriptor::new(FieldType::Boolean)
                .required()
                .default_value(false),
        )
        .with_field("image", FieldDescriptor::new(FieldType::String).optional());

    if options.username {
        table.add_field(
            "username",
            FieldDescriptor::new(FieldType::String).optional().unique(),
        );
        table.add_field(
            "displayUsername",
            FieldDescriptor::new(FieldType::String).optional(),
        );
    }

    table
        .with_field("createdAt", FieldDescriptor::new(FieldType::Date).required())
        .with_field("updatedAt", FieldDescriptor::new(FieldType::Date).required())
}

fn session_table() -> TableDescriptor {
    TableDescriptor::new("session")
        .with_field("expiresAt", FieldDescriptor::new(FieldType::Date).required())
        .with_field(
            "token",
            FieldDescriptor::new(FieldType::String).required().unique(),
        )
        .with_field("createdAt", FieldDescriptor::new(FieldType::Date).required())
        .with_field("updatedAt", FieldDescriptor::new(FieldType::Date).required())
        .with_field("ipAddress", FieldDescriptor::new(FieldType::String).optional())
        .with_field("userAgent", FieldDescriptor::new(FieldType::String).optional())
        .with_field(
            "userId",
            FieldDescriptor::new(FieldType::String)
                .required()
                .references("user", "id"),
        )
}

fn account_table(options: &AuthOptions) -> TableDescriptor {
    let mut table = TableDescriptor::new("account")
        .with_field("accountId", FieldDescriptor::new(FieldType::String).required())
        .with_field("providerId", FieldDescriptor::new(FieldType::String).required())
        .with_field(
            "userId",
            FieldDescriptor::new(FieldType::String)
                .required()
                .references("user", "id"),
        )
        .with_field("accessToken", FieldDescriptor::new(FieldType::String).optional())
        .with_field("refreshToken", FieldDescriptor::new(FieldType::String).optional())
        .with_field("idToken", FieldDescriptor::new(FieldType::String).optional())
        .with_field(
            "accessTokenExpiresAt",
            FieldDescriptor::new(FieldType::Date).optional(),
        )
        .with_field(
            "refreshTokenExpiresAt",
            FieldDescriptor::new(FieldType::Date).optional(),
        )
        .with_field("scope", FieldDescriptor::new(FieldType::String).optional());

    if options.email_and_password {
        table.add_field(
            "password",
            FieldDescriptor::new(FieldType::String).optional(),
        );
    }

    table
        .with_field("createdAt", FieldDescriptor::new(FieldType::Date).required())
        .with_field("updatedAt", FieldDescriptor::new(FieldType::Date).required())
}

fn verification_table() -> TableDescriptor {
    TableDescriptor::new("verification")
        .with_field("identifier", FieldDescriptor::new(FieldType::String).required())
        .with_field("value", FieldDescriptor::new(FieldType::String).required())
        .with_field("expiresAt", FieldDescriptor::new(FieldType::Date).required())
        .with_field("createdAt", FieldDescriptor::new(FieldType::Date).optional())
        .with_field("updatedAt", FieldDescriptor::new(FieldType::Date).optional())
}
