//! Utilities for auth-schema-gen
//!
//! This module provides utility functions used across the library.

pub mod logging;
pub mod naming;

// Re-export key utility functions
pub use naming::{to_export_name, to_storage_case};
