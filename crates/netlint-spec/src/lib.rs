//! Configuration document model for netlint.
//!
//! Holds the typed representations of the three peer configuration documents
//! (network, accounts, customizations), the YAML loader for a configuration
//! directory, and the read-only query interface the validation rules resolve
//! cross-document references through.

pub mod loader;
pub mod query;
pub mod types;
