//! Language-specific classification tables.
//!
//! One module per supported grammar. Each module provides:
//! - a `LanguageInfo` struct binding the grammar to the [`Lang`](crate::Lang) enum
//! - the method-like node kinds and the abstractness rule
//! - the cyclomatic decision-point set
//! - the Halstead operator/operand token classification
//!
//! The [`checker`](crate::checker) and [`getter`](crate::getter) modules
//! dispatch into these tables by language; nothing else in the crate
//! matches on grammar-specific node kinds.

pub mod java;
pub mod rust;
pub mod typescript;

pub use java::JavaLanguage;
pub use rust::RustLanguage;
pub use typescript::{TsxLanguage, TypeScriptLanguage};
