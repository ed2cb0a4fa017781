//! Per-Method Software Quality Scoring
//!
//! A source-code metrics computation core: given the syntax structure of
//! a method (or equivalent function-like unit), compute composite
//! quality scores (a Maintainability Index and a Programmer Efficiency
//! score) from three lower-level measurements: cyclomatic complexity,
//! lines of code, and Halstead software-science metrics.
//!
//! The measurement pipeline is a single pass over a method's syntax
//! tree that scopes lines and complexity to exactly one top-level
//! method while recursing through nested and anonymous function-like
//! constructs, tallies Halstead operator/operand statistics from
//! token-level structure, and combines everything through nonlinear
//! composite formulas with explicit zero/epsilon guards.
//!
//! # Quick Start
//!
//! ```
//! use method_quality::{score_methods, Lang, MaintainabilityIndex, Parser, ParserTrait, RustLanguage};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let code = r#"
//! fn classify(x: i32) -> &'static str {
//!     if x > 0 { "positive" } else { "non-positive" }
//! }
//! "#;
//!
//! let parser = Parser::<RustLanguage>::new(code.as_bytes().to_vec(), Path::new("classify.rs"))?;
//! let scores = score_methods(
//!     parser.get_root(),
//!     parser.get_code(),
//!     Lang::Rust,
//!     MaintainabilityIndex,
//! );
//!
//! assert_eq!(scores.len(), 1);
//! assert_eq!(scores[0].method.name.as_deref(), Some("classify"));
//! assert!(scores[0].value > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ## Core Abstractions
//! - [`lang`] - Language identification and grammar access
//! - [`node`] - AST node abstraction over tree-sitter
//! - [`parser`] - Generic parser interface
//! - [`traits`] - Core trait definitions
//!
//! ## Classification
//! - [`languages`] - Per-grammar classification tables
//! - [`checker`] - Method-likeness, abstractness, decision points
//! - [`getter`] - Method names, Halstead token classes
//!
//! ## Measurement & Scoring
//! - [`metrics`] - LOC, cyclomatic, Halstead, and the two scorers
//! - [`visitor`] - Depth-tracking orchestrator and result sink

// ============================================================================
// Core Abstractions
// ============================================================================

pub mod lang;
pub mod languages;
pub mod node;
pub mod parser;
pub mod traits;

// ============================================================================
// Classification
// ============================================================================

pub mod checker;
pub mod getter;

// ============================================================================
// Measurement & Scoring
// ============================================================================

pub mod metrics;
pub mod visitor;

// Re-export core abstractions
pub use lang::Lang;
pub use languages::{JavaLanguage, RustLanguage, TsxLanguage, TypeScriptLanguage};
pub use node::Node;
pub use parser::Parser;
pub use traits::{LanguageInfo, ParserTrait};

// Re-export classification types
pub use checker::{DefaultNodeChecker, NodeChecker};
pub use getter::{DefaultNodeGetter, HalsteadType, NodeGetter};

// Re-export measurement and scoring types
pub use metrics::{
    collect_halstead, compute_complexity, count_lines, maintainability_index, no_exclusions,
    programmer_efficiency, HalsteadCollector, HalsteadStats, MaintainabilityIndex,
    MethodMeasures, MethodScorer, ProgrammerEfficiency, ProgrammerStatus,
};
pub use visitor::{score_methods, MethodMetricVisitor, MethodScore, MethodUnit, MetricSink};
