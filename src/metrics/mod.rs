//! Per-Method Measurement and Scoring
//!
//! The three lower-level measurements the composite scores are built
//! from, plus the scorers themselves:
//!
//! - **LOC**: span-inclusive line counting ([`loc`])
//! - **Cyclomatic complexity**: baseline-1 decision counting with a
//!   caller-supplied exclusion predicate ([`cyclomatic`])
//! - **Halstead**: operator/operand token statistics, volume and
//!   program time ([`halstead`])
//! - **Maintainability Index**: composite 0..100(ish) score, higher is
//!   more maintainable ([`mi`])
//! - **Programmer Efficiency**: composite 0..100 score from complexity,
//!   LOC, a status tier and program time ([`efficiency`])

pub mod cyclomatic;
pub mod efficiency;
pub mod halstead;
pub mod loc;
pub mod mi;

pub use cyclomatic::{compute_complexity, no_exclusions};
pub use efficiency::{programmer_efficiency, ProgrammerEfficiency, ProgrammerStatus};
pub use halstead::{collect_halstead, HalsteadCollector, HalsteadStats};
pub use loc::count_lines;
pub use mi::{maintainability_index, MaintainabilityIndex};

use serde::{Deserialize, Serialize};

/// The raw measurements of one top-level method, as handed to a scorer:
/// cyclomatic complexity (>= 1), the method's span-inclusive line count,
/// and the Halstead statistics of its subtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodMeasures {
    /// Cyclomatic complexity of the method subtree
    pub complexity: u64,
    /// Lines spanned by the method
    pub lines: usize,
    /// Halstead statistics of the method subtree
    pub halstead: HalsteadStats,
}

/// A composite scoring formula over one method's measurements.
///
/// Implementations are pure: the same measurements always produce the
/// same score, and every score is finite for the non-negative inputs
/// the counters produce.
pub trait MethodScorer {
    /// Short identifier used in log lines
    fn name(&self) -> &'static str;

    /// Computes the composite score for one method
    fn score(&self, measures: &MethodMeasures) -> f64;
}
