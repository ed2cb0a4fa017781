//! Maintainability Index Scoring
//!
//! A composite score combining Halstead volume, cyclomatic complexity
//! and lines of code into a single maintainability figure; higher is
//! more maintainable.

use super::{MethodMeasures, MethodScorer};

/// Additive guard keeping the logarithms defined when volume or line
/// count is 0.
const LN_EPSILON: f64 = 1e-6;

/// Computes the maintainability index of one method.
///
/// ```text
/// MI = max(0, (171 - 5.2*ln(V + 1e-6)
///                  - 0.23*CC
///                  - 16.2*ln(LOC + 1e-6)) * 100 / 171)
/// ```
///
/// The result is clamped to be non-negative. The upper bound is not
/// clamped: degenerate inputs (a zero volume makes `ln` large and
/// negative) can push the score above 100.
pub fn maintainability_index(volume: f64, complexity: u64, lines: usize) -> f64 {
    let raw = 171.0
        - 5.2 * (volume + LN_EPSILON).ln()
        - 0.23 * complexity as f64
        - 16.2 * (lines as f64 + LN_EPSILON).ln();
    (raw * 100.0 / 171.0).max(0.0)
}

/// [`MethodScorer`] computing the maintainability index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintainabilityIndex;

impl MethodScorer for MaintainabilityIndex {
    fn name(&self) -> &'static str {
        "maintainability_index"
    }

    fn score(&self, measures: &MethodMeasures) -> f64 {
        maintainability_index(measures.halstead.volume(), measures.complexity, measures.lines)
    }
}
