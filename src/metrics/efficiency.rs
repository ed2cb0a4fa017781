//! Programmer Efficiency Scoring
//!
//! An estimate of a developer's efficiency producing a given method:
//!
//! ```text
//! E(prog) = sqrt(F(c) * LOC * P(s) * T(c) * E)
//! ```
//!
//! where `F(c)` is the function complexity (cyclomatic complexity / 5),
//! `LOC` the lines developed, `P(s)` the programmer's status tier,
//! `T(c)` the Halstead program time in minutes, and `E` the efficiency
//! constant (100). The result is clamped to [0, 100].

use serde::{Deserialize, Serialize};

use super::{MethodMeasures, MethodScorer};

const EFFICIENCY_CONSTANT: f64 = 100.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const COMPLEXITY_SCALE: f64 = 5.0;

/// Programmer status tier, the `P(s)` factor.
///
/// A seniority weighting on the efficiency estimate; the tiers map to
/// weights 1, 2 and 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgrammerStatus {
    /// Entry-level (weight 1)
    Fresher,
    /// Mid-level (weight 2), the default tier
    #[default]
    Intermediate,
    /// Senior (weight 3)
    Experienced,
}

impl ProgrammerStatus {
    /// The numeric weight of this tier in the efficiency product.
    pub fn weight(&self) -> f64 {
        match self {
            ProgrammerStatus::Fresher => 1.0,
            ProgrammerStatus::Intermediate => 2.0,
            ProgrammerStatus::Experienced => 3.0,
        }
    }
}

/// Computes the programmer efficiency score of one method.
///
/// `time_seconds` is the Halstead program time; it is converted to
/// minutes internally. All factors are non-negative, so the square root
/// is total and the result lands in [0, 100] via the final clamp. A
/// zero factor anywhere (empty body, zero lines) yields exactly 0.
pub fn programmer_efficiency(
    complexity: u64,
    lines: usize,
    time_seconds: f64,
    status: ProgrammerStatus,
) -> f64 {
    let function_complexity = complexity as f64 / COMPLEXITY_SCALE;
    let time_minutes = time_seconds / SECONDS_PER_MINUTE;
    let product = function_complexity
        * lines as f64
        * status.weight()
        * time_minutes
        * EFFICIENCY_CONSTANT;
    product.sqrt().min(100.0)
}

/// [`MethodScorer`] computing programmer efficiency at a configurable
/// status tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgrammerEfficiency {
    /// The status tier to score at
    pub status: ProgrammerStatus,
}

impl ProgrammerEfficiency {
    /// Creates a scorer for the given status tier.
    pub fn new(status: ProgrammerStatus) -> Self {
        Self { status }
    }
}

impl MethodScorer for ProgrammerEfficiency {
    fn name(&self) -> &'static str {
        "programmer_efficiency"
    }

    fn score(&self, measures: &MethodMeasures) -> f64 {
        programmer_efficiency(
            measures.complexity,
            measures.lines,
            measures.halstead.time(),
            self.status,
        )
    }
}
