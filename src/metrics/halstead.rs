//! Halstead Software-Science Metrics
//!
//! Maurice Halstead's metrics suite, derived from operator/operand token
//! statistics. The collector tallies distinct and total counts during a
//! subtree walk; the stats struct derives volume, difficulty, effort and
//! program time from the four raw counts.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::getter::{DefaultNodeGetter, HalsteadType, NodeGetter};
use crate::lang::Lang;
use crate::node::Node;
use crate::traits::Search;

/// The Stroud number: mental discriminations per second, the empirical
/// divisor turning Halstead effort into program time in seconds.
const STROUD: f64 = 18.0;

/// Halstead metrics statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HalsteadStats {
    /// Number of distinct operators (η1)
    u_operators: u64,
    /// Total number of operators (N1)
    operators: u64,
    /// Number of distinct operands (η2)
    u_operands: u64,
    /// Total number of operands (N2)
    operands: u64,
}

impl fmt::Display for HalsteadStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "n1: {}, N1: {}, n2: {}, N2: {}, length: {}, vocabulary: {}, volume: {}, difficulty: {}, effort: {}, time: {}",
            self.u_operators(),
            self.operators(),
            self.u_operands(),
            self.operands(),
            self.length(),
            self.vocabulary(),
            self.volume(),
            self.difficulty(),
            self.effort(),
            self.time(),
        )
    }
}

impl HalsteadStats {
    /// Creates a new HalsteadStats instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates HalsteadStats from operator and operand counts
    pub fn from_counts(u_operators: u64, operators: u64, u_operands: u64, operands: u64) -> Self {
        Self {
            u_operators,
            operators,
            u_operands,
            operands,
        }
    }

    /// Returns η1, the number of distinct operators
    pub fn u_operators(&self) -> f64 {
        self.u_operators as f64
    }

    /// Returns N1, the number of total operators
    pub fn operators(&self) -> f64 {
        self.operators as f64
    }

    /// Returns η2, the number of distinct operands
    pub fn u_operands(&self) -> f64 {
        self.u_operands as f64
    }

    /// Returns N2, the number of total operands
    pub fn operands(&self) -> f64 {
        self.operands as f64
    }

    /// Returns the program length (N = N1 + N2)
    pub fn length(&self) -> f64 {
        self.operators() + self.operands()
    }

    /// Returns the program vocabulary (η = η1 + η2)
    pub fn vocabulary(&self) -> f64 {
        self.u_operators() + self.u_operands()
    }

    /// Returns the calculated estimated program length
    pub fn estimated_program_length(&self) -> f64 {
        if self.u_operators() == 0.0 || self.u_operands() == 0.0 {
            return 0.0;
        }
        self.u_operators() * self.u_operators().log2()
            + self.u_operands() * self.u_operands().log2()
    }

    /// Returns the purity ratio
    pub fn purity_ratio(&self) -> f64 {
        let length = self.length();
        if length == 0.0 {
            return 0.0;
        }
        self.estimated_program_length() / length
    }

    /// Returns the program volume (V = N * log2(η))
    ///
    /// Unit of measurement: bits. A vocabulary of one token or fewer has
    /// `log2(η) <= 0`; the volume is clamped to 0 in that range so
    /// downstream formulas never see a zero-or-negative volume from a
    /// degenerate vocabulary.
    pub fn volume(&self) -> f64 {
        let vocabulary = self.vocabulary();
        if vocabulary <= 1.0 {
            return 0.0;
        }
        self.length() * vocabulary.log2()
    }

    /// Returns the estimated difficulty to program (D = (η1/2) * (N2/η2)),
    /// 0 when there are no operands.
    pub fn difficulty(&self) -> f64 {
        if self.u_operands() == 0.0 {
            return 0.0;
        }
        self.u_operators() / 2.0 * self.operands() / self.u_operands()
    }

    /// Returns the estimated program level (L = 1/D)
    pub fn level(&self) -> f64 {
        let difficulty = self.difficulty();
        if difficulty == 0.0 {
            return 0.0;
        }
        1.0 / difficulty
    }

    /// Returns the estimated effort required to program (E = D * V)
    pub fn effort(&self) -> f64 {
        self.difficulty() * self.volume()
    }

    /// Returns the estimated time required to program (T = E/18)
    ///
    /// Unit of measurement: seconds. Callers dividing by 60 convert to
    /// minutes.
    pub fn time(&self) -> f64 {
        self.effort() / STROUD
    }

    /// Returns the estimated number of delivered bugs (B = E^(2/3) / 3000)
    pub fn bugs(&self) -> f64 {
        self.effort().powf(2.0 / 3.0) / 3000.0
    }
}

/// Collector tallying operators and operands during a subtree walk.
///
/// Operators are keyed by node kind, operands by their source text; the
/// borrowed keys keep the walk allocation-free.
#[derive(Debug, Default)]
pub struct HalsteadCollector<'a> {
    operators: HashMap<&'a str, u64>,
    operands: HashMap<&'a str, u64>,
}

impl<'a> HalsteadCollector<'a> {
    /// Creates a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operator occurrence
    pub fn add_operator(&mut self, op: &'a str) {
        *self.operators.entry(op).or_insert(0) += 1;
    }

    /// Adds an operand occurrence
    pub fn add_operand(&mut self, operand: &'a str) {
        *self.operands.entry(operand).or_insert(0) += 1;
    }

    /// Finalizes and returns the Halstead statistics
    pub fn finalize(&self) -> HalsteadStats {
        HalsteadStats {
            u_operators: self.operators.len() as u64,
            operators: self.operators.values().sum::<u64>(),
            u_operands: self.operands.len() as u64,
            operands: self.operands.values().sum::<u64>(),
        }
    }

    /// Merges another collector into this one
    pub fn merge(&mut self, other: &HalsteadCollector<'a>) {
        for (k, v) in other.operators.iter() {
            *self.operators.entry(*k).or_insert(0) += v;
        }
        for (k, v) in other.operands.iter() {
            *self.operands.entry(*k).or_insert(0) += v;
        }
    }
}

/// Walks a method subtree and tallies every token node into Halstead
/// statistics.
///
/// Classification is by syntactic category via
/// [`NodeGetter::halstead_type`]: keywords, punctuation operators and
/// call/member-access tokens count as operators; identifiers and
/// literals count as operands. A subtree with zero operators or zero
/// operands produces stats whose volume and time are 0, not an error.
pub fn collect_halstead<'a>(node: &Node<'a>, code: &'a [u8], lang: Lang) -> HalsteadStats {
    let mut collector = HalsteadCollector::new();
    node.act_on_node(&mut |n| match DefaultNodeGetter::halstead_type(n, lang) {
        HalsteadType::Operator => collector.add_operator(n.kind()),
        HalsteadType::Operand => {
            if let Some(text) = n.utf8_text(code) {
                collector.add_operand(text);
            }
        }
        HalsteadType::Unknown => {}
    });
    collector.finalize()
}
