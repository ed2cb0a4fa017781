//! Per-Method Metric Orchestration
//!
//! [`MethodMetricVisitor`] walks a syntax tree once per metric, tracking
//! the nesting depth of method-like constructs so that each *top-level*
//! method is measured exactly once, with its nested and anonymous
//! function-like constructs contributing to the enclosing measurement
//! instead of splitting off. When a top-level method closes, the
//! visitor runs the complexity and Halstead counters over the method's
//! subtree, feeds a [`MethodScorer`], and emits the result to a
//! caller-supplied [`MetricSink`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checker::{DefaultNodeChecker, NodeChecker};
use crate::getter::{DefaultNodeGetter, NodeGetter};
use crate::lang::Lang;
use crate::metrics::{
    collect_halstead, compute_complexity, count_lines, no_exclusions, MethodMeasures, MethodScorer,
};
use crate::node::Node;

/// Identity of a measured method: its declared name (if any) and its
/// 1-indexed, inclusive line span. Plain data detached from the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodUnit {
    /// Declared name; `None` for anonymous constructs
    pub name: Option<String>,
    /// First line of the method (1-indexed)
    pub start_line: usize,
    /// Last line of the method (1-indexed)
    pub end_line: usize,
}

impl MethodUnit {
    fn from_node(node: &Node, code: &[u8], lang: Lang) -> Self {
        Self {
            name: DefaultNodeGetter::method_name(node, code, lang).map(str::to_owned),
            start_line: node.start_row() + 1,
            end_line: node.end_row() + 1,
        }
    }
}

impl fmt::Display for MethodUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (lines {}-{})",
            self.name.as_deref().unwrap_or("<anonymous>"),
            self.start_line,
            self.end_line
        )
    }
}

/// One emitted result: a method identity and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodScore {
    /// The measured method
    pub method: MethodUnit,
    /// The composite score value
    pub value: f64,
}

/// Receiver for emitted scores.
///
/// `post_metric` is called exactly once per non-abstract top-level
/// method per visitor run, synchronously, after that method's full
/// subtree (including nested methods) has been closed.
pub trait MetricSink {
    /// Receives one method's score
    fn post_metric(&mut self, method: &MethodUnit, value: f64);
}

impl MetricSink for Vec<MethodScore> {
    fn post_metric(&mut self, method: &MethodUnit, value: f64) {
        self.push(MethodScore {
            method: method.clone(),
            value,
        });
    }
}

/// Depth-tracking visitor computing one metric for every top-level
/// method in a tree.
///
/// The visitor owns the traversal state (`depth`, line accumulator) for
/// exactly one run over one tree; it is not synchronized and must not be
/// shared across threads. Separate trees can be measured in parallel by
/// independent visitor instances.
pub struct MethodMetricVisitor<'a, S: MethodScorer> {
    code: &'a [u8],
    lang: Lang,
    scorer: S,
    excluded: Box<dyn Fn(&Node) -> bool + 'a>,
    depth: usize,
    lines: usize,
}

impl<'a, S: MethodScorer> MethodMetricVisitor<'a, S> {
    /// Creates a visitor with the baseline exclusion predicate (nothing
    /// excluded from the complexity count).
    pub fn new(code: &'a [u8], lang: Lang, scorer: S) -> Self {
        Self::with_exclusions(code, lang, scorer, Box::new(no_exclusions))
    }

    /// Creates a visitor with a caller-supplied exclusion predicate for
    /// the complexity count.
    pub fn with_exclusions(
        code: &'a [u8],
        lang: Lang,
        scorer: S,
        excluded: Box<dyn Fn(&Node) -> bool + 'a>,
    ) -> Self {
        Self {
            code,
            lang,
            scorer,
            excluded,
            depth: 0,
            lines: 0,
        }
    }

    /// Walks the tree under `root` and emits one score per non-abstract
    /// top-level method to `sink`, in traversal order.
    pub fn measure(&mut self, root: Node<'a>, sink: &mut dyn MetricSink) {
        self.depth = 0;
        self.lines = 0;
        self.walk(root, sink);
    }

    fn walk(&mut self, node: Node<'a>, sink: &mut dyn MetricSink) {
        if !DefaultNodeChecker::is_method(&node, self.lang) {
            for child in node.children() {
                self.walk(child, sink);
            }
            return;
        }

        // Abstract methods have no body: not entered, not counted,
        // not scored.
        if DefaultNodeChecker::is_abstract(&node, self.lang) {
            return;
        }

        // The retained line count is the top-level method's own span;
        // nested constructs lie within it and must not overwrite it.
        if self.depth == 0 {
            self.lines = count_lines(&node);
        }
        self.depth += 1;
        for child in node.children() {
            self.walk(child, sink);
        }
        self.depth -= 1;

        if self.depth == 0 {
            let complexity = compute_complexity(&node, self.lang, self.excluded.as_ref());
            let halstead = collect_halstead(&node, self.code, self.lang);
            let measures = MethodMeasures {
                complexity,
                lines: self.lines,
                halstead,
            };
            let value = self.scorer.score(&measures);
            let method = MethodUnit::from_node(&node, self.code, self.lang);
            debug!(metric = self.scorer.name(), method = %method, value, "scored method");
            sink.post_metric(&method, value);
        }
    }
}

/// Measures every top-level method under `root` with a fresh visitor and
/// collects the scores in traversal order.
pub fn score_methods<'a, S: MethodScorer>(
    root: Node<'a>,
    code: &'a [u8],
    lang: Lang,
    scorer: S,
) -> Vec<MethodScore> {
    let mut scores: Vec<MethodScore> = Vec::new();
    let mut visitor = MethodMetricVisitor::new(code, lang, scorer);
    visitor.measure(root, &mut scores);
    scores
}
