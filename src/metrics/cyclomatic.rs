//! Cyclomatic Complexity Counting
//!
//! McCabe's cyclomatic complexity: one baseline path plus one per
//! decision-introducing construct. The exact decision sets per grammar
//! live in [`languages`](crate::languages); an exclusion predicate lets
//! callers filter individual nodes out of the count.

use crate::checker::{DefaultNodeChecker, NodeChecker};
use crate::lang::Lang;
use crate::node::Node;

/// The baseline exclusion predicate: nothing is excluded, every decision
/// point in the subtree counts.
pub fn no_exclusions(_node: &Node) -> bool {
    false
}

/// Computes the cyclomatic complexity of a method subtree.
///
/// Starts at 1 and adds 1 for each decision point found anywhere in the
/// subtree for which `excluded` returns false. The descent deliberately
/// continues through nested method bodies: a nested function's decision
/// points belong to the enclosing method's count, mirroring the
/// span-inclusive line-counting policy.
///
/// Always returns >= 1.
pub fn compute_complexity(node: &Node, lang: Lang, excluded: &dyn Fn(&Node) -> bool) -> u64 {
    let mut count = 1;
    descend(node, lang, excluded, &mut count);
    count
}

fn descend(node: &Node, lang: Lang, excluded: &dyn Fn(&Node) -> bool, count: &mut u64) {
    for child in node.children() {
        if DefaultNodeChecker::is_decision_point(&child, lang) && !excluded(&child) {
            *count += 1;
        }
        descend(&child, lang, excluded, count);
    }
}
