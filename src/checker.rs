//! Node checking trait and implementations.
//!
//! The `NodeChecker` trait classifies AST nodes for the measurement
//! pipeline: which nodes open a method-like scope, which of those are
//! abstract (no body, nothing to measure), and which introduce a new
//! path through the control flow.

use crate::lang::Lang;
use crate::languages::{java, rust, typescript};
use crate::node::Node;

/// Node classification for the per-method measurement pipeline.
///
/// Each language provides its own answer through the tables in
/// [`languages`](crate::languages); callers go through this trait so the
/// orchestrator and counters stay grammar-agnostic.
pub trait NodeChecker {
    /// Check if a node opens a method-like scope (function, method,
    /// constructor, or a named or anonymous closure/lambda).
    fn is_method(node: &Node, lang: Lang) -> bool;

    /// Check if a method-like node is abstract, i.e. declares no body.
    /// Abstract methods are skipped entirely by the orchestrator.
    fn is_abstract(node: &Node, lang: Lang) -> bool;

    /// Check if a node is a decision point for cyclomatic complexity
    /// (branch, loop, case label, short-circuit operator, catch clause,
    /// ternary).
    fn is_decision_point(node: &Node, lang: Lang) -> bool;

    /// Check if a node contains syntax errors.
    fn is_error(node: &Node) -> bool {
        node.has_error()
    }
}

/// Default implementation of NodeChecker.
pub struct DefaultNodeChecker;

impl NodeChecker for DefaultNodeChecker {
    fn is_method(node: &Node, lang: Lang) -> bool {
        match lang {
            Lang::Rust => rust::is_method(node),
            Lang::TypeScript | Lang::Tsx => typescript::is_method(node),
            Lang::Java => java::is_method(node),
        }
    }

    fn is_abstract(node: &Node, lang: Lang) -> bool {
        match lang {
            Lang::Rust => rust::is_abstract(node),
            Lang::TypeScript | Lang::Tsx => typescript::is_abstract(node),
            Lang::Java => java::is_abstract(node),
        }
    }

    fn is_decision_point(node: &Node, lang: Lang) -> bool {
        match lang {
            Lang::Rust => rust::is_decision_point(node),
            Lang::TypeScript | Lang::Tsx => typescript::is_decision_point(node),
            Lang::Java => java::is_decision_point(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::{JavaLanguage, RustLanguage};
    use crate::parser::Parser;
    use crate::traits::{ParserTrait, Search};
    use std::path::Path;

    fn first_method<'a>(root: &Node<'a>, lang: Lang) -> Node<'a> {
        root.first_occurrence(&mut |n| DefaultNodeChecker::is_method(n, lang))
            .expect("no method-like node found")
    }

    #[test]
    fn test_rust_function_is_method() {
        let parser =
            Parser::<RustLanguage>::new(b"fn f() {}".to_vec(), Path::new("t.rs")).unwrap();
        let method = first_method(&parser.get_root(), Lang::Rust);
        assert_eq!(method.kind(), "function_item");
        assert!(!DefaultNodeChecker::is_abstract(&method, Lang::Rust));
    }

    #[test]
    fn test_rust_trait_signature_is_abstract() {
        let code = b"trait T { fn f(&self); }".to_vec();
        let parser = Parser::<RustLanguage>::new(code, Path::new("t.rs")).unwrap();
        let method = first_method(&parser.get_root(), Lang::Rust);
        assert_eq!(method.kind(), "function_signature_item");
        assert!(DefaultNodeChecker::is_abstract(&method, Lang::Rust));
    }

    #[test]
    fn test_java_abstract_method() {
        let code = b"abstract class A { abstract void f(); void g() {} }".to_vec();
        let parser = Parser::<JavaLanguage>::new(code, Path::new("A.java")).unwrap();
        let root = parser.get_root();

        let mut methods = Vec::new();
        root.act_on_node(&mut |n| {
            if DefaultNodeChecker::is_method(n, Lang::Java) {
                methods.push(DefaultNodeChecker::is_abstract(n, Lang::Java));
            }
        });
        assert_eq!(methods, vec![true, false]);
    }
}
