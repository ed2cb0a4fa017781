//! Node getter trait and implementations.
//!
//! The `NodeGetter` trait extracts information from AST nodes: method
//! names for result identity, and the Halstead operator/operand
//! classification of token nodes.

use crate::lang::Lang;
use crate::languages::{java, rust, typescript};
use crate::node::Node;

/// Halstead token classification.
///
/// Keywords, punctuation operators and call/member-access tokens are
/// operators; identifiers and literals are operands. Structural nodes
/// carry no token of their own and classify as `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HalsteadType {
    /// An operator token
    Operator,
    /// An operand token
    Operand,
    /// Not a Halstead-relevant token
    Unknown,
}

/// Node information extraction for the per-method measurement pipeline.
pub trait NodeGetter {
    /// Get the declared name of a method-like node, if it has one.
    /// Anonymous constructs (closures, lambdas, arrow functions) return
    /// `None`.
    fn method_name<'a>(node: &Node<'a>, code: &'a [u8], lang: Lang) -> Option<&'a str>;

    /// Classify a node for the Halstead operator/operand tally.
    fn halstead_type(node: &Node, lang: Lang) -> HalsteadType;
}

/// Default implementation of NodeGetter.
pub struct DefaultNodeGetter;

impl NodeGetter for DefaultNodeGetter {
    fn method_name<'a>(node: &Node<'a>, code: &'a [u8], lang: Lang) -> Option<&'a str> {
        match lang {
            Lang::Rust => rust::method_name(node, code),
            Lang::TypeScript | Lang::Tsx => typescript::method_name(node, code),
            Lang::Java => java::method_name(node, code),
        }
    }

    fn halstead_type(node: &Node, lang: Lang) -> HalsteadType {
        match lang {
            Lang::Rust => rust::halstead_type(node),
            Lang::TypeScript | Lang::Tsx => typescript::halstead_type(node),
            Lang::Java => java::halstead_type(node),
        }
    }
}
