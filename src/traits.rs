//! Core traits for the parser abstraction layer.
//!
//! These traits define the seam between the measurement core and the
//! syntax-tree collaborator: the core only ever sees `Node` handles and
//! the operations declared here.

use std::path::Path;

use crate::lang::Lang;
use crate::node::Node;

/// Language information provider trait.
///
/// Provides static language metadata for parser implementations.
pub trait LanguageInfo {
    /// Get the language enumeration value
    fn get_lang() -> Lang;

    /// Get the language name as a string
    fn get_lang_name() -> &'static str;
}

/// Core parser trait defining the interface for all language parsers.
///
/// This trait abstracts over tree-sitter based parsers for different
/// languages, providing a uniform interface for parsing and analysis.
pub trait ParserTrait: Sized {
    /// Create a new parser instance for the given code
    fn new(code: Vec<u8>, path: &Path) -> anyhow::Result<Self>;

    /// Get the language this parser handles
    fn get_language(&self) -> Lang;

    /// Get the root node of the parsed tree
    fn get_root(&self) -> Node;

    /// Get the source code as bytes
    fn get_code(&self) -> &[u8];

    /// Get a text slice from the source code
    fn get_text<'a>(&'a self, node: &Node<'a>) -> Option<&'a str> {
        node.utf8_text(self.get_code())
    }
}

/// Search operations on AST nodes.
pub(crate) trait Search<'a> {
    /// Execute an action on every node in the subtree, depth-first
    fn act_on_node(&self, action: &mut dyn FnMut(&Node<'a>));

    /// Find the first node matching the predicate in depth-first order
    fn first_occurrence(&self, pred: &mut dyn FnMut(&Node<'a>) -> bool) -> Option<Node<'a>>;
}
