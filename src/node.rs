//! AST node abstraction layer.
//!
//! A thin wrapper around tree-sitter's `Node` type, offering the traversal
//! and span queries the measurement pipeline needs without tying the rest
//! of the crate to a concrete tree representation.

use tree_sitter::Node as TSNode;
use tree_sitter::TreeCursor;

use crate::traits::Search;

/// An AST node wrapper providing convenient tree traversal methods.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a>(pub(crate) TSNode<'a>);

impl<'a> Node<'a> {
    /// Create a new Node from a tree-sitter node
    pub fn new(node: TSNode<'a>) -> Self {
        Self(node)
    }

    /// Checks if a node represents a syntax error or contains any syntax
    /// errors anywhere within it.
    pub fn has_error(&self) -> bool {
        self.0.has_error()
    }

    /// Get the node kind as a string
    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }

    /// Get the UTF-8 text content of this node
    pub fn utf8_text(&self, data: &'a [u8]) -> Option<&'a str> {
        self.0.utf8_text(data).ok()
    }

    /// Get the start byte offset
    pub fn start_byte(&self) -> usize {
        self.0.start_byte()
    }

    /// Get the end byte offset
    pub fn end_byte(&self) -> usize {
        self.0.end_byte()
    }

    /// Get the start row (0-indexed)
    pub fn start_row(&self) -> usize {
        self.0.start_position().row
    }

    /// Get the end row (0-indexed)
    pub fn end_row(&self) -> usize {
        self.0.end_position().row
    }

    /// Get the parent node
    pub fn parent(&self) -> Option<Node<'a>> {
        self.0.parent().map(Node)
    }

    /// Get a child by field name
    pub fn child_by_field_name(&self, name: &str) -> Option<Node<'a>> {
        self.0.child_by_field_name(name).map(Node)
    }

    /// Get a child by index
    pub fn child(&self, pos: usize) -> Option<Node<'a>> {
        self.0.child(pos).map(Node)
    }

    /// Get the number of children
    pub fn child_count(&self) -> usize {
        self.0.child_count()
    }

    /// Get an iterator over all children, named and anonymous alike.
    ///
    /// Anonymous children matter here: operator tokens such as `&&` are
    /// unnamed nodes, and both the complexity and Halstead passes classify
    /// them by kind.
    pub fn children(&self) -> impl ExactSizeIterator<Item = Node<'a>> + use<'a> {
        let mut cursor = self.cursor();
        cursor.goto_first_child();
        (0..self.child_count()).map(move |_| {
            let result = cursor.node();
            cursor.goto_next_sibling();
            result
        })
    }

    /// Get a cursor for tree traversal
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor(self.0.walk())
    }
}

/// A tree cursor for manual tree traversal.
#[derive(Clone)]
pub struct Cursor<'a>(pub(crate) TreeCursor<'a>);

impl<'a> Cursor<'a> {
    /// Reset cursor to a specific node
    pub fn reset(&mut self, node: &Node<'a>) {
        self.0.reset(node.0);
    }

    /// Move cursor to next sibling
    pub fn goto_next_sibling(&mut self) -> bool {
        self.0.goto_next_sibling()
    }

    /// Move cursor to first child
    pub fn goto_first_child(&mut self) -> bool {
        self.0.goto_first_child()
    }

    /// Get the current node
    pub fn node(&self) -> Node<'a> {
        Node(self.0.node())
    }
}

impl<'a> Search<'a> for Node<'a> {
    fn act_on_node(&self, action: &mut dyn FnMut(&Node<'a>)) {
        let mut cursor = self.cursor();
        let mut stack = Vec::new();
        let mut children = Vec::new();

        stack.push(*self);

        while let Some(node) = stack.pop() {
            action(&node);
            cursor.reset(&node);
            if cursor.goto_first_child() {
                loop {
                    children.push(cursor.node());
                    if !cursor.goto_next_sibling() {
                        break;
                    }
                }
                for child in children.drain(..).rev() {
                    stack.push(child);
                }
            }
        }
    }

    fn first_occurrence(&self, pred: &mut dyn FnMut(&Node<'a>) -> bool) -> Option<Node<'a>> {
        let mut cursor = self.cursor();
        let mut stack = Vec::new();
        let mut children = Vec::new();

        stack.push(*self);

        while let Some(node) = stack.pop() {
            if pred(&node) {
                return Some(node);
            }
            cursor.reset(&node);
            if cursor.goto_first_child() {
                loop {
                    children.push(cursor.node());
                    if !cursor.goto_next_sibling() {
                        break;
                    }
                }
                for child in children.drain(..).rev() {
                    stack.push(child);
                }
            }
        }

        None
    }
}
