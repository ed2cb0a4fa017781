//! Line counting over node spans.

use crate::node::Node;

/// Counts the source lines spanned by a node's own text range, start and
/// end lines inclusive.
///
/// The count is purely span-based: a nested method's lines are included
/// in the enclosing method's count because they lie within its span. A
/// single-line node counts as 1; a zero-span node (start and end rows
/// coincide) also counts as 1, the inclusive-span convention applied
/// consistently.
pub fn count_lines(node: &Node) -> usize {
    node.end_row().saturating_sub(node.start_row()) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{DefaultNodeChecker, NodeChecker};
    use crate::languages::RustLanguage;
    use crate::parser::Parser;
    use crate::traits::{ParserTrait, Search};
    use crate::Lang;
    use std::path::Path;

    fn first_function<'a>(root: &Node<'a>) -> Node<'a> {
        root.first_occurrence(&mut |n| DefaultNodeChecker::is_method(n, Lang::Rust))
            .unwrap()
    }

    #[test]
    fn test_single_line_method() {
        let code = b"fn f() { 1 + 1; }".to_vec();
        let parser = Parser::<RustLanguage>::new(code, Path::new("t.rs")).unwrap();
        assert_eq!(count_lines(&first_function(&parser.get_root())), 1);
    }

    #[test]
    fn test_multi_line_method() {
        let code = b"fn f() {\n    let x = 1;\n    let y = 2;\n}".to_vec();
        let parser = Parser::<RustLanguage>::new(code, Path::new("t.rs")).unwrap();
        assert_eq!(count_lines(&first_function(&parser.get_root())), 4);
    }

    #[test]
    fn test_nested_function_lines_are_included() {
        let code = b"fn outer() {\n    fn inner() {\n        let x = 1;\n    }\n    inner();\n}"
            .to_vec();
        let parser = Parser::<RustLanguage>::new(code, Path::new("t.rs")).unwrap();
        let root = parser.get_root();

        let outer = first_function(&root);
        assert_eq!(count_lines(&outer), 6);

        let inner = root
            .first_occurrence(&mut |n| {
                n.kind() == "function_item" && n.start_row() > outer.start_row()
            })
            .unwrap();
        assert_eq!(count_lines(&inner), 3);
    }
}
