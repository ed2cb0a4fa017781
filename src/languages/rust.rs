//! Rust grammar tables.

use crate::getter::HalsteadType;
use crate::lang::Lang;
use crate::node::Node;
use crate::traits::LanguageInfo;

/// Marker type binding the Rust tree-sitter grammar to [`Lang::Rust`].
pub struct RustLanguage;

impl LanguageInfo for RustLanguage {
    fn get_lang() -> Lang {
        Lang::Rust
    }

    fn get_lang_name() -> &'static str {
        "rust"
    }
}

/// Method-like constructs: named functions, trait/extern signatures and
/// closures. Signatures have no body and are reported as abstract.
pub(crate) fn is_method(node: &Node) -> bool {
    matches!(
        node.kind(),
        "function_item" | "function_signature_item" | "closure_expression"
    )
}

/// A `function_signature_item` (trait method without a default body, or
/// an `extern` declaration) has nothing to measure.
pub(crate) fn is_abstract(node: &Node) -> bool {
    node.kind() == "function_signature_item"
}

pub(crate) fn is_decision_point(node: &Node) -> bool {
    matches!(
        node.kind(),
        "if_expression"
            | "while_expression"
            | "for_expression"
            | "loop_expression"
            | "match_arm"
            | "try_expression"
            | "&&"
            | "||"
    )
}

pub(crate) fn halstead_type(node: &Node) -> HalsteadType {
    let kind = node.kind();

    // `||` doubles as the empty closure parameter list; only the binary
    // form is an operator.
    if kind == "||" || kind == "/" {
        if let Some(parent) = node.parent() {
            if parent.kind() == "binary_expression" {
                return HalsteadType::Operator;
            }
        }
        return HalsteadType::Unknown;
    }

    // `!` inside a doc comment is a marker token, not negation.
    if kind == "!" {
        if let Some(parent) = node.parent() {
            if matches!(parent.kind(), "line_comment" | "block_comment") {
                return HalsteadType::Unknown;
            }
        }
        return HalsteadType::Operator;
    }

    match kind {
        "(" | "{" | "[" | "=>" | "+" | "*" | "async" | "await" | "break" | "continue" | "for"
        | "if" | "else" | "let" | "loop" | "match" | "return" | "unsafe" | "while" | "=" | ","
        | "->" | "?" | "<" | ">" | "&" | "mut" | ".." | "..=" | "-" | "&&" | "|" | "^" | "=="
        | "!=" | "<=" | ">=" | "<<" | ">>" | "%" | "+=" | "-=" | "*=" | "/=" | "%=" | "&="
        | "|=" | "^=" | "<<=" | ">>=" | "move" | "." | "::" | "in" | "as" | "impl" | "dyn"
        | "ref" | "primitive_type" | "fn" | ";" => HalsteadType::Operator,
        "identifier" | "field_identifier" | "type_identifier" | "string_literal"
        | "raw_string_literal" | "integer_literal" | "float_literal" | "boolean_literal"
        | "char_literal" | "self" | "_" => HalsteadType::Operand,
        _ => HalsteadType::Unknown,
    }
}

pub(crate) fn method_name<'a>(node: &Node<'a>, code: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name("name")?.utf8_text(code)
}
