//! TypeScript and TSX grammar tables.
//!
//! The two grammars share node kinds, so TSX reuses every table here.

use crate::getter::HalsteadType;
use crate::lang::Lang;
use crate::node::Node;
use crate::traits::LanguageInfo;

/// Marker type binding the TypeScript grammar to [`Lang::TypeScript`].
pub struct TypeScriptLanguage;

impl LanguageInfo for TypeScriptLanguage {
    fn get_lang() -> Lang {
        Lang::TypeScript
    }

    fn get_lang_name() -> &'static str {
        "typescript"
    }
}

/// Marker type binding the TSX grammar to [`Lang::Tsx`].
pub struct TsxLanguage;

impl LanguageInfo for TsxLanguage {
    fn get_lang() -> Lang {
        Lang::Tsx
    }

    fn get_lang_name() -> &'static str {
        "tsx"
    }
}

/// Method-like constructs, named and anonymous. Signature-only kinds
/// (interface members, `abstract` methods, overload/ambient signatures)
/// are included so the abstractness rule can skip them.
pub(crate) fn is_method(node: &Node) -> bool {
    matches!(
        node.kind(),
        "function_declaration"
            | "generator_function_declaration"
            | "method_definition"
            | "function_expression"
            | "generator_function"
            | "arrow_function"
            | "abstract_method_signature"
            | "method_signature"
            | "function_signature"
    )
}

pub(crate) fn is_abstract(node: &Node) -> bool {
    matches!(
        node.kind(),
        "abstract_method_signature" | "method_signature" | "function_signature"
    )
}

pub(crate) fn is_decision_point(node: &Node) -> bool {
    matches!(
        node.kind(),
        "if_statement"
            | "while_statement"
            | "do_statement"
            | "for_statement"
            | "for_in_statement"
            | "switch_case"
            | "catch_clause"
            | "ternary_expression"
            | "&&"
            | "||"
    )
}

pub(crate) fn halstead_type(node: &Node) -> HalsteadType {
    match node.kind() {
        "(" | "{" | "[" | "=>" | "+" | "-" | "*" | "/" | "%" | "**" | "==" | "===" | "!="
        | "!==" | "<" | ">" | "<=" | ">=" | "&&" | "||" | "!" | "&" | "|" | "^" | "~" | "<<"
        | ">>" | ">>>" | "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "&&=" | "||=" | "??=" | "??"
        | "?." | "." | "," | ";" | ":" | "?" | "..." | "typeof" | "instanceof" | "new"
        | "delete" | "void" | "in" | "of" | "as" | "if" | "else" | "for" | "while" | "do"
        | "switch" | "case" | "default" | "return" | "break" | "continue" | "throw" | "try"
        | "catch" | "finally" | "function" | "const" | "let" | "var" | "class" | "extends"
        | "async" | "await" | "yield" | "import" | "export" => HalsteadType::Operator,
        "identifier" | "property_identifier" | "shorthand_property_identifier"
        | "shorthand_property_identifier_pattern" | "type_identifier" | "number" | "string"
        | "template_string" | "regex" | "true" | "false" | "null" | "undefined" | "this"
        | "super" => HalsteadType::Operand,
        _ => HalsteadType::Unknown,
    }
}

pub(crate) fn method_name<'a>(node: &Node<'a>, code: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name("name")?.utf8_text(code)
}
