//! Java grammar tables.
//!
//! Java is the grammar where the abstractness rule is load-bearing:
//! interface methods and `abstract` methods parse as `method_declaration`
//! nodes with no `body` field.

use crate::getter::HalsteadType;
use crate::lang::Lang;
use crate::node::Node;
use crate::traits::LanguageInfo;

/// Marker type binding the Java grammar to [`Lang::Java`].
pub struct JavaLanguage;

impl LanguageInfo for JavaLanguage {
    fn get_lang() -> Lang {
        Lang::Java
    }

    fn get_lang_name() -> &'static str {
        "java"
    }
}

pub(crate) fn is_method(node: &Node) -> bool {
    matches!(
        node.kind(),
        "method_declaration" | "constructor_declaration" | "lambda_expression"
    )
}

/// Abstract and interface methods carry no `body` block.
pub(crate) fn is_abstract(node: &Node) -> bool {
    node.kind() == "method_declaration" && node.child_by_field_name("body").is_none()
}

pub(crate) fn is_decision_point(node: &Node) -> bool {
    matches!(
        node.kind(),
        "if_statement"
            | "while_statement"
            | "do_statement"
            | "for_statement"
            | "enhanced_for_statement"
            | "switch_label"
            | "catch_clause"
            | "ternary_expression"
            | "&&"
            | "||"
    )
}

pub(crate) fn halstead_type(node: &Node) -> HalsteadType {
    match node.kind() {
        "(" | "{" | "[" | "+" | "-" | "*" | "/" | "%" | "==" | "!=" | "<" | ">" | "<=" | ">="
        | "&&" | "||" | "!" | "&" | "|" | "^" | "~" | "<<" | ">>" | ">>>" | "=" | "+=" | "-="
        | "*=" | "/=" | "%=" | "&=" | "|=" | "^=" | "<<=" | ">>=" | ">>>=" | "++" | "--" | "."
        | "," | ";" | "::" | "?" | ":" | "->" | "@" | "new" | "if" | "else" | "for" | "while"
        | "do" | "switch" | "case" | "default" | "return" | "break" | "continue" | "try"
        | "catch" | "finally" | "throw" | "throws" | "instanceof" | "class" | "interface"
        | "enum" | "extends" | "implements" | "import" | "package" | "static" | "final"
        | "abstract" | "public" | "private" | "protected" | "synchronized" | "volatile"
        | "transient" | "native" | "void_type" => HalsteadType::Operator,
        "identifier" | "type_identifier" | "decimal_integer_literal" | "hex_integer_literal"
        | "octal_integer_literal" | "binary_integer_literal" | "decimal_floating_point_literal"
        | "hex_floating_point_literal" | "string_literal" | "character_literal" | "true"
        | "false" | "null_literal" | "this" | "super" => HalsteadType::Operand,
        _ => HalsteadType::Unknown,
    }
}

pub(crate) fn method_name<'a>(node: &Node<'a>, code: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name("name")?.utf8_text(code)
}
