//! Programming language enumeration and metadata.
//!
//! This module defines the grammars the scoring pipeline understands and
//! provides utilities for language detection and grammar access.

use std::path::Path;
use tree_sitter::Language as TSLanguage;

/// The list of supported programming languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lang {
    /// The Rust programming language
    Rust,
    /// The TypeScript language
    TypeScript,
    /// TypeScript with JSX (TSX)
    Tsx,
    /// The Java language
    Java,
}

impl Lang {
    /// Return an iterator over all supported languages.
    ///
    /// # Examples
    ///
    /// ```
    /// use method_quality::Lang;
    ///
    /// for lang in Lang::into_enum_iter() {
    ///     println!("{:?}", lang);
    /// }
    /// ```
    pub fn into_enum_iter() -> impl Iterator<Item = Lang> {
        use Lang::*;
        [Rust, TypeScript, Tsx, Java].into_iter()
    }

    /// Returns the name of a language as a `&str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use method_quality::Lang;
    ///
    /// assert_eq!(Lang::Rust.get_name(), "rust");
    /// assert_eq!(Lang::Java.get_name(), "java");
    /// ```
    pub fn get_name(&self) -> &'static str {
        match self {
            Lang::Rust => "rust",
            Lang::TypeScript => "typescript",
            Lang::Tsx => "tsx",
            Lang::Java => "java",
        }
    }

    /// Returns the display name for a language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Lang::Rust => "Rust",
            Lang::TypeScript => "TypeScript",
            Lang::Tsx => "TSX",
            Lang::Java => "Java",
        }
    }

    /// Get the tree-sitter Language for this language.
    pub fn get_ts_language(&self) -> TSLanguage {
        match self {
            Lang::Rust => tree_sitter_rust::LANGUAGE.into(),
            Lang::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Lang::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Lang::Java => tree_sitter_java::LANGUAGE.into(),
        }
    }

    /// Get file extensions for this language.
    pub fn extensions(&self) -> &[&str] {
        match self {
            Lang::Rust => &["rs"],
            Lang::TypeScript => &["ts"],
            Lang::Tsx => &["tsx"],
            Lang::Java => &["java"],
        }
    }

    /// Detect language from file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use method_quality::Lang;
    /// use std::path::Path;
    ///
    /// assert_eq!(Lang::from_path(Path::new("test.rs")), Some(Lang::Rust));
    /// assert_eq!(Lang::from_path(Path::new("Test.java")), Some(Lang::Java));
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str().and_then(Self::from_extension)
    }

    /// Detect language from file extension string.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "rs" => Some(Lang::Rust),
            "ts" => Some(Lang::TypeScript),
            "tsx" => Some(Lang::Tsx),
            "java" => Some(Lang::Java),
            _ => None,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Lang::from_extension("rs"), Some(Lang::Rust));
        assert_eq!(Lang::from_extension("ts"), Some(Lang::TypeScript));
        assert_eq!(Lang::from_extension("tsx"), Some(Lang::Tsx));
        assert_eq!(Lang::from_extension("java"), Some(Lang::Java));
        assert_eq!(Lang::from_extension("unknown"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Lang::from_path(Path::new("test.rs")), Some(Lang::Rust));
        assert_eq!(Lang::from_path(Path::new("test.ts")), Some(Lang::TypeScript));
        assert_eq!(Lang::from_path(Path::new("Test.java")), Some(Lang::Java));
        assert_eq!(Lang::from_path(Path::new("test.unknown")), None);
    }

    #[test]
    fn test_get_name() {
        assert_eq!(Lang::Rust.get_name(), "rust");
        assert_eq!(Lang::TypeScript.get_name(), "typescript");
        assert_eq!(Lang::Java.get_name(), "java");
    }
}
