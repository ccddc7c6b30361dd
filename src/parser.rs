//! Tree-sitter parser integration for TypeScript
//!
//! Supplies the parse capability consumed by the pipeline: raw source text in,
//! syntax unit out. The rest of the crate only ever inspects tree nodes and
//! never touches raw text offsets directly.

use crate::error::GuardGenError;
use tree_sitter::{Node, Parser, Tree};

/// A parsed TypeScript source unit.
///
/// Owns the tree-sitter tree together with the source text the tree's byte
/// spans refer to, and the input identifier used in error reporting.
pub struct SourceUnit {
    pub tree: Tree,
    pub source: String,
    pub name: String,
}

/// Parse TypeScript source text into a syntax unit.
pub fn parse_source(content: &str, name: &str) -> Result<SourceUnit, GuardGenError> {
    let mut parser = Parser::new();

    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|_| GuardGenError::Parse {
            input: name.to_string(),
        })?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| GuardGenError::Parse {
            input: name.to_string(),
        })?;

    Ok(SourceUnit {
        tree,
        source: content.to_string(),
        name: name.to_string(),
    })
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    &source[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typescript() {
        let source = "function hello(name: string): string { return `Hello ${name}`; }";
        let unit = parse_source(source, "test.ts").unwrap();

        assert!(!unit.tree.root_node().has_error());
        assert_eq!(unit.name, "test.ts");
        assert_eq!(unit.source, source);
    }

    #[test]
    fn test_parse_class() {
        let source = "class Foo { bar(x: number): void {} }";
        let unit = parse_source(source, "test.ts").unwrap();

        assert!(!unit.tree.root_node().has_error());
    }

    #[test]
    fn test_node_text() {
        let source = "const x = 42;";
        let unit = parse_source(source, "test.ts").unwrap();

        let root = unit.tree.root_node();
        assert_eq!(node_text(&root, &unit.source), source);
    }
}
