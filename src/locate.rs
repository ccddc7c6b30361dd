//! Class location
//!
//! Finds the target class among the top-level declarations of a parsed unit.
//! Only direct children of the root are scanned, in source order; classes
//! nested inside functions, namespaces or other classes are never candidates.

use crate::parser::{node_text, SourceUnit};
use tree_sitter::Node;

/// Find the first top-level class declaration whose name equals `target`.
///
/// The match is a case-sensitive identifier comparison. `export`-wrapped
/// declarations are unwrapped before matching.
pub fn find_class<'a>(unit: &'a SourceUnit, target: &str) -> Option<Node<'a>> {
    let root = unit.tree.root_node();
    let mut cursor = root.walk();

    for child in root.children(&mut cursor) {
        let decl = match child.kind() {
            "export_statement" => match child.child_by_field_name("declaration") {
                Some(inner) => inner,
                None => continue,
            },
            _ => child,
        };

        if !matches!(decl.kind(), "class_declaration" | "abstract_class_declaration") {
            continue;
        }

        if let Some(name) = decl.child_by_field_name("name") {
            if node_text(&name, &unit.source) == target {
                return Some(decl);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    #[test]
    fn test_finds_plain_class() {
        let unit = parse_source("class Foo { bar(): void {} }", "test.ts").unwrap();
        let class = find_class(&unit, "Foo");
        assert!(class.is_some());
        assert_eq!(class.unwrap().kind(), "class_declaration");
    }

    #[test]
    fn test_finds_exported_class() {
        let unit = parse_source("export class Foo extends Base {}", "test.ts").unwrap();
        assert!(find_class(&unit, "Foo").is_some());
    }

    #[test]
    fn test_finds_first_match_in_source_order() {
        let source = "class A {}\nclass B {}\nclass A { extra(): void {} }";
        let unit = parse_source(source, "test.ts").unwrap();
        let class = find_class(&unit, "A").unwrap();
        // First declaration wins: its body is empty.
        assert!(class.child_by_field_name("body").unwrap().named_child_count() == 0);
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let unit = parse_source("class Foo {}", "test.ts").unwrap();
        assert!(find_class(&unit, "foo").is_none());
    }

    #[test]
    fn test_missing_class_yields_none() {
        let unit = parse_source("const x = 1;\nfunction Foo() {}", "test.ts").unwrap();
        assert!(find_class(&unit, "Foo").is_none());
    }

    #[test]
    fn test_nested_class_is_not_found() {
        let source = "function wrapper() { class Inner {} }";
        let unit = parse_source(source, "test.ts").unwrap();
        assert!(find_class(&unit, "Inner").is_none());
    }
}
