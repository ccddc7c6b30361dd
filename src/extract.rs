//! Method signature extraction
//!
//! Walks the body of a located class declaration and produces one
//! [`MethodSignature`] per method member, in declaration order. Fields,
//! constructors, getters and setters are skipped silently. Annotations are
//! captured verbatim; a method without a return annotation is treated as
//! returning `any`, and a parameter without one gets empty type text.

use crate::parser::{node_text, SourceUnit};
use crate::types::{MethodArgument, MethodSignature};
use tree_sitter::Node;

/// Extract the ordered method surface of a class declaration.
pub fn extract_signatures(class_decl: &Node, unit: &SourceUnit) -> Vec<MethodSignature> {
    let mut signatures = Vec::new();

    let body = match class_decl.child_by_field_name("body") {
        Some(body) => body,
        None => return signatures,
    };

    let mut cursor = body.walk();
    for member in body.children(&mut cursor) {
        if member.kind() != "method_definition" || is_accessor(&member) {
            continue;
        }

        let name_node = match member.child_by_field_name("name") {
            Some(node) => node,
            None => continue,
        };
        let name = node_text(&name_node, &unit.source);
        if name == "constructor" {
            continue;
        }

        let args = extract_arguments(&member, unit);
        let return_type = member
            .child_by_field_name("return_type")
            .and_then(|annotation| annotated_type(&annotation, unit))
            .unwrap_or_else(|| "any".to_string());

        signatures.push(MethodSignature::new(name, return_type, args));
    }

    signatures
}

/// Check whether a method definition is a getter or setter.
fn is_accessor(member: &Node) -> bool {
    let mut cursor = member.walk();
    let accessor = member
        .children(&mut cursor)
        .any(|child| matches!(child.kind(), "get" | "set"));
    accessor
}

/// Extract the simple named parameters of a method, in declared order.
///
/// Destructuring, rest and `this` parameters are not simple named parameters
/// and are skipped.
fn extract_arguments(member: &Node, unit: &SourceUnit) -> Vec<MethodArgument> {
    let mut args = Vec::new();

    let params = match member.child_by_field_name("parameters") {
        Some(params) => params,
        None => return args,
    };

    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        if !matches!(param.kind(), "required_parameter" | "optional_parameter") {
            continue;
        }

        let pattern = match param.child_by_field_name("pattern") {
            Some(pattern) => pattern,
            None => continue,
        };
        if pattern.kind() != "identifier" {
            continue;
        }

        let type_text = param
            .child_by_field_name("type")
            .and_then(|annotation| annotated_type(&annotation, unit))
            .unwrap_or_default();

        args.push(MethodArgument::new(node_text(&pattern, &unit.source), type_text));
    }

    args
}

/// Get the type text out of a `type_annotation` node (`: T` yields `T`).
fn annotated_type(annotation: &Node, unit: &SourceUnit) -> Option<String> {
    let mut cursor = annotation.walk();
    let ty = annotation
        .named_children(&mut cursor)
        .next()
        .map(|ty| node_text(&ty, &unit.source).to_string());
    ty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::find_class;
    use crate::parser::parse_source;
    use indoc::indoc;

    fn extract_from(source: &str, class: &str) -> Vec<MethodSignature> {
        let unit = parse_source(source, "test.ts").unwrap();
        let class_decl = find_class(&unit, class).unwrap();
        extract_signatures(&class_decl, &unit)
    }

    #[test]
    fn test_extracts_methods_in_declaration_order() {
        let source = indoc! {"
            class Foo {
                bar(x: number): Promise<string> { return null; }
                baz(): Observable<number> { return null; }
                qux(): void {}
            }
        "};
        let sigs = extract_from(source, "Foo");
        let names: Vec<&str> = sigs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["bar", "baz", "qux"]);
    }

    #[test]
    fn test_captures_typed_arguments() {
        let source = "class Foo { bar(x: number, label: string): void {} }";
        let sigs = extract_from(source, "Foo");
        assert_eq!(sigs.len(), 1);
        assert_eq!(
            sigs[0].args,
            vec![
                MethodArgument::new("x", "number"),
                MethodArgument::new("label", "string"),
            ]
        );
        assert_eq!(sigs[0].declaration_text, "bar(x: number, label: string): void");
    }

    #[test]
    fn test_untyped_argument_gets_empty_type() {
        let source = "class Foo { bar(data): void {} }";
        let sigs = extract_from(source, "Foo");
        assert_eq!(sigs[0].args, vec![MethodArgument::new("data", "")]);
    }

    #[test]
    fn test_missing_return_type_defaults_to_any() {
        let source = "class Foo { bar(x: number) { return x; } }";
        let sigs = extract_from(source, "Foo");
        assert_eq!(sigs[0].return_type, "any");
        assert_eq!(sigs[0].declaration_text, "bar(x: number): any");
    }

    #[test]
    fn test_skips_non_method_members() {
        let source = indoc! {"
            class Foo {
                count: number = 0;
                constructor(x: number) {}
                get value(): number { return this.count; }
                set value(v: number) { this.count = v; }
                bar(): void {}
            }
        "};
        let sigs = extract_from(source, "Foo");
        let names: Vec<&str> = sigs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["bar"]);
    }

    #[test]
    fn test_skips_destructured_and_rest_parameters() {
        let source = "class Foo { bar({ a, b }, x: number, ...rest): void {} }";
        let sigs = extract_from(source, "Foo");
        assert_eq!(sigs[0].args, vec![MethodArgument::new("x", "number")]);
    }

    #[test]
    fn test_optional_parameter_is_kept() {
        let source = "class Foo { bar(x?: number): void {} }";
        let sigs = extract_from(source, "Foo");
        assert_eq!(sigs[0].args, vec![MethodArgument::new("x", "number")]);
    }

    #[test]
    fn test_generic_return_type_captured_verbatim() {
        let source = "class Foo { bar(): Promise<Map<string, number[]>> { return null; } }";
        let sigs = extract_from(source, "Foo");
        assert_eq!(sigs[0].return_type, "Promise<Map<string, number[]>>");
    }

    #[test]
    fn test_empty_class_yields_no_signatures() {
        let sigs = extract_from("class Foo {}", "Foo");
        assert!(sigs.is_empty());
    }
}
