//! Core data model for extracted method surfaces
//!
//! These types describe the method surface of a target class as captured from
//! source. Type text is carried verbatim from the input annotations and never
//! semantically resolved, so a generated signature is only as correct as the
//! source it was read from.

use serde::{Deserialize, Serialize};

/// One formal parameter of a method: identifier plus annotated type text.
///
/// `type_text` is empty when the source parameter carries no annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
}

impl MethodArgument {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }
}

/// A method's declaration head as extracted from the target class.
///
/// `declaration_text` is the canonical re-render
/// `name(arg1: type1, arg2: type2, …): returnType`, reconstructible solely
/// from the other three fields and always a syntactically valid method head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    pub return_type: String,
    pub args: Vec<MethodArgument>,
    pub declaration_text: String,
}

impl MethodSignature {
    /// Build a signature, deriving `declaration_text` from the parts.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>, args: Vec<MethodArgument>) -> Self {
        let name = name.into();
        let return_type = return_type.into();
        let declaration_text = render_declaration(&name, &args, &return_type);
        Self {
            name,
            return_type,
            args,
            declaration_text,
        }
    }

    /// Comma-separated argument names, as used at a delegating call site.
    pub fn arg_list(&self) -> String {
        self.args
            .iter()
            .map(|arg| arg.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Render the canonical method head for a name, parameter list and return type.
///
/// Parameters with no annotated type are rendered bare (no trailing colon) so
/// the head stays syntactically valid.
fn render_declaration(name: &str, args: &[MethodArgument], return_type: &str) -> String {
    let params = args
        .iter()
        .map(|arg| {
            if arg.type_text.is_empty() {
                arg.name.clone()
            } else {
                format!("{}: {}", arg.name, arg.type_text)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("{name}({params}): {return_type}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_text_with_args() {
        let sig = MethodSignature::new(
            "bar",
            "Promise<string>",
            vec![
                MethodArgument::new("x", "number"),
                MethodArgument::new("y", "string"),
            ],
        );
        assert_eq!(sig.declaration_text, "bar(x: number, y: string): Promise<string>");
    }

    #[test]
    fn test_declaration_text_no_args() {
        let sig = MethodSignature::new("qux", "void", vec![]);
        assert_eq!(sig.declaration_text, "qux(): void");
    }

    #[test]
    fn test_declaration_text_untyped_arg() {
        let sig = MethodSignature::new("baz", "any", vec![MethodArgument::new("data", "")]);
        assert_eq!(sig.declaration_text, "baz(data): any");
    }

    #[test]
    fn test_arg_list() {
        let sig = MethodSignature::new(
            "bar",
            "void",
            vec![
                MethodArgument::new("a", "number"),
                MethodArgument::new("b", ""),
            ],
        );
        assert_eq!(sig.arg_list(), "a, b");
    }

    #[test]
    fn test_arg_list_empty() {
        let sig = MethodSignature::new("qux", "void", vec![]);
        assert_eq!(sig.arg_list(), "");
    }
}
