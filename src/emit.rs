//! Guard emission
//!
//! Renders the generated companion declarations for a target class: an
//! interface mirroring the class's method surface, and a guard class
//! implementing it whose bodies delegate to an injected `source` instance,
//! routed through the execution queue according to each method's dispatch
//! strategy. The queue type is an opaque external name substituted into the
//! emitted text; this crate never implements or runs one.

use crate::classify::{classify, DispatchStrategy};
use crate::types::MethodSignature;

/// External queue type the generated guard instantiates.
const QUEUE_TYPE: &str = "ExecutionQueue";
/// Queue entry point for stream-returning methods.
const STREAM_DISPATCH: &str = "enqueueObservable";
/// Queue entry point for promise-returning methods.
const DEFERRED_DISPATCH: &str = "enqueuePromise";

/// The emitted interface + guard class pair for one target class.
///
/// Printing is deterministic: the same unit always renders to byte-identical
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub interface_name: String,
    pub class_name: String,
    pub methods: Vec<MethodSignature>,
}

/// Build the generated unit for a class name and its extracted methods.
///
/// Generated names are derived by plain concatenation (`<Name>Like`,
/// `<Name>Guard`); collision with existing identifiers in the source file is
/// the caller's concern.
pub fn emit_guard(class_name: &str, methods: Vec<MethodSignature>) -> GeneratedUnit {
    GeneratedUnit {
        interface_name: format!("{class_name}Like"),
        class_name: format!("{class_name}Guard"),
        methods,
    }
}

impl GeneratedUnit {
    /// Render the unit to TypeScript text.
    pub fn print(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("interface {} {{\n", self.interface_name));
        for method in &self.methods {
            out.push_str(&format!("    {};\n", method.declaration_text));
        }
        out.push_str("}\n\n");

        out.push_str(&format!(
            "class {} implements {} {{\n",
            self.class_name, self.interface_name
        ));
        out.push_str(&format!(
            "    public readonly queue: {QUEUE_TYPE} = new {QUEUE_TYPE}();\n\n"
        ));
        out.push_str(&format!(
            "    constructor(public readonly source: {}) {{}}\n",
            self.interface_name
        ));
        for method in &self.methods {
            out.push('\n');
            out.push_str(&format!("    {} {{\n", method.declaration_text));
            out.push_str(&format!("        {}\n", method_body(method)));
            out.push_str("    }\n");
        }
        out.push_str("}\n");

        out
    }
}

/// Render one guard method body according to the method's dispatch strategy.
fn method_body(method: &MethodSignature) -> String {
    let call = format!("this.source.{}({})", method.name, method.arg_list());
    match classify(&method.return_type) {
        DispatchStrategy::Stream => format!("return this.queue.{STREAM_DISPATCH}(() => {call});"),
        DispatchStrategy::Deferred => {
            format!("return this.queue.{DEFERRED_DISPATCH}(() => {call});")
        }
        DispatchStrategy::Direct => format!("return {call};"),
    }
}
