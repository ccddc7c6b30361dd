//! guardgen — generates queue-serializing guard classes for TypeScript APIs
//!
//! Given the text of a TypeScript class declaration, guardgen emits a
//! companion interface (`<Name>Like`) mirroring the class's method surface
//! and a wrapper class (`<Name>Guard`) implementing it. Each guard method
//! delegates to an injected `source` instance, routed through an ordered
//! execution queue: `Observable<...>` returns go through the queue's stream
//! dispatch, `Promise<...>` returns through its deferred dispatch, and
//! everything else delegates directly.
//!
//! The transformation is text-in, text-out and stateless per invocation:
//!
//! ```ignore
//! let generated = guardgen::pipeline::generate(source, "Vault", Some("vault.ts"))?;
//! ```

// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod emit;
pub mod error;
pub mod extract;
pub mod locate;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use crate::classify::{classify, DispatchStrategy};
pub use crate::emit::{emit_guard, GeneratedUnit};
pub use crate::error::GuardGenError;
pub use crate::pipeline::{extract_surface, generate};
pub use crate::types::{MethodArgument, MethodSignature};
