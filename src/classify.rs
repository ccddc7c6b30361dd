//! Return-type classification
//!
//! Maps a method's return-type text to the queue dispatch strategy the guard
//! body should use. This is a textual heuristic over the annotation, not a
//! resolved-type check: `Observable<...>` and `Promise<...>` are recognized by
//! pattern, and an array suffix immediately after the generic close opts the
//! type out (an array of promises is returned directly, not awaited one by
//! one).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a guard method routes its delegating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchStrategy {
    /// Route through the queue's stream dispatch (`Observable<...>` returns).
    Stream,
    /// Route through the queue's deferred dispatch (`Promise<...>` returns).
    Deferred,
    /// Delegate directly, no queueing.
    Direct,
}

// The trailing `($|[^\[])` reproduces a negative lookahead: the generic close
// must not be immediately followed by an array bracket.
static OBSERVABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Observable<.*>($|[^\[])").unwrap());
static PROMISE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"Promise<.*>($|[^\[])").unwrap());

/// Classify a return-type text into a dispatch strategy.
///
/// `Observable` is checked before `Promise`; anything matching neither
/// pattern, including bare `any` and primitives, dispatches directly.
pub fn classify(return_type: &str) -> DispatchStrategy {
    if OBSERVABLE_PATTERN.is_match(return_type) {
        DispatchStrategy::Stream
    } else if PROMISE_PATTERN.is_match(return_type) {
        DispatchStrategy::Deferred
    } else {
        DispatchStrategy::Direct
    }
}
