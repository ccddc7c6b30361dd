//! Generation pipeline
//!
//! Composes the transformation: parse → locate → extract → emit → print.
//! Each invocation is independent and referentially transparent for a given
//! input text and target name; nothing is cached or shared across calls.

use crate::emit::{emit_guard, GeneratedUnit};
use crate::error::GuardGenError;
use crate::extract::extract_signatures;
use crate::locate::find_class;
use crate::parser::parse_source;
use crate::types::MethodSignature;
use log::debug;

/// Fallback input identifier used in errors when no file name was supplied.
const ANONYMOUS_INPUT: &str = "<memory>";

/// Generate the guard companion text for `target_class` inside `input_text`.
///
/// Fails with [`GuardGenError::TargetNotFound`] when no top-level class in the
/// input matches the target name; no partial output is produced.
pub fn generate(
    input_text: &str,
    target_class: &str,
    input_name: Option<&str>,
) -> Result<String, GuardGenError> {
    Ok(emit_unit(input_text, target_class, input_name)?.print())
}

/// Run the pipeline up to emission, returning the structured unit.
pub fn emit_unit(
    input_text: &str,
    target_class: &str,
    input_name: Option<&str>,
) -> Result<GeneratedUnit, GuardGenError> {
    let signatures = extract_surface(input_text, target_class, input_name)?;
    Ok(emit_guard(target_class, signatures))
}

/// Locate the target class and extract its method surface without emitting.
pub fn extract_surface(
    input_text: &str,
    target_class: &str,
    input_name: Option<&str>,
) -> Result<Vec<MethodSignature>, GuardGenError> {
    let input_name = input_name.unwrap_or(ANONYMOUS_INPUT);

    let unit = parse_source(input_text, input_name)?;
    let class_decl = find_class(&unit, target_class)
        .ok_or_else(|| GuardGenError::target_not_found(input_name, target_class))?;

    let signatures = extract_signatures(&class_decl, &unit);
    debug!(
        "extracted {} method signature(s) from class `{}` in {}",
        signatures.len(),
        target_class,
        input_name
    );

    Ok(signatures)
}
