/// Binary operator evaluation.
///
/// Applies a single arithmetic operator to two numbers, checking for division
/// by zero.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the parenthesis folding loop, the two precedence passes, and the
/// final reduction check.
pub mod core;
