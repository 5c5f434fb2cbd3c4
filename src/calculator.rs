/// The evaluator module folds a validated token sequence into a number.
///
/// Parenthesized groups are resolved innermost first, then multiplication and
/// division, then addition and subtraction, left to right within each tier.
///
/// # Responsibilities
/// - Collapses every parenthesized group into a single number.
/// - Applies the two precedence tiers as separate passes.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module classifies raw characters into symbols.
///
/// Every character of the expression becomes a digit-or-dot numeral, an
/// operator, a parenthesis or a run of spaces. Anything else is rejected.
pub mod lexer;
/// The token module defines the typed units consumed by the evaluator.
pub mod token;
/// The tokenizer module turns raw text into a validated token sequence.
///
/// It runs the lexer and then a fixed series of checks, each of which aborts
/// on the first problem it finds.
///
/// # Responsibilities
/// - Rejects operators at the ends of the expression and misplaced spaces.
/// - Checks that parentheses are balanced.
/// - Merges numerals into literals, deciding which `-` signs are unary.
/// - Validates and parses every numeric literal.
pub mod tokenizer;
