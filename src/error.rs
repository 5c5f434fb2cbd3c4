/// Tokenizing and validation errors.
///
/// Defines every way a raw expression can be rejected before any arithmetic
/// is attempted: bad characters, misplaced operators, malformed spacing,
/// unbalanced parentheses and malformed numeric literals.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while folding a validated token sequence into a
/// single number, such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any error produced by [`crate::calc`].
///
/// Wraps the error of whichever stage rejected the expression. Every variant
/// is a deterministic function of the input; none of them is worth retrying.
pub enum CalcError {
    /// The expression was rejected by the tokenizer/validator.
    Parse(ParseError),
    /// The token sequence could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
