#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing and validating an
/// expression.
pub enum ParseError {
    /// The expression was empty after trimming surrounding whitespace.
    EmptyExpression,
    /// A character outside of digits, `.`, `+ - * /`, parentheses and spaces.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset inside the trimmed expression.
        position:  usize,
    },
    /// The expression starts with `+`, `*` or `/`.
    OperatorAtStart {
        /// The leading operator.
        operator: char,
    },
    /// The expression ends with an operator.
    OperatorAtEnd {
        /// The trailing operator.
        operator: char,
    },
    /// A space separates two symbols of the same class, e.g. `2 2` or `+ +`.
    InvalidSpace {
        /// The symbol in front of the space.
        before: char,
        /// The symbol after the space.
        after:  char,
    },
    /// A `)` closed nothing, or a `(` was never closed.
    UnbalancedParentheses,
    /// A numeric literal is malformed, such as `.`, `1.2.3`, `5.` or a lone
    /// `-`.
    InvalidNumber {
        /// The literal as written.
        literal: String,
    },
    /// A literal passed every format check but still failed to parse.
    NumberParseError {
        /// The literal handed to the float parser.
        literal: String,
        /// The reason reported by the parser.
        reason:  String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty expression."),

            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },

            Self::OperatorAtStart { operator } => write!(f, "Operator at start: {operator}"),

            Self::OperatorAtEnd { operator } => write!(f, "Operator at end: {operator}"),

            Self::InvalidSpace { before, after } => {
                write!(f, "Invalid space between '{before}' and '{after}'.")
            },

            Self::UnbalancedParentheses => write!(f, "Unbalanced parentheses."),

            Self::InvalidNumber { literal } => write!(f, "Invalid number: \"{literal}\"."),

            Self::NumberParseError { literal, reason } => {
                write!(f, "Error during number parse: {literal} - {reason}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
