#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The value that was being divided.
        dividend: f64,
    },
    /// The token sequence did not collapse into a single number.
    ///
    /// Raised when an operand slot holds something other than a number, as
    /// in `1++2`, `()` or `2(3)`.
    NotFullyReduced {
        /// How many tokens were left when reduction stopped.
        remaining: usize,
    },
    /// The expression evaluated to an infinity or NaN, for example after a
    /// literal too large for an `f64`.
    NonFiniteResult {
        /// The value the evaluation produced.
        value: f64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => write!(f, "Division by zero: {dividend} / 0."),
            Self::NotFullyReduced { remaining } => write!(f,
                                                          "Expression could not be fully reduced: {remaining} tokens left."),
            Self::NonFiniteResult { value } => write!(f, "Result is not a finite number: {value}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
