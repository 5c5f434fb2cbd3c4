use crate::{
    calculator::{evaluator::core::EvalResult, token::Operator},
    error::RuntimeError,
};

/// Evaluates a binary arithmetic operation.
///
/// Division by a divisor equal to zero (either sign) is rejected instead of
/// producing an infinity.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use calcapi::{calculator::{evaluator::binary::apply, token::Operator},
///               error::RuntimeError};
///
/// assert_eq!(apply(Operator::Div, 5.0, 2.0), Ok(2.5));
/// assert_eq!(apply(Operator::Div, 5.0, 0.0),
///            Err(RuntimeError::DivisionByZero { dividend: 5.0 }));
/// ```
pub fn apply(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            Ok(left / right)
        },
    }
}
