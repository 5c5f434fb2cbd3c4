use std::iter;

use tracing::trace;

use crate::{
    calculator::{
        evaluator::binary::apply,
        token::{Operator, Paren, Token},
    },
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A precedence tier, resolved as one left-to-right pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    /// `*` and `/`
    Multiplicative,
    /// `+` and `-`
    Additive,
}

impl Tier {
    const fn contains(self, op: Operator) -> bool {
        match self {
            Self::Multiplicative => op.is_multiplicative(),
            Self::Additive => !op.is_multiplicative(),
        }
    }
}

/// Evaluates a token sequence and returns the resulting number.
///
/// Parentheses are resolved innermost first: the group folded next is the one
/// ending at the first `)`, opened by the nearest `(` before it, so its
/// interior never contains parentheses. The group is reduced by [`reduce`]
/// and replaced by a single number, and the scan restarts over the new,
/// shorter sequence until no group is left. This folds groups in the same
/// order as recursing into the first `(` and its matching `)`, without the
/// call stack growing with the nesting depth. The flat remainder is reduced
/// last. The caller's sequence is never modified.
///
/// # Parameters
/// - `tokens`: Token sequence, normally from
///   [`tokenize_and_validate`](crate::calculator::tokenizer::tokenize_and_validate).
///
/// # Returns
/// The value of the expression, `RuntimeError::DivisionByZero` for a zero
/// divisor, `RuntimeError::NotFullyReduced` if the tokens do not form a
/// complete expression, or `RuntimeError::NonFiniteResult` if the value is an
/// infinity or NaN.
///
/// # Example
/// ```
/// use calcapi::calculator::{
///     evaluator::core::evaluate,
///     token::{Operator, Paren, Token},
/// };
///
/// // 2 * (3 + 4)
/// let tokens = [Token::Number(2.0),
///               Token::Operator(Operator::Mul),
///               Token::Paren(Paren::Open),
///               Token::Number(3.0),
///               Token::Operator(Operator::Add),
///               Token::Number(4.0),
///               Token::Paren(Paren::Close)];
///
/// assert_eq!(evaluate(&tokens), Ok(14.0));
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    let mut buffer = tokens.to_vec();

    while let Some(close) = buffer.iter().position(|t| *t == Token::Paren(Paren::Close)) {
        let open = buffer[..close].iter()
                                  .rposition(|t| *t == Token::Paren(Paren::Open))
                                  .ok_or(RuntimeError::NotFullyReduced { remaining: buffer.len() })?;

        let value = reduce(&buffer[open + 1..close])?;
        trace!(open, close, value, "folded parenthesized group");

        buffer = buffer[..open].iter()
                               .copied()
                               .chain(iter::once(Token::Number(value)))
                               .chain(buffer[close + 1..].iter().copied())
                               .collect();
    }

    let value = reduce(&buffer)?;
    if value.is_finite() { Ok(value) } else { Err(RuntimeError::NonFiniteResult { value }) }
}

/// Reduces a sequence without parentheses to a single number.
///
/// Runs the `*`/`/` pass and then the `+`/`-` pass, and checks that exactly
/// one number is left.
///
/// # Example
/// ```
/// use calcapi::calculator::{
///     evaluator::core::reduce,
///     token::{Operator, Token},
/// };
///
/// // 8 / 4 * 2 is (8 / 4) * 2
/// let tokens = [Token::Number(8.0),
///               Token::Operator(Operator::Div),
///               Token::Number(4.0),
///               Token::Operator(Operator::Mul),
///               Token::Number(2.0)];
///
/// assert_eq!(reduce(&tokens), Ok(4.0));
/// ```
pub fn reduce(tokens: &[Token]) -> EvalResult<f64> {
    let reduced = reduce_tier(tokens, Tier::Multiplicative)?;
    let reduced = reduce_tier(&reduced, Tier::Additive)?;

    match reduced.as_slice() {
        [Token::Number(value)] => Ok(*value),
        rest => Err(RuntimeError::NotFullyReduced { remaining: rest.len() }),
    }
}

/// Folds every operator of `tier` into its neighbours, left to right.
///
/// The left operand is whatever the pass has produced last, so a chain like
/// `8 / 4 * 2` is folded as `(8 / 4) * 2`. Operators of the other tier pass
/// through untouched.
fn reduce_tier(tokens: &[Token], tier: Tier) -> EvalResult<Vec<Token>> {
    let not_reduced = || RuntimeError::NotFullyReduced { remaining: tokens.len() };

    let mut reduced = Vec::with_capacity(tokens.len());
    let mut tokens_iter = tokens.iter().copied();

    while let Some(token) = tokens_iter.next() {
        match token {
            Token::Operator(op) if tier.contains(op) => {
                let Some(Token::Number(left)) = reduced.pop() else {
                    return Err(not_reduced());
                };
                let Some(Token::Number(right)) = tokens_iter.next() else {
                    return Err(not_reduced());
                };

                let value = apply(op, left, right)?;
                trace!(%op, left, right, value, "reduced binary operation");
                reduced.push(Token::Number(value));
            },
            Token::Paren(_) => return Err(not_reduced()),
            other => reduced.push(other),
        }
    }

    Ok(reduced)
}
