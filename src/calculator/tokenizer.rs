use tracing::debug;

use crate::{
    calculator::{
        lexer::{Symbol, SymbolClass, lex},
        token::{Operator, Paren, Token},
    },
    error::ParseError,
};

/// Result type used by the tokenizer.
pub type ParseResult<T> = Result<T, ParseError>;

/// Converts raw expression text into a validated token sequence.
///
/// Surrounding whitespace is trimmed first. The remaining text must pass, in
/// order: character classification, the operator-at-either-end check, the
/// space check, the parenthesis balance check, and numeric literal
/// validation. The first failing stage decides the error.
///
/// # Parameters
/// - `expression`: Expression text as received.
///
/// # Returns
/// The flat token sequence, ready for [`evaluate`](crate::calculator::evaluator::core::evaluate).
///
/// # Example
/// ```
/// use calcapi::calculator::{
///     token::{Operator, Token},
///     tokenizer::tokenize_and_validate,
/// };
///
/// let tokens = tokenize_and_validate("2 -3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0), Token::Operator(Operator::Sub), Token::Number(3.0)]);
///
/// let tokens = tokenize_and_validate("1*-.5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Operator(Operator::Mul), Token::Number(-0.5)]);
/// ```
pub fn tokenize_and_validate(expression: &str) -> ParseResult<Vec<Token>> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let symbols = lex(expression)?;
    check_boundaries(&symbols)?;
    check_spaces(&symbols)?;
    check_parentheses(&symbols)?;
    let tokens = coalesce(&symbols)?;

    debug!(?tokens, "tokenized expression");
    Ok(tokens)
}

/// Rejects a leading operator other than `-` and any trailing operator.
fn check_boundaries(symbols: &[Symbol]) -> ParseResult<()> {
    if let Some(Symbol::Operator(op)) = symbols.first()
       && *op != Operator::Sub
    {
        return Err(ParseError::OperatorAtStart { operator: op.symbol() });
    }

    if let Some(Symbol::Operator(op)) = symbols.last() {
        return Err(ParseError::OperatorAtEnd { operator: op.symbol() });
    }

    Ok(())
}

/// Validates every space.
///
/// A space may sit between symbols of different classes, after a
/// parenthesis, or in front of a `-`. Spaces never appear at either end since
/// the expression is trimmed.
fn check_spaces(symbols: &[Symbol]) -> ParseResult<()> {
    for window in symbols.windows(3) {
        if let [before, Symbol::Space, after] = *window {
            let same_class = before.class() == after.class();
            let after_paren = before.class() == SymbolClass::Paren;
            let before_minus = after == Symbol::Operator(Operator::Sub);

            if same_class && !after_paren && !before_minus {
                return Err(ParseError::InvalidSpace { before: before.as_char(),
                                                      after:  after.as_char(), });
            }
        }
    }

    Ok(())
}

/// Checks that parentheses never close more than was opened and that every
/// group is closed by the end.
fn check_parentheses(symbols: &[Symbol]) -> ParseResult<()> {
    let mut depth = 0usize;

    for symbol in symbols {
        match symbol {
            Symbol::Paren(Paren::Open) => depth += 1,
            Symbol::Paren(Paren::Close) => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnbalancedParentheses)?;
            },
            _ => {},
        }
    }

    if depth == 0 { Ok(()) } else { Err(ParseError::UnbalancedParentheses) }
}

/// Merges numerals into number tokens and maps the remaining symbols,
/// dropping the already validated spaces.
///
/// A `-` starts a negative literal when nothing precedes it, or when it
/// follows an operator or an open parenthesis. After a number or a close
/// parenthesis it is subtraction. Spaces inside a literal can only follow
/// its `-`, since `check_spaces` rejects a space between two numerals.
fn coalesce(symbols: &[Symbol]) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::with_capacity(symbols.len());
    let mut symbols = symbols.iter().copied().peekable();

    while let Some(symbol) = symbols.next() {
        match symbol {
            Symbol::Numeral(_) => {},
            Symbol::Operator(Operator::Sub) if minus_is_unary(tokens.last()) => {},
            Symbol::Operator(op) => {
                tokens.push(Token::Operator(op));
                continue;
            },
            Symbol::Paren(paren) => {
                tokens.push(Token::Paren(paren));
                continue;
            },
            Symbol::Space => continue,
        }

        let mut literal = String::from(symbol.as_char());
        while let Some(next) = symbols.next_if(|s| matches!(s, Symbol::Numeral(_) | Symbol::Space)) {
            if let Symbol::Numeral(c) = next {
                literal.push(c);
            }
        }

        tokens.push(Token::Number(parse_literal(&literal)?));
    }

    Ok(tokens)
}

const fn minus_is_unary(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::Operator(_) | Token::Paren(Paren::Open)))
}

/// Validates a numeric literal and parses it.
///
/// The literal may carry a leading `-`. Its digits must be non-empty, contain
/// at most one `.`, and not end with `.`; a leading `.` gets a `0` in front.
fn parse_literal(literal: &str) -> ParseResult<f64> {
    let (sign, digits) = literal.strip_prefix('-').map_or(("", literal), |rest| ("-", rest));

    if digits.is_empty()
       || digits == "."
       || digits.matches('.').count() > 1
       || digits.ends_with('.')
    {
        return Err(ParseError::InvalidNumber { literal: literal.to_string() });
    }

    let normalized = if digits.starts_with('.') {
        format!("{sign}0{digits}")
    } else {
        literal.to_string()
    };

    normalized.parse()
              .map_err(|e: std::num::ParseFloatError| {
                  ParseError::NumberParseError { reason:  e.to_string(),
                                                 literal: normalized.clone(), }
              })
}
