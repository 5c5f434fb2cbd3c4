use logos::Logos;

use crate::{
    calculator::{
        token::{Operator, Paren},
        tokenizer::ParseResult,
    },
    error::ParseError,
};

/// A single classified piece of raw expression text.
///
/// Numerals are kept one character at a time; merging them into literals is
/// left to the tokenizer, which needs the surrounding symbols to decide
/// whether a `-` belongs to a number.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// A digit or a decimal point.
    #[regex(r"[0-9.]", |lex| lex.slice().chars().next())]
    Numeral(char),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(` or `)`.
    #[token("(", |_| Paren::Open)]
    #[token(")", |_| Paren::Close)]
    Paren(Paren),
    /// One or more consecutive spaces.
    #[regex(r" +")]
    Space,
}

/// The class of a symbol, used to decide where spaces are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// Digits and decimal points.
    Numeral,
    /// Arithmetic operators.
    Operator,
    /// Parentheses.
    Paren,
    /// Spaces.
    Space,
}

impl Symbol {
    /// Returns the class of this symbol.
    #[must_use]
    pub const fn class(self) -> SymbolClass {
        match self {
            Self::Numeral(_) => SymbolClass::Numeral,
            Self::Operator(_) => SymbolClass::Operator,
            Self::Paren(_) => SymbolClass::Paren,
            Self::Space => SymbolClass::Space,
        }
    }

    /// Returns the character this symbol was lexed from. A run of spaces is
    /// reported as a single space.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Numeral(c) => c,
            Self::Operator(op) => op.symbol(),
            Self::Paren(paren) => paren.symbol(),
            Self::Space => ' ',
        }
    }
}

/// Splits an expression into symbols.
///
/// # Parameters
/// - `expression`: The expression text, already trimmed.
///
/// # Returns
/// The symbols in source order, or `ParseError::InvalidCharacter` for the
/// first character that is not part of the expression alphabet.
///
/// # Example
/// ```
/// use calcapi::calculator::{
///     lexer::{lex, Symbol},
///     token::Operator,
/// };
///
/// let symbols = lex("1  +2").unwrap();
/// assert_eq!(symbols,
///            vec![Symbol::Numeral('1'),
///                 Symbol::Space,
///                 Symbol::Operator(Operator::Add),
///                 Symbol::Numeral('2')]);
/// ```
pub fn lex(expression: &str) -> ParseResult<Vec<Symbol>> {
    let mut symbols = Vec::new();
    let mut lexer = Symbol::lexer(expression);

    while let Some(symbol) = lexer.next() {
        if let Ok(symbol) = symbol {
            symbols.push(symbol);
        } else {
            let (position, character) = locate(expression, lexer.span().start);
            return Err(ParseError::InvalidCharacter { character, position });
        }
    }

    Ok(symbols)
}

/// Finds the character covering byte offset `byte`, along with its character
/// offset.
fn locate(expression: &str, byte: usize) -> (usize, char) {
    expression.char_indices()
              .enumerate()
              .take_while(|(_, (offset, _))| *offset <= byte)
              .last()
              .map_or((0, char::REPLACEMENT_CHARACTER), |(position, (_, c))| (position, c))
}
