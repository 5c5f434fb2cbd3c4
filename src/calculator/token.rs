/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Returns the character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Whether the operator belongs to the `*`/`/` precedence tier.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which side of a parenthesized group a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Paren {
    /// Returns the character the parenthesis is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
        }
    }
}

/// A classified unit of an expression.
///
/// Tokens are produced by the tokenizer and never modified afterwards; the
/// evaluator builds new, shorter sequences instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, with any unary minus already applied.
    Number(f64),
    /// A binary operator.
    Operator(Operator),
    /// A parenthesis marker.
    Paren(Paren),
}
