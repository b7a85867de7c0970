use std::fmt::Display;

use logos::Logos;
use serde::Serialize;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::operator::registry::OperatorRegistry,
};

/// A maximal run of like-classified characters.
///
/// Numeric runs become a single number token, symbol runs are split into
/// operator tokens by [`split_symbols`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Run {
    /// Digits and decimal points, such as `3.14` or the malformed `1..2`.
    #[regex(r"[0-9.]+")]
    Numeric,
    /// Anything else, such as `+`, `*-` or `~`.
    #[regex(r"[^0-9.]+", allow_greedy = true)]
    Symbol,
}

/// An inclusive range of sequential token indices.
///
/// Indices count recognized tokens, not characters: in `12+3` the literal
/// `12` has index 0, `+` index 1 and `3` index 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// First covered token index.
    pub start: usize,
    /// Last covered token index.
    pub end:   usize,
}

impl Span {
    /// A span covering the single token at `index`.
    #[must_use]
    pub const fn at(index: usize) -> Self {
        Self { start: index,
               end:   index, }
    }

    /// The smallest span covering both `self` and `other`.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        Self { start: self.start.min(other.start),
               end:   self.end.max(other.end), }
    }

    /// Reports whether the two spans share at least one token index.
    ///
    /// # Example
    /// ```
    /// use stepwise::interpreter::lexer::Span;
    ///
    /// let span = Span { start: 1, end: 3 };
    /// assert!(span.overlaps(Span::at(3)));
    /// assert!(!span.overlaps(Span::at(4)));
    /// ```
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}-{}]", self.start, self.end)
    }
}

/// Whether a token holds a number or an operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Number,
    Operator,
}

/// A recognized unit of the input, or a number synthesized by the reducer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind:  TokenKind,
    /// Source text, or the rendered result for synthesized numbers.
    pub text:  String,
    /// Numeric value; `None` for operator tokens.
    pub value: Option<f64>,
    #[serde(flatten)]
    pub span:  Span,
}

impl Token {
    #[must_use]
    pub fn number(text: impl Into<String>, value: f64, span: Span) -> Self {
        Self { kind: TokenKind::Number,
               text: text.into(),
               value: Some(value),
               span }
    }

    #[must_use]
    pub fn operator(text: impl Into<String>, span: Span) -> Self {
        Self { kind: TokenKind::Operator,
               text: text.into(),
               value: None,
               span }
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.text, self.span)
    }
}

/// Splits an expression into number and operator tokens.
///
/// Whitespace is removed before scanning, so `1 2` reads as `12`. Unknown
/// symbols are kept as operator tokens; rejecting them is left to the
/// reducer.
///
/// # Errors
/// Returns [`EvalError::MalformedNumber`] if a numeric run is not a valid
/// floating-point literal.
///
/// # Example
/// ```
/// use stepwise::interpreter::{lexer::tokenize, operator::registry::OperatorRegistry};
///
/// let tokens = tokenize("12 + -3", OperatorRegistry::shared()).unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["12", "+", "-", "3"]);
/// assert_eq!(tokens[3].span.start, 3);
/// ```
pub fn tokenize(source: &str, registry: &OperatorRegistry) -> EvalResult<Vec<Token>> {
    let stripped = source.chars()
                         .filter(|c| !c.is_whitespace())
                         .collect::<String>();

    let mut tokens = Vec::new();
    let mut lexer = Run::lexer(&stripped);

    while let Some(run) = lexer.next() {
        let slice = lexer.slice();
        match run {
            Ok(Run::Numeric) => {
                let index = tokens.len();
                let value = slice.parse::<f64>()
                                 .map_err(|_| EvalError::MalformedNumber { text: slice.to_string(),
                                                                           index })?;
                tokens.push(Token::number(slice, value, Span::at(index)));
            },
            Ok(Run::Symbol) => split_symbols(slice, registry, &mut tokens),
            Err(()) => {
                let index = tokens.len();
                return Err(EvalError::UnknownOperator { symbol: slice.to_string(),
                                                        start:  index,
                                                        end:    index, });
            },
        }
    }

    log::debug!("tokenized {:?} into {} tokens", stripped, tokens.len());
    Ok(tokens)
}

/// Breaks a symbol run into operator tokens.
///
/// The whole run is tried first. Otherwise characters are accumulated until
/// the prefix is a known symbol, which is emitted before starting over. A
/// remainder that never matches becomes one unresolvable token.
fn split_symbols(run: &str, registry: &OperatorRegistry, tokens: &mut Vec<Token>) {
    if registry.is_valid_symbol(run) {
        tokens.push(Token::operator(run, Span::at(tokens.len())));
        return;
    }

    let mut start = 0;
    for (offset, ch) in run.char_indices() {
        let end = offset + ch.len_utf8();
        let candidate = &run[start..end];
        if registry.is_valid_symbol(candidate) {
            tokens.push(Token::operator(candidate, Span::at(tokens.len())));
            start = end;
        }
    }

    if start < run.len() {
        log::trace!("unrecognized symbol remainder {:?}", &run[start..]);
        tokens.push(Token::operator(&run[start..], Span::at(tokens.len())));
    }
}
