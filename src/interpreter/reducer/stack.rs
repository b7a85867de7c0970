use crate::interpreter::lexer::{Span, Token};

/// Scratch stack a reduction pass rebuilds the token sequence on.
///
/// Tokens arrive in index order, so the top of the stack always covers the
/// highest index placed so far. A push whose span starts at or below that
/// index would cover the same input twice and is ignored.
#[derive(Debug, Default)]
pub struct ReductionStack {
    tokens: Vec<Token>,
}

impl ReductionStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Highest token index currently on the stack.
    #[must_use]
    pub fn covered_through(&self) -> Option<usize> {
        self.tokens.last().map(|token| token.span.end)
    }

    /// Pushes `token` unless its span is already covered. Returns whether the
    /// token was placed.
    pub fn push(&mut self, token: Token) -> bool {
        if let Some(covered) = self.covered_through()
           && (Span { start: 0,
                      end:   covered, }).overlaps(token.span)
        {
            log::trace!("skipping {token}: already covered through {covered}");
            return false;
        }
        self.tokens.push(token);
        true
    }

    /// Removes the top token, or returns `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
