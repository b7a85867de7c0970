use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        lexer::{Span, Token},
        operator::{
            core::{Arity, Operator, Precedence},
            registry::OperatorRegistry,
        },
        reducer::{
            operand::{Operand, gather_right_operand},
            stack::ReductionStack,
        },
        trace::Step,
    },
};

/// Runs the precedence passes over a token sequence.
///
/// A reducer accumulates the [`Step`]s of every pass it runs; take them with
/// [`Reducer::into_steps`] once the last pass is done.
pub struct Reducer<'r> {
    registry: &'r OperatorRegistry,
    steps:    Vec<Step>,
}

impl<'r> Reducer<'r> {
    #[must_use]
    pub const fn new(registry: &'r OperatorRegistry) -> Self {
        Self { registry,
               steps: Vec::new() }
    }

    /// Steps recorded so far, in application order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Runs one pass, applying every operator of class `precedence` from left
    /// to right and passing all other tokens through.
    ///
    /// Every operator token is resolved, whatever its class, so an unknown
    /// symbol is reported by the first pass that meets it.
    ///
    /// # Errors
    /// - [`EvalError::UnknownOperator`] for a symbol outside the table.
    /// - [`EvalError::IllegalOperator`] for a non-sign symbol in a sign chain.
    /// - [`EvalError::NonCompliantExpression`] when an operand is missing.
    ///
    /// # Example
    /// ```
    /// use stepwise::interpreter::{
    ///     lexer::tokenize,
    ///     operator::{core::Precedence, registry::OperatorRegistry},
    ///     reducer::core::Reducer,
    /// };
    ///
    /// let registry = OperatorRegistry::new();
    /// let tokens = tokenize("2+3*4", &registry).unwrap();
    ///
    /// let mut reducer = Reducer::new(&registry);
    /// let tokens = reducer.reduce(&tokens, Precedence::Medium).unwrap();
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens[2].value, Some(12.0));
    /// assert_eq!((tokens[2].span.start, tokens[2].span.end), (2, 4));
    /// ```
    pub fn reduce(&mut self, tokens: &[Token], precedence: Precedence) -> EvalResult<Vec<Token>> {
        let mut stack = ReductionStack::new();
        let mut position = 0;

        while let Some(token) = tokens.get(position) {
            if token.is_number() {
                stack.push(token.clone());
                position += 1;
                continue;
            }

            let Some(operator) = self.registry.resolve(&token.text) else {
                return Err(EvalError::UnknownOperator { symbol: token.text.clone(),
                                                        start:  token.span.start,
                                                        end:    token.span.end, });
            };

            if operator.precedence() == precedence {
                position = self.apply(operator, tokens, position, &mut stack)?;
            } else {
                stack.push(token.clone());
                position += 1;
            }
        }

        let reduced = stack.into_tokens();
        log::debug!("{precedence} pass: {} tokens -> {} tokens, {} steps so far",
                    tokens.len(),
                    reduced.len(),
                    self.steps.len());
        Ok(reduced)
    }

    /// Applies the operator at `position` and pushes its result. Returns the
    /// position just past everything the application consumed.
    fn apply(&mut self,
             operator: Operator,
             tokens: &[Token],
             position: usize,
             stack: &mut ReductionStack)
             -> EvalResult<usize> {
        let token = &tokens[position];
        let right = match gather_right_operand(tokens, position + 1, self.registry)? {
            Some(operand) => operand,
            None => Self::operand_on_left(operator, token, position, stack)?,
        };

        let left = match operator.arity() {
            Arity::Prefix => None,
            Arity::Infix => Self::pop_left_operand(operator, token, stack)?,
        };

        let result = operator.apply(left.map(|(value, _)| value), right.value);
        let start = left.map_or(token.span.start.min(right.span.start), |(_, span)| span.start);
        let span = Span { start,
                          end: right.span.end.max(token.span.end) };

        let step = Step { left_operand:  left.map(|(value, _)| value),
                          right_operand: right.value,
                          result,
                          symbol:        operator.symbol().to_string(), };
        log::trace!("step {}: {step}", self.steps.len());
        self.steps.push(step);

        stack.push(Token::number(result.to_string(), result, span));
        Ok(right.next)
    }

    /// A prefix operator with nothing to its right, as in `9?`, takes the
    /// number directly before it.
    ///
    /// Only a `?` at the very end is read this way. Anything after it makes
    /// the operator look to the right again, so `9?+1` folds `+1` into the
    /// root and leaves two numbers (non-compliant expression), while `9?*2`
    /// meets `*` in the sign chain (illegal operator).
    fn operand_on_left(operator: Operator,
                       token: &Token,
                       position: usize,
                       stack: &mut ReductionStack)
                       -> EvalResult<Operand> {
        if operator.arity() == Arity::Prefix
           && stack.last().is_some_and(Token::is_number)
           && let Some(Token { value: Some(value),
                               span,
                               .. }) = stack.pop()
        {
            return Ok(Operand { value,
                                span,
                                next: position + 1 });
        }

        Err(EvalError::non_compliant(format!("operator '{}' in {} has no right operand",
                                             token.text, token.span)))
    }

    /// Pops the left operand of an infix operator. An empty stack means there
    /// is none; anything other than a number there cannot be one.
    fn pop_left_operand(operator: Operator,
                        token: &Token,
                        stack: &mut ReductionStack)
                        -> EvalResult<Option<(f64, Span)>> {
        match stack.pop() {
            None => Ok(None),
            Some(Token { value: Some(value),
                         span,
                         .. }) => Ok(Some((value, span))),
            Some(other) => Err(EvalError::non_compliant(format!("operator '{operator}' in {} has no left operand, found '{}'",
                                                                token.span, other.text))),
        }
    }
}
