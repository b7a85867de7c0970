use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        lexer::{Span, Token},
        operator::registry::OperatorRegistry,
    },
};

/// A right-hand operand located by [`gather_right_operand`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand {
    /// Value after folding any leading signs.
    pub value: f64,
    /// Span from the first folded sign (or the number) to the number.
    pub span:  Span,
    /// Position in the sequence just past the number.
    pub next:  usize,
}

/// Finds the operand starting at position `from` of `tokens`.
///
/// Scans forward to the next number token. Every operator in between must be
/// a known sign symbol; the signs are applied right to left, so `-+-4`
/// yields `4`. Returns `Ok(None)` if no number follows.
///
/// # Errors
/// - [`EvalError::UnknownOperator`] if a symbol in the run does not resolve.
/// - [`EvalError::IllegalOperator`] if a symbol in the run is not a sign.
///
/// # Example
/// ```
/// use stepwise::interpreter::{
///     lexer::tokenize,
///     operator::registry::OperatorRegistry,
///     reducer::operand::gather_right_operand,
/// };
///
/// let registry = OperatorRegistry::new();
/// let tokens = tokenize("2*--4", &registry).unwrap();
/// let operand = gather_right_operand(&tokens, 2, &registry).unwrap().unwrap();
/// assert_eq!(operand.value, 4.0);
/// assert_eq!((operand.span.start, operand.span.end), (2, 4));
/// assert_eq!(operand.next, 5);
/// ```
pub fn gather_right_operand(tokens: &[Token],
                            from: usize,
                            registry: &OperatorRegistry)
                            -> EvalResult<Option<Operand>> {
    let Some(offset) = tokens.get(from..)
                             .and_then(|rest| rest.iter().position(Token::is_number))
    else {
        return Ok(None);
    };
    let number_at = from + offset;
    let number = &tokens[number_at];
    let Some(mut value) = number.value else {
        return Err(EvalError::non_compliant(format!("number '{}' has no value", number.text)));
    };

    for sign in tokens[from..number_at].iter().rev() {
        let Some(operator) = registry.resolve(&sign.text) else {
            return Err(EvalError::UnknownOperator { symbol: sign.text.clone(),
                                                    start:  sign.span.start,
                                                    end:    sign.span.end, });
        };
        if !registry.is_self_compounding(&sign.text) {
            return Err(EvalError::IllegalOperator { symbol: sign.text.clone(),
                                                    start:  sign.span.start,
                                                    end:    sign.span.end, });
        }
        value = operator.apply(None, value);
    }

    Ok(Some(Operand { value,
                      span: tokens[from].span.join(number.span),
                      next: number_at + 1 }))
}
