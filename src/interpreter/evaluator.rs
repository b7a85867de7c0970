use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        lexer::{Token, tokenize},
        operator::{core::Precedence, registry::OperatorRegistry},
        reducer::core::Reducer,
        trace::{Evaluation, Stage},
    },
};

/// Label of the stage holding the tokenizer output.
pub const INIT_STAGE: &str = "INIT";

/// Evaluates expressions against an operator registry.
///
/// An evaluator holds no state of its own beyond the registry reference, so
/// one instance can serve any number of calls, and evaluating the same
/// expression twice always yields the same [`Evaluation`].
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'r> {
    registry: &'r OperatorRegistry,
}

impl<'r> Evaluator<'r> {
    #[must_use]
    pub const fn new(registry: &'r OperatorRegistry) -> Self {
        Self { registry }
    }

    /// Tokenizes `expression`, runs one reduction pass per precedence class
    /// and checks what is left.
    ///
    /// # Errors
    /// - [`EvalError::EmptyExpression`] if there is nothing but whitespace.
    /// - Any tokenizer or reducer error.
    /// - [`EvalError::NonCompliantExpression`] if more than one token is left.
    /// - [`EvalError::EmptyResult`] if no token is left.
    /// - [`EvalError::IllegalArithmetic`] if the value is NaN.
    ///
    /// # Example
    /// ```
    /// use stepwise::interpreter::{evaluator::Evaluator, operator::registry::OperatorRegistry};
    ///
    /// let registry = OperatorRegistry::new();
    /// let evaluation = Evaluator::new(&registry).evaluate("2+3*4").unwrap();
    ///
    /// assert_eq!(evaluation.value, 14.0);
    /// assert_eq!(evaluation.steps.len(), 2);
    /// assert_eq!(evaluation.stages.len(), 4);
    /// ```
    pub fn evaluate(&self, expression: &str) -> EvalResult<Evaluation> {
        let tokens = tokenize(expression, self.registry)?;
        if tokens.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let mut stages = Vec::with_capacity(Precedence::ALL.len() + 1);
        stages.push(Stage { label:  INIT_STAGE.to_string(),
                            tokens: tokens.clone(), });

        let mut reducer = Reducer::new(self.registry);
        let mut current = tokens;
        for precedence in Precedence::ALL {
            current = reducer.reduce(&current, precedence)?;
            stages.push(Stage { label:  precedence.label().to_string(),
                                tokens: current.clone(), });
        }

        let value = final_value(&current)?;
        if value.is_nan() {
            log::debug!("{expression:?} evaluated to NaN");
            return Err(EvalError::IllegalArithmetic);
        }

        Ok(Evaluation { steps: reducer.into_steps(),
                        value,
                        stages })
    }
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(OperatorRegistry::shared())
    }
}

/// Extracts the value of the single token a full reduction must leave.
fn final_value(tokens: &[Token]) -> EvalResult<f64> {
    match tokens {
        [] => Err(EvalError::EmptyResult),
        [Token { value: Some(value),
                 .. }] => Ok(*value),
        [token] => Err(EvalError::non_compliant(format!("operator '{}' in {} was never applied",
                                                        token.text, token.span))),
        [first, .., last] => Err(EvalError::non_compliant(format!("{} tokens remain in [{}-{}] after reduction",
                                                                  tokens.len(),
                                                                  first.span.start,
                                                                  last.span.end))),
    }
}
