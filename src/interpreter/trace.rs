use std::fmt::Display;

use serde::Serialize;

use crate::interpreter::lexer::Token;

/// One operator application, as it would be written out by hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Left operand; `None` for prefix operators and leading signs.
    pub left_operand:  Option<f64>,
    pub right_operand: f64,
    pub result:        f64,
    pub symbol:        String,
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.left_operand {
            Some(left) => write!(f,
                                 "{left} {} {} = {}",
                                 self.symbol, self.right_operand, self.result),
            None => write!(f, "{} {} = {}", self.symbol, self.right_operand, self.result),
        }
    }
}

/// The token sequence as it stood after one stage of evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    /// `INIT` for the tokenizer output, otherwise the precedence class.
    pub label:  String,
    pub tokens: Vec<Token>,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.label)?;
        for token in &self.tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

/// A successful evaluation: the value plus everything needed to show the
/// work that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Every operator application in the order it was performed.
    pub steps:  Vec<Step>,
    pub value:  f64,
    /// Snapshots of the token sequence, starting with the tokenizer output.
    pub stages: Vec<Stage>,
}
