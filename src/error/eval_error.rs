use serde::Serialize;
use thiserror::Error;

/// Result type used throughout evaluation.
///
/// Every stage of the pipeline returns either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Machine-distinguishable category of an [`EvalError`].
///
/// Embedders that need to branch on the failure (for example to pick an HTTP
/// status or a localized message) should match on this rather than on the
/// rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// A numeric literal could not be parsed.
    MalformedNumber,
    /// A symbol is not in the operator table.
    UnknownOperator,
    /// A non-sign operator appeared where only sign symbols may chain.
    IllegalOperator,
    /// The expression is incomplete or leaves dangling tokens.
    NonCompliantExpression,
    /// The result is not a number.
    IllegalArithmetic,
    /// Reduction produced no tokens at all.
    EmptyResult,
    /// The input contained nothing to evaluate.
    EmptyExpression,
    /// The file holding the expression could not be read.
    UnreadableInput,
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// A numeric run such as `1..2` is not a valid floating-point literal.
    #[error("Illegal number '{text}' at token {index}.")]
    MalformedNumber {
        /// The offending literal text.
        text:  String,
        /// Sequential token index of the literal.
        index: usize,
    },
    /// A symbol could not be resolved to an operator.
    #[error("Unknown operator '{symbol}' in [{start}-{end}].")]
    UnknownOperator {
        /// The unresolved symbol.
        symbol: String,
        /// First token index covered by the symbol.
        start:  usize,
        /// Last token index covered by the symbol.
        end:    usize,
    },
    /// Two operators were chained that cannot fold into a sign, e.g. `2**3`.
    #[error("Illegal duplicated operator '{symbol}' in [{start}-{end}].")]
    IllegalOperator {
        /// The operator that may not be chained.
        symbol: String,
        /// First token index covered by the symbol.
        start:  usize,
        /// Last token index covered by the symbol.
        end:    usize,
    },
    /// An operand is missing or tokens were left over after the last pass.
    #[error("Non-compliant expression: {details}.")]
    NonCompliantExpression {
        /// What could not be reduced.
        details: String,
    },
    /// The final value is NaN.
    #[error("Illegal arithmetic: maybe you want to divide by 0 or try to root a negative number.")]
    IllegalArithmetic,
    /// Reduction consumed every token. Indicates a bug rather than bad input.
    #[error("Unknown error: reduction left no result.")]
    EmptyResult,
    /// Nothing but whitespace was supplied.
    #[error("Expression cannot be empty.")]
    EmptyExpression,
    /// The expression file could not be read.
    #[error("Failed to read the input file '{path}': {reason}.")]
    UnreadableInput {
        /// Path as given by the caller.
        path:   String,
        /// The underlying I/O error, rendered.
        reason: String,
    },
}

impl EvalError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use stepwise::error::{ErrorKind, EvalError};
    ///
    /// assert_eq!(EvalError::IllegalArithmetic.kind(), ErrorKind::IllegalArithmetic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
            Self::IllegalOperator { .. } => ErrorKind::IllegalOperator,
            Self::NonCompliantExpression { .. } => ErrorKind::NonCompliantExpression,
            Self::IllegalArithmetic => ErrorKind::IllegalArithmetic,
            Self::EmptyResult => ErrorKind::EmptyResult,
            Self::EmptyExpression => ErrorKind::EmptyExpression,
            Self::UnreadableInput { .. } => ErrorKind::UnreadableInput,
        }
    }

    pub(crate) fn non_compliant(details: impl Into<String>) -> Self {
        Self::NonCompliantExpression { details: details.into() }
    }
}
