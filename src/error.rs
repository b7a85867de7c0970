/// Evaluation errors.
///
/// Defines every failure that can occur while tokenizing or reducing an
/// expression, together with the machine-readable [`ErrorKind`] each failure
/// maps to.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError, EvalResult};
