/// The evaluator module drives a complete evaluation.
///
/// It tokenizes the input, runs one reduction pass per precedence class,
/// validates the single remaining token and assembles the [`Evaluation`]
/// together with its trace.
///
/// # Responsibilities
/// - Orders the passes from the tightest to the loosest precedence class.
/// - Records a stage snapshot before the first pass and after every pass.
/// - Turns a NaN result into an illegal-arithmetic error.
///
/// [`Evaluation`]: trace::Evaluation
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer strips whitespace, groups the input into runs of numeric and
/// symbol characters, and produces number and operator tokens indexed by
/// their position in the token sequence.
///
/// # Responsibilities
/// - Parses numeric runs as floating-point literals.
/// - Splits symbol runs into known operator symbols.
/// - Reports malformed numeric literals.
pub mod lexer;
/// The operator module defines the built-in operator table.
pub mod operator;
/// The reducer module applies operators one precedence class at a time.
///
/// # Responsibilities
/// - Resolves operator tokens and rejects unknown symbols.
/// - Gathers operands, folding chains of sign symbols.
/// - Collapses each application into a synthetic number and records a step.
pub mod reducer;
/// Result and trace types handed back to the caller.
pub mod trace;
