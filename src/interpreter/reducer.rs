/// The precedence passes.
///
/// Rewrites the token sequence once per precedence class, folding each
/// operator application into a synthetic number and recording it as a step.
pub mod core;

/// Right-hand operand gathering.
///
/// Locates the number an operator applies to and folds any chain of sign
/// symbols in front of it.
pub mod operand;

/// The scratch stack used while a pass rebuilds the sequence.
pub mod stack;
