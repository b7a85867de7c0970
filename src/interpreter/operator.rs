/// Operator definitions.
///
/// Declares the closed set of built-in operators, their arity and precedence
/// class, and the arithmetic each one performs.
pub mod core;

/// Operator lookup.
///
/// Resolves symbols to operators and classifies which symbols may chain as
/// signs in front of a number.
pub mod registry;
