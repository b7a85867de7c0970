use std::{collections::HashMap, sync::LazyLock};

use crate::interpreter::operator::core::Operator;

static SHARED: LazyLock<OperatorRegistry> = LazyLock::new(OperatorRegistry::new);

/// Symbol table mapping operator symbols to [`Operator`]s.
///
/// The table is filled once at construction and never mutated afterwards, so
/// a registry can be shared freely between threads. Resolving the same symbol
/// twice always yields the same operator.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    operators: HashMap<&'static str, Operator>,
}

impl OperatorRegistry {
    /// Builds a registry holding every built-in operator.
    #[must_use]
    pub fn new() -> Self {
        let operators = Operator::ALL.iter()
                                     .map(|op| (op.symbol(), *op))
                                     .collect::<HashMap<_, _>>();
        log::trace!("operator registry populated with {} symbols", operators.len());
        Self { operators }
    }

    /// Returns the process-wide registry.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Resolves a symbol to its operator.
    ///
    /// # Example
    /// ```
    /// use stepwise::interpreter::operator::{core::Operator, registry::OperatorRegistry};
    ///
    /// let registry = OperatorRegistry::new();
    /// assert_eq!(registry.resolve("%"), Some(Operator::Remainder));
    /// assert_eq!(registry.resolve("~"), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, symbol: &str) -> Option<Operator> {
        self.operators.get(symbol).copied()
    }

    /// Reports whether `symbol` is in the table.
    #[must_use]
    pub fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    /// Reports whether `symbol` may chain in front of a number to form a
    /// signed literal, as in `3*--4`. Only the additive signs qualify.
    #[must_use]
    pub fn is_self_compounding(&self, symbol: &str) -> bool {
        matches!(self.resolve(symbol), Some(Operator::Plus | Operator::Minus))
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
