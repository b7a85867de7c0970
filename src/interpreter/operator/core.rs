use std::fmt::Display;

/// Precedence class of an operator.
///
/// Classes are declared from tightest to loosest binding, so the derived
/// ordering is also the order in which the reducer visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Root-style prefix operators.
    High,
    /// Multiplicative operators.
    Medium,
    /// Additive operators.
    Low,
}

impl Precedence {
    /// Every class, tightest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Label used for the stage snapshot recorded after this class's pass.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl Display for Precedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Operand shape of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Takes only a right-hand operand.
    Prefix,
    /// Takes a left-hand and a right-hand operand.
    Infix,
}

/// A built-in arithmetic operator.
///
/// Operators are pure: [`Operator::apply`] depends only on its arguments.
/// The left operand is `None` for prefix operators and whenever no left
/// operand exists, which for the additive operators turns them into sign
/// symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Remainder,
    /// `?`
    SquareRoot,
}

impl Operator {
    /// Every built-in operator.
    pub const ALL: [Self; 6] = [Self::Plus,
                                Self::Minus,
                                Self::Multiply,
                                Self::Divide,
                                Self::Remainder,
                                Self::SquareRoot];

    /// The symbol this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::SquareRoot => "?",
        }
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::SquareRoot => Arity::Prefix,
            _ => Arity::Infix,
        }
    }

    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::SquareRoot => Precedence::High,
            Self::Multiply | Self::Divide | Self::Remainder => Precedence::Medium,
            Self::Plus | Self::Minus => Precedence::Low,
        }
    }

    /// Applies the operator.
    ///
    /// Invalid arithmetic is not rejected here: division or remainder by
    /// zero, the square root of a negative number and a multiplicative
    /// operator without a left operand all yield NaN.
    ///
    /// # Example
    /// ```
    /// use stepwise::interpreter::operator::core::Operator;
    ///
    /// assert_eq!(Operator::Multiply.apply(Some(3.0), 4.0), 12.0);
    /// assert_eq!(Operator::Minus.apply(None, 5.0), -5.0);
    /// assert_eq!(Operator::SquareRoot.apply(None, 9.0), 3.0);
    /// assert!(Operator::Divide.apply(Some(1.0), 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: Option<f64>, right: f64) -> f64 {
        match (self, left) {
            (Self::Plus, Some(l)) => l + right,
            (Self::Plus, None) => right,
            (Self::Minus, Some(l)) => l - right,
            (Self::Minus, None) => -right,
            (Self::Multiply, Some(l)) => l * right,
            (Self::Divide, Some(_)) if right == 0.0 => f64::NAN,
            (Self::Divide, Some(l)) => l / right,
            (Self::Remainder, Some(l)) => l % right,
            (Self::SquareRoot, _) => right.sqrt(),
            (Self::Multiply | Self::Divide | Self::Remainder, None) => f64::NAN,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
