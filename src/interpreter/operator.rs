/// Static description of one binary operator.
///
/// The four specs live in [`OPERATORS`] and are never mutated, so they can be
/// read from any number of threads without synchronization.
#[derive(Debug)]
pub struct OperatorSpec {
    /// The operator as written in an expression.
    pub symbol:     char,
    /// Binding strength; higher binds tighter.
    pub precedence: u8,
    /// The arithmetic the operator performs on `(lhs, rhs)`.
    pub apply:      fn(f64, f64) -> f64,
}

/// Precedence table indexed by [`Operator`] discriminant.
pub static OPERATORS: [OperatorSpec; 4] = [OperatorSpec { symbol:     '+',
                                                          precedence: 1,
                                                          apply:      |l, r| l + r, },
                                           OperatorSpec { symbol:     '-',
                                                          precedence: 1,
                                                          apply:      |l, r| l - r, },
                                           OperatorSpec { symbol:     '*',
                                                          precedence: 2,
                                                          apply:      |l, r| l * r, },
                                           OperatorSpec { symbol:     '/',
                                                          precedence: 2,
                                                          apply:      |l, r| l / r, }];

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add = 0,
    /// `-`
    Sub = 1,
    /// `*`
    Mul = 2,
    /// `/`
    Div = 3,
}

impl Operator {
    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the static spec for this operator.
    #[must_use]
    pub fn spec(self) -> &'static OperatorSpec {
        &OPERATORS[self as usize]
    }

    #[must_use]
    pub fn symbol(self) -> char {
        self.spec().symbol
    }

    #[must_use]
    pub fn precedence(self) -> u8 {
        self.spec().precedence
    }

    /// Applies the operator to `lhs` and `rhs` with plain IEEE-754 semantics.
    ///
    /// Division by zero is not special-cased here: `1 / 0` is infinity.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(8.0, 3.0), 5.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        (self.spec().apply)(lhs, rhs)
    }

    /// Tells whether `pending`, already on the operator stack, must be reduced
    /// before `incoming` is pushed.
    ///
    /// Equal precedence reduces, which makes every operator left-associative.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::operator::Operator;
    ///
    /// assert!(Operator::should_reduce_before(Operator::Mul, Operator::Add));
    /// assert!(Operator::should_reduce_before(Operator::Sub, Operator::Add));
    /// assert!(!Operator::should_reduce_before(Operator::Add, Operator::Div));
    /// ```
    #[must_use]
    pub fn should_reduce_before(pending: Self, incoming: Self) -> bool {
        pending.precedence() >= incoming.precedence()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
