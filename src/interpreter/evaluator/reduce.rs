use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{DivisionPolicy, EvalResult, Evaluator, Pending},
        operator::Operator,
    },
};

impl Evaluator {
    /// Handles an incoming binary operator.
    ///
    /// Pending operators that bind at least as tightly as `op` are reduced
    /// first, stopping at the nearest open parenthesis. `op` is then pushed.
    pub(crate) fn push_operator(&mut self, op: Operator, column: usize) -> EvalResult<()> {
        while let Some(&Pending::Operator { op: top, .. }) = self.operators.last()
              && Operator::should_reduce_before(top, op)
        {
            self.reduce_top()?;
        }
        self.operators.push(Pending::Operator { op, column });
        Ok(())
    }

    /// Handles a closing parenthesis.
    ///
    /// Reduces every operator of the innermost group, then discards its `(`.
    /// The group must leave exactly one value behind.
    pub(crate) fn close_group(&mut self, column: usize) -> EvalResult<()> {
        loop {
            match self.operators.last().copied() {
                Some(Pending::Operator { .. }) => self.reduce_top()?,
                Some(Pending::OpenParen { column: opened, depth }) => {
                    self.operators.pop();
                    return match self.operands.len().saturating_sub(depth) {
                        0 => Err(EvalError::InsufficientOperands { symbol: ')', column }),
                        1 => Ok(()),
                        n => Err(EvalError::MalformedExpression { details:
                                                                      format!("group opened at column {opened} holds {n} values without an operator") }),
                    };
                },
                None => return Err(EvalError::UnbalancedParentheses { column }),
            }
        }
    }

    /// Pops the top operator and its two operands, and pushes the result.
    ///
    /// Operands below the innermost open parenthesis belong to the enclosing
    /// group and are never taken.
    ///
    /// # Errors
    /// - [`EvalError::InsufficientOperands`] if fewer than two operands are
    ///   available to the operator.
    /// - [`EvalError::DivisionByZero`] when dividing by zero under
    ///   [`DivisionPolicy::Reject`].
    pub(crate) fn reduce_top(&mut self) -> EvalResult<()> {
        let Some(Pending::Operator { op, column }) = self.operators.pop() else {
            return Err(EvalError::MalformedExpression { details: "nothing to reduce".into() });
        };

        if self.operands.len() < self.group_floor() + 2 {
            return Err(EvalError::InsufficientOperands { symbol: op.symbol(),
                                                         column });
        }
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::InsufficientOperands { symbol: op.symbol(),
                                                         column });
        };

        if op == Operator::Div && right == 0.0 && self.options.division == DivisionPolicy::Reject {
            return Err(EvalError::DivisionByZero { column });
        }

        let value = op.apply(left, right);
        trace!(%op, left, right, value, "reduced");
        self.operands.push(value);
        Ok(())
    }

    /// Size of the operand stack when the innermost open group started.
    fn group_floor(&self) -> usize {
        self.operators
            .iter()
            .rev()
            .find_map(|pending| match pending {
                Pending::OpenParen { depth, .. } => Some(*depth),
                Pending::Operator { .. } => None,
            })
            .unwrap_or(0)
    }
}
