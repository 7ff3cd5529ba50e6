use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        runtime::{Closure, ObjectHolder, Value},
    },
};

impl Context<'_> {
    /// Evaluates a short-circuit `or`.
    ///
    /// The right operand is only evaluated when the left one is falsy; the
    /// result is always a boolean.
    ///
    /// # Errors
    /// Propagates failures from evaluating the operands.
    pub fn eval_or(&mut self, left: &Expr, right: &Expr, closure: &Closure) -> EvalResult<ObjectHolder> {
        if self.eval(left, closure)?.is_true() {
            return Ok(ObjectHolder::own(Value::Bool(true)));
        }
        let rhs = self.eval(right, closure)?;
        Ok(ObjectHolder::own(Value::Bool(rhs.is_true())))
    }

    /// Evaluates a short-circuit `and`.
    ///
    /// The right operand is only evaluated when the left one is truthy; the
    /// result is always a boolean.
    ///
    /// # Errors
    /// Propagates failures from evaluating the operands.
    pub fn eval_and(&mut self,
                    left: &Expr,
                    right: &Expr,
                    closure: &Closure)
                    -> EvalResult<ObjectHolder> {
        if !self.eval(left, closure)?.is_true() {
            return Ok(ObjectHolder::own(Value::Bool(false)));
        }
        let rhs = self.eval(right, closure)?;
        Ok(ObjectHolder::own(Value::Bool(rhs.is_true())))
    }

    /// Evaluates `not`, negating the operand's truthiness.
    ///
    /// # Errors
    /// Propagates failures from evaluating the operand.
    pub fn eval_not(&mut self, value: &Expr, closure: &Closure) -> EvalResult<ObjectHolder> {
        let operand = self.eval(value, closure)?;
        Ok(ObjectHolder::own(Value::Bool(!operand.is_true())))
    }
}
