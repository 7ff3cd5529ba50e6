use crate::{
    ast::{BinaryOperator, Comparator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        runtime::{class::ADD_METHOD, compare, ObjectHolder, Value},
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation on two held values.
    ///
    /// Two numbers compute with checked 32 bit arithmetic. `+` additionally
    /// concatenates two strings, and with a class instance on the left
    /// dispatches to its `__add__` method. Everything else is a type
    /// mismatch.
    ///
    /// # Errors
    /// Division by zero, arithmetic overflow, and unsupported operand
    /// combinations.
    pub fn eval_binary_op(&mut self,
                          op: BinaryOperator,
                          lhs: &ObjectHolder,
                          rhs: &ObjectHolder)
                          -> EvalResult<ObjectHolder> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) {
            let result = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                Div => {
                    if b == 0 {
                        return Err(RuntimeError::DivisionByZero);
                    }
                    a.checked_div(b)
                },
            };
            let result = result.ok_or(RuntimeError::IntegerOverflow)?;
            return Ok(ObjectHolder::own(Value::Number(result)));
        }

        if op == Add {
            if let (Some(a), Some(b)) = (lhs.as_string(), rhs.as_string()) {
                return Ok(ObjectHolder::own(Value::String(a + &b)));
            }
            if lhs.has_method(ADD_METHOD, 1) {
                return lhs.call(ADD_METHOD, &[rhs.clone()], self);
            }
        }

        Err(RuntimeError::TypeMismatch { details: format!("operator '{op}' is not defined for {} and {}",
                                                          lhs.type_name(),
                                                          rhs.type_name()), })
    }

    /// Evaluates a comparison on two held values, yielding a boolean.
    ///
    /// # Errors
    /// Fails when the underlying comparison protocol cannot relate the two
    /// values.
    pub fn eval_comparison(&mut self,
                           op: Comparator,
                           lhs: &ObjectHolder,
                           rhs: &ObjectHolder)
                           -> EvalResult<ObjectHolder> {
        let result = match op {
            Comparator::Equal => compare::equal(lhs, rhs, self)?,
            Comparator::NotEqual => compare::not_equal(lhs, rhs, self)?,
            Comparator::Less => compare::less(lhs, rhs, self)?,
            Comparator::LessOrEqual => compare::less_or_equal(lhs, rhs, self)?,
            Comparator::Greater => compare::greater(lhs, rhs, self)?,
            Comparator::GreaterOrEqual => compare::greater_or_equal(lhs, rhs, self)?,
        };
        Ok(ObjectHolder::own(Value::Bool(result)))
    }
}
