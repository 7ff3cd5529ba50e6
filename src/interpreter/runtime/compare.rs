use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        runtime::{
            class::{EQ_METHOD, LT_METHOD},
            object::{ObjectHolder, Value},
        },
    },
};

/// Compares two held values for equality.
///
/// Two `None`-like holders (empty, or wrapping the `None` value) are equal.
/// Same-kind primitives compare by value. A class instance on the left with
/// an `__eq__` method of one parameter decides by that method's truthiness.
///
/// # Errors
/// Any other combination cannot be compared and fails with a type mismatch.
pub fn equal(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut Context) -> EvalResult<bool> {
    if lhs.is_none_like() && rhs.is_none_like() {
        return Ok(true);
    }

    if let (Some(left), Some(right)) = (lhs.object(), rhs.object()) {
        match (&*left.borrow(), &*right.borrow()) {
            (Value::Number(a), Value::Number(b)) => return Ok(a == b),
            (Value::String(a), Value::String(b)) => return Ok(a == b),
            (Value::Bool(a), Value::Bool(b)) => return Ok(a == b),
            _ => {},
        }
    }

    if lhs.has_method(EQ_METHOD, 1) {
        let verdict = lhs.call(EQ_METHOD, &[rhs.clone()], context)?;
        return Ok(verdict.is_true());
    }

    Err(RuntimeError::TypeMismatch { details: format!("cannot compare {} and {} for equality",
                                                      lhs.type_name(),
                                                      rhs.type_name()), })
}

/// Compares two held values for strict ordering.
///
/// Numbers order numerically, strings lexicographically, and booleans with
/// `False` before `True`. A class instance on the left with an `__lt__`
/// method of one parameter decides by that method's truthiness.
///
/// # Errors
/// Any other combination cannot be ordered and fails with a type mismatch.
pub fn less(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut Context) -> EvalResult<bool> {
    if let (Some(left), Some(right)) = (lhs.object(), rhs.object()) {
        match (&*left.borrow(), &*right.borrow()) {
            (Value::Number(a), Value::Number(b)) => return Ok(a < b),
            (Value::String(a), Value::String(b)) => return Ok(a < b),
            (Value::Bool(a), Value::Bool(b)) => return Ok(a < b),
            _ => {},
        }
    }

    if lhs.has_method(LT_METHOD, 1) {
        let verdict = lhs.call(LT_METHOD, &[rhs.clone()], context)?;
        return Ok(verdict.is_true());
    }

    Err(RuntimeError::TypeMismatch { details: format!("cannot compare {} and {} for ordering",
                                                      lhs.type_name(),
                                                      rhs.type_name()), })
}

/// The negation of [`equal`].
///
/// # Errors
/// Fails whenever [`equal`] fails.
pub fn not_equal(lhs: &ObjectHolder,
                 rhs: &ObjectHolder,
                 context: &mut Context)
                 -> EvalResult<bool> {
    Ok(!equal(lhs, rhs, context)?)
}

/// `lhs > rhs`, derived as neither less nor equal.
///
/// # Errors
/// Fails whenever [`less`] or [`equal`] fails.
pub fn greater(lhs: &ObjectHolder, rhs: &ObjectHolder, context: &mut Context) -> EvalResult<bool> {
    Ok(!less(lhs, rhs, context)? && !equal(lhs, rhs, context)?)
}

/// `lhs <= rhs`, derived as less or equal.
///
/// # Errors
/// Fails whenever [`less`] or [`equal`] fails.
pub fn less_or_equal(lhs: &ObjectHolder,
                     rhs: &ObjectHolder,
                     context: &mut Context)
                     -> EvalResult<bool> {
    Ok(less(lhs, rhs, context)? || equal(lhs, rhs, context)?)
}

/// `lhs >= rhs`, derived as not less.
///
/// # Errors
/// Fails whenever [`less`] fails.
pub fn greater_or_equal(lhs: &ObjectHolder,
                        rhs: &ObjectHolder,
                        context: &mut Context)
                        -> EvalResult<bool> {
    Ok(!less(lhs, rhs, context)?)
}
