use std::{io::Write, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::runtime::{Closure, ObjectHolder, Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Outcome of executing a statement.
///
/// Almost every statement completes with [`Flow::Next`] and execution moves
/// on. A `return` statement instead produces [`Flow::Return`]; compound
/// statements and conditionals pass it upward untouched, skipping everything
/// after the `return`, until a method body absorbs it and yields the carried
/// value. A `return` never travels as a [`RuntimeError`].
#[derive(Debug)]
pub enum Flow {
    /// The statement completed; execution continues with the next one.
    Next(ObjectHolder),
    /// A `return` is unwinding toward the enclosing method body.
    Return(ObjectHolder),
}

impl Flow {
    /// Extracts the carried value, whichever way the statement completed.
    #[must_use]
    pub fn value(self) -> ObjectHolder {
        match self {
            Self::Next(value) | Self::Return(value) => value,
        }
    }
}

/// Stores the runtime execution context.
///
/// The context carries the output sink that `print` statements and instance
/// rendering write to. All evaluation methods are implemented on it; the
/// scope being executed against is passed alongside, since methods and the
/// top level each bring their own.
pub struct Context<'o> {
    output: &'o mut dyn Write,
}

impl<'o> Context<'o> {
    /// Creates a context writing program output into `output`.
    pub fn new(output: &'o mut dyn Write) -> Self {
        Self { output }
    }

    /// Evaluates an expression against a scope and returns the resulting
    /// holder.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for undefined names, type mismatches,
    /// arithmetic failures, or failed method dispatch.
    pub fn eval(&mut self, expr: &Expr, closure: &Closure) -> EvalResult<ObjectHolder> {
        match expr {
            Expr::NumericConst(value) => Ok(ObjectHolder::own(Value::Number(*value))),
            Expr::StringConst(value) => Ok(ObjectHolder::own(Value::String(value.clone()))),
            Expr::BoolConst(value) => Ok(ObjectHolder::own(Value::Bool(*value))),
            Expr::NoneConst => Ok(ObjectHolder::own(Value::None)),
            Expr::Variable { path } => Self::eval_variable(closure, path),
            Expr::BinaryOp { op, left, right } => {
                let lhs = self.eval(left, closure)?;
                let rhs = self.eval(right, closure)?;
                self.eval_binary_op(*op, &lhs, &rhs)
            },
            Expr::Comparison { op, left, right } => {
                let lhs = self.eval(left, closure)?;
                let rhs = self.eval(right, closure)?;
                self.eval_comparison(*op, &lhs, &rhs)
            },
            Expr::Or { left, right } => self.eval_or(left, right, closure),
            Expr::And { left, right } => self.eval_and(left, right, closure),
            Expr::Not { value } => self.eval_not(value, closure),
            Expr::Stringify { value } => self.eval_stringify(value, closure),
            Expr::NewInstance { class, args } => self.eval_new_instance(class, args, closure),
            Expr::MethodCall { object,
                               method,
                               args, } => self.eval_method_call(object, method, args, closure),
        }
    }

    /// Executes a statement against a scope.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when any contained expression fails, a
    /// condition is not a boolean, or the output sink rejects a write.
    pub fn execute(&mut self, statement: &Statement, closure: &mut Closure) -> EvalResult<Flow> {
        match statement {
            Statement::Assignment { var, value } => {
                let holder = self.eval(value, closure)?;
                closure.insert(var.clone(), holder.clone());
                Ok(Flow::Next(holder))
            },
            Statement::FieldAssignment { object,
                                         field,
                                         value, } => {
                let stored = self.execute_field_assignment(object, field, value, closure)?;
                Ok(Flow::Next(stored))
            },
            Statement::Expression { expr } => Ok(Flow::Next(self.eval(expr, closure)?)),
            Statement::Print { args } => {
                self.execute_print(args, closure)?;
                Ok(Flow::Next(ObjectHolder::none()))
            },
            Statement::Return { value } => Ok(Flow::Return(self.eval(value, closure)?)),
            Statement::IfElse { condition,
                                if_body,
                                else_body, } => {
                let verdict = self.eval(condition, closure)?;
                let Some(flag) = verdict.as_bool() else {
                    return Err(RuntimeError::ExpectedBoolean { found: verdict.type_name() });
                };
                if flag {
                    self.execute(if_body, closure)
                } else if let Some(else_body) = else_body {
                    self.execute(else_body, closure)
                } else {
                    Ok(Flow::Next(ObjectHolder::none()))
                }
            },
            Statement::Compound { statements } => {
                for statement in statements {
                    if let Flow::Return(value) = self.execute(statement, closure)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Next(ObjectHolder::none()))
            },
            Statement::ClassDefinition { class } => {
                closure.insert(class.name().to_owned(),
                               ObjectHolder::own(Value::Class(Rc::clone(class))));
                Ok(Flow::Next(ObjectHolder::none()))
            },
            Statement::MethodBody { body } => match self.execute(body, closure)? {
                Flow::Return(value) => Ok(Flow::Next(value)),
                Flow::Next(_) => Ok(Flow::Next(ObjectHolder::none())),
            },
        }
    }

    /// Prints the arguments space-separated, ending with a newline.
    ///
    /// Each argument is evaluated and rendered in turn, so output produced
    /// by the evaluation itself lands before the rendered value.
    fn execute_print(&mut self, args: &[Expr], closure: &Closure) -> EvalResult<()> {
        let mut rendered = Vec::new();
        for (index, arg) in args.iter().enumerate() {
            if index > 0 {
                self.output.write_all(b" ")?;
            }
            let holder = self.eval(arg, closure)?;
            rendered.clear();
            holder.print(&mut rendered, self)?;
            self.output.write_all(&rendered)?;
        }
        self.output.write_all(b"\n")?;
        Ok(())
    }
}
