use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        runtime::{class::INIT_METHOD, Class, ClassInstance, Closure, ObjectHolder, Value},
    },
};

impl Context<'_> {
    /// Resolves a variable path against a scope.
    ///
    /// The first name is looked up in the scope; every further name descends
    /// into the fields of the instance found so far.
    ///
    /// # Errors
    /// Fails when the first name is unbound, a middle value is not a class
    /// instance, or a field is missing.
    pub fn eval_variable(closure: &Closure, path: &[String]) -> EvalResult<ObjectHolder> {
        let Some((first, rest)) = path.split_first() else {
            return Err(RuntimeError::UndefinedVariable { name: String::new() });
        };
        let mut holder = closure.get(first)
                                .cloned()
                                .ok_or_else(|| RuntimeError::UndefinedVariable { name:
                                                                                     first.clone() })?;
        for name in rest {
            holder = field_of(&holder, name)?;
        }
        Ok(holder)
    }

    /// Stores the value of `value` into a field of the instance that
    /// `object` resolves to, and returns the stored holder.
    ///
    /// The right-hand side is evaluated exactly once.
    ///
    /// # Errors
    /// Fails when the path does not resolve to a class instance or either
    /// evaluation fails.
    pub fn execute_field_assignment(&mut self,
                                    object: &[String],
                                    field: &str,
                                    value: &Expr,
                                    closure: &Closure)
                                    -> EvalResult<ObjectHolder> {
        let target = Self::eval_variable(closure, object)?;
        let stored = self.eval(value, closure)?;

        let Some(target) = target.object() else {
            return Err(RuntimeError::NotAnInstance { found: "None".to_owned() });
        };
        match &mut *target.borrow_mut() {
            Value::Instance(instance) => {
                instance.fields_mut().insert(field.to_owned(), stored.clone());
                Ok(stored)
            },
            other => Err(RuntimeError::NotAnInstance { found: other.type_name() }),
        }
    }

    /// Evaluates `str(x)`: renders the operand into a buffer the way `print`
    /// would and wraps the buffer in a new string value.
    ///
    /// # Errors
    /// Propagates failures from evaluating or rendering the operand.
    pub fn eval_stringify(&mut self, value: &Expr, closure: &Closure) -> EvalResult<ObjectHolder> {
        let holder = self.eval(value, closure)?;
        let mut buffer = Vec::new();
        holder.print(&mut buffer, self)?;
        Ok(ObjectHolder::own(Value::String(String::from_utf8_lossy(&buffer).into_owned())))
    }

    /// Instantiates a class.
    ///
    /// When the class resolves an `__init__` whose parameter count matches,
    /// the arguments are evaluated left to right and the constructor runs on
    /// the fresh instance; otherwise the arguments are not evaluated at all.
    ///
    /// # Errors
    /// Propagates failures from argument evaluation and the constructor
    /// body.
    pub fn eval_new_instance(&mut self,
                             class: &Rc<Class>,
                             args: &[Expr],
                             closure: &Closure)
                             -> EvalResult<ObjectHolder> {
        let instance = ClassInstance::create(Rc::clone(class));
        if class.has_method(INIT_METHOD, args.len()) {
            let mut actual_args = Vec::with_capacity(args.len());
            for arg in args {
                actual_args.push(self.eval(arg, closure)?);
            }
            instance.call(INIT_METHOD, &actual_args, self)?;
        }
        Ok(instance)
    }

    /// Evaluates a method call: the receiver first, then the arguments left
    /// to right.
    ///
    /// When the receiver is not a class instance, or resolves no method of
    /// that name and arity, the call quietly yields an empty holder.
    ///
    /// # Errors
    /// Propagates failures from the receiver, the arguments, and the method
    /// body.
    pub fn eval_method_call(&mut self,
                            object: &Expr,
                            method: &str,
                            args: &[Expr],
                            closure: &Closure)
                            -> EvalResult<ObjectHolder> {
        let receiver = self.eval(object, closure)?;
        let mut actual_args = Vec::with_capacity(args.len());
        for arg in args {
            actual_args.push(self.eval(arg, closure)?);
        }
        if receiver.has_method(method, actual_args.len()) {
            receiver.call(method, &actual_args, self)
        } else {
            Ok(ObjectHolder::none())
        }
    }
}

/// Reads a field from the instance held by `holder`.
fn field_of(holder: &ObjectHolder, name: &str) -> EvalResult<ObjectHolder> {
    let Some(object) = holder.object() else {
        return Err(RuntimeError::NotAnInstance { found: "None".to_owned() });
    };
    let value = object.borrow();
    match &*value {
        Value::Instance(instance) => {
            instance.fields()
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedField { name: name.to_owned() })
        },
        other => Err(RuntimeError::NotAnInstance { found: other.type_name() }),
    }
}
