use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        runtime::object::{Closure, Object, ObjectHolder, Value},
    },
};

/// Name of the constructor method called by instantiation.
pub const INIT_METHOD: &str = "__init__";
/// Name of the method that renders an instance for printing.
pub const STR_METHOD: &str = "__str__";
/// Name of the method dispatched for equality comparison.
pub const EQ_METHOD: &str = "__eq__";
/// Name of the method dispatched for ordering comparison.
pub const LT_METHOD: &str = "__lt__";
/// Name of the method dispatched for `+` with an instance on the left.
pub const ADD_METHOD: &str = "__add__";

/// Name every instance binds to itself in its own fields and every method
/// body finds in scope.
pub const SELF_NAME: &str = "self";

/// A method of a class: its name, formal parameter names, and body.
///
/// The implicit `self` parameter is not listed in `formal_params`; it is
/// bound separately on every call.
#[derive(Debug, Clone)]
pub struct Method {
    /// The method name, such as `__init__` or `area`.
    pub name:          String,
    /// The declared parameter names, in order, excluding `self`.
    pub formal_params: Vec<String>,
    /// The statement executed when the method is called.
    pub body:          Rc<Statement>,
}

/// A user-defined class: a name, methods in declaration order, and an
/// optional parent class. Immutable once constructed.
#[derive(Debug)]
pub struct Class {
    name:    String,
    methods: Vec<Method>,
    parent:  Option<Rc<Class>>,
}

impl Class {
    /// Creates a class. The name must not be empty.
    #[must_use]
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<Self>>) -> Self {
        debug_assert!(!name.is_empty());
        Self { name, methods, parent }
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves a method by name.
    ///
    /// Scans this class's own methods in declaration order, then the parent
    /// chain, so the nearest override wins.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods
            .iter()
            .find(|method| method.name == name)
            .or_else(|| self.parent.as_ref().and_then(|parent| parent.method(name)))
    }

    /// Returns `true` when `name` resolves to a method declaring exactly
    /// `argument_count` parameters.
    #[must_use]
    pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
        self.method(name)
            .is_some_and(|method| method.formal_params.len() == argument_count)
    }
}

/// An instance of a [`Class`]: a reference to its class plus a scope of
/// fields.
#[derive(Debug)]
pub struct ClassInstance {
    class:  Rc<Class>,
    fields: Closure,
}

impl ClassInstance {
    /// Creates an instance of `class` and returns an owning holder for it.
    ///
    /// The instance's fields start out with a single entry: `self`, bound to
    /// a non-owning share of the instance itself. The entry is never
    /// rebound, and because the share does not own the instance, dropping
    /// the returned holder (and every clone of it) still frees the object.
    #[must_use]
    pub fn create(class: Rc<Class>) -> ObjectHolder {
        let object: Object = Rc::new(RefCell::new(Value::Instance(Self { class,
                                                                         fields:
                                                                             Closure::default() })));
        let this = ObjectHolder::share(&object);
        if let Value::Instance(instance) = &mut *object.borrow_mut() {
            instance.fields.insert(SELF_NAME.to_owned(), this);
        }
        ObjectHolder::from_object(object)
    }

    /// Returns the instance's class.
    #[must_use]
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Returns the instance's fields.
    #[must_use]
    pub fn fields(&self) -> &Closure {
        &self.fields
    }

    /// Returns the instance's fields for mutation.
    pub fn fields_mut(&mut self) -> &mut Closure {
        &mut self.fields
    }

    /// Returns `true` when the instance's class chain resolves `name` to a
    /// method declaring exactly `argument_count` parameters.
    #[must_use]
    pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
        self.class.has_method(name, argument_count)
    }
}

impl ObjectHolder {
    /// Returns `true` when the holder wraps a class instance that has a
    /// method `name` of the given arity.
    #[must_use]
    pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
        self.object().is_some_and(|object| match &*object.borrow() {
                         Value::Instance(instance) => {
                             instance.has_method(name, argument_count)
                         },
                         _ => false,
                     })
    }

    /// Calls `method` on the held class instance.
    ///
    /// Builds a fresh scope with `self` bound to a share of the instance and
    /// each formal parameter bound to the matching argument, then executes
    /// the method body in it. A body that finishes without `return` yields
    /// an empty holder.
    ///
    /// # Errors
    /// Fails when the holder is not a class instance, the method does not
    /// resolve, the argument count does not match, or the body itself fails.
    pub fn call(&self,
                method: &str,
                actual_args: &[ObjectHolder],
                context: &mut Context)
                -> EvalResult<ObjectHolder> {
        let Some(object) = self.object() else {
            return Err(RuntimeError::NotAnInstance { found: "None".to_owned() });
        };
        let class = {
            let value = object.borrow();
            match &*value {
                Value::Instance(instance) => Rc::clone(instance.class()),
                other => return Err(RuntimeError::NotAnInstance { found: other.type_name() }),
            }
        };

        let Some(definition) = class.method(method) else {
            return Err(RuntimeError::UnknownMethod { class:  class.name().to_owned(),
                                                     method: method.to_owned(), });
        };
        if definition.formal_params.len() != actual_args.len() {
            return Err(RuntimeError::ArityMismatch { class:    class.name().to_owned(),
                                                     method:   method.to_owned(),
                                                     expected: definition.formal_params.len(),
                                                     found:    actual_args.len(), });
        }

        let mut locals = Closure::default();
        locals.insert(SELF_NAME.to_owned(), Self::share(&object));
        for (param, arg) in definition.formal_params.iter().zip(actual_args) {
            locals.insert(param.clone(), arg.clone());
        }

        let body = Rc::clone(&definition.body);
        let (Flow::Next(result) | Flow::Return(result)) = context.execute(&body, &mut locals)?;
        Ok(result)
    }
}
