use std::{
    cell::RefCell,
    io::Write,
    rc::{Rc, Weak},
};

use fxhash::FxHashMap;

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    runtime::class::{Class, ClassInstance, STR_METHOD},
};

/// A runtime value shared between holders.
pub type Object = Rc<RefCell<Value>>;

/// A single lexical frame: the global scope, a method's locals, or an
/// instance's fields. Maps names to the holders bound to them.
pub type Closure = FxHashMap<String, ObjectHolder>;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, method returns, and conditions.
#[derive(Debug)]
pub enum Value {
    /// The absence of a value, printed as `None`.
    None,
    /// A 32 bit signed integer.
    Number(i32),
    /// A string of bytes, printed without quoting.
    String(String),
    /// A boolean, printed as `True` or `False`.
    Bool(bool),
    /// A class value, as bound by a class definition.
    Class(Rc<Class>),
    /// An instance of a user-defined class.
    Instance(ClassInstance),
}

impl Value {
    /// Describes the value's type for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::None => "None".to_owned(),
            Self::Number(_) => "a number".to_owned(),
            Self::String(_) => "a string".to_owned(),
            Self::Bool(_) => "a boolean".to_owned(),
            Self::Class(class) => format!("class '{}'", class.name()),
            Self::Instance(instance) => format!("an instance of '{}'", instance.class().name()),
        }
    }
}

/// A shared-ownership wrapper around a [`Value`].
///
/// A holder is in one of three states:
/// - **empty**: wraps no value at all; the result of statements that
///   produce nothing. Prints as `None` and is falsy.
/// - **owning**: keeps the wrapped value alive.
/// - **sharing**: a non-owning view of a value owned elsewhere. The owner
///   must outlive the share; the one place the interpreter creates such a
///   view is the `self` entry inside an instance's own fields, which would
///   otherwise keep the instance alive forever.
///
/// Cloning a holder never copies the value: clones of an owning holder share
/// ownership of the same object.
#[derive(Debug, Clone, Default)]
pub struct ObjectHolder {
    data: Option<ObjectRef>,
}

#[derive(Debug, Clone)]
enum ObjectRef {
    Owned(Object),
    Shared(Weak<RefCell<Value>>),
}

impl ObjectHolder {
    /// Creates an empty holder.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a holder owning a fresh object with the given value.
    #[must_use]
    pub fn own(value: Value) -> Self {
        Self { data: Some(ObjectRef::Owned(Rc::new(RefCell::new(value)))) }
    }

    /// Creates a non-owning holder viewing an existing object.
    #[must_use]
    pub fn share(object: &Object) -> Self {
        Self { data: Some(ObjectRef::Shared(Rc::downgrade(object))) }
    }

    /// Adopts an already shared object as an owning holder.
    pub(crate) fn from_object(object: Object) -> Self {
        Self { data: Some(ObjectRef::Owned(object)) }
    }

    /// Returns the held object, or `None` for an empty holder.
    #[must_use]
    pub fn object(&self) -> Option<Object> {
        match &self.data {
            None => None,
            Some(ObjectRef::Owned(object)) => Some(Rc::clone(object)),
            Some(ObjectRef::Shared(weak)) => weak.upgrade(),
        }
    }

    /// Returns `true` when the holder wraps no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.object().is_none()
    }

    /// Returns `true` when the holder is empty or wraps the `None` value.
    #[must_use]
    pub fn is_none_like(&self) -> bool {
        match self.object() {
            None => true,
            Some(object) => matches!(&*object.borrow(), Value::None),
        }
    }

    /// Returns the held number, if the holder wraps one.
    #[must_use]
    pub fn as_number(&self) -> Option<i32> {
        self.object().and_then(|object| match &*object.borrow() {
                         Value::Number(value) => Some(*value),
                         _ => None,
                     })
    }

    /// Returns the held boolean, if the holder wraps one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.object().and_then(|object| match &*object.borrow() {
                         Value::Bool(value) => Some(*value),
                         _ => None,
                     })
    }

    /// Returns a copy of the held string, if the holder wraps one.
    #[must_use]
    pub fn as_string(&self) -> Option<String> {
        self.object().and_then(|object| match &*object.borrow() {
                         Value::String(value) => Some(value.clone()),
                         _ => None,
                     })
    }

    /// Describes the held value's type for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self.object() {
            None => "None".to_owned(),
            Some(object) => object.borrow().type_name(),
        }
    }

    /// Computes the truth value of the holder.
    ///
    /// Non-empty strings, non-zero numbers, and `True` are truthy; all other
    /// values (including every class and class instance) and the empty
    /// holder are falsy.
    #[must_use]
    pub fn is_true(&self) -> bool {
        match self.object() {
            None => false,
            Some(object) => match &*object.borrow() {
                Value::String(value) => !value.is_empty(),
                Value::Number(value) => *value != 0,
                Value::Bool(value) => *value,
                _ => false,
            },
        }
    }

    /// Prints the held value into `out`.
    ///
    /// An empty holder and the `None` value print as `None`. An instance
    /// whose class (or any ancestor) defines a zero-parameter `__str__`
    /// prints that method's result; any other instance prints the address of
    /// its object. Side effects of a `__str__` body go to the context's own
    /// output, not into `out`.
    ///
    /// # Errors
    /// Propagates failures of `__str__` dispatch and of the sink itself.
    pub fn print(&self, out: &mut dyn Write, context: &mut Context) -> EvalResult<()> {
        let Some(object) = self.object() else {
            write!(out, "None")?;
            return Ok(());
        };

        let custom_repr = matches!(&*object.borrow(),
                                   Value::Instance(instance) if instance.has_method(STR_METHOD, 0));
        if custom_repr {
            let rendered = self.call(STR_METHOD, &[], context)?;
            return rendered.print(out, context);
        }

        match &*object.borrow() {
            Value::None => write!(out, "None")?,
            Value::Number(value) => write!(out, "{value}")?,
            Value::String(value) => out.write_all(value.as_bytes())?,
            Value::Bool(value) => write!(out, "{}", if *value { "True" } else { "False" })?,
            Value::Class(class) => write!(out, "Class {}", class.name())?,
            Value::Instance(_) => write!(out, "{:p}", Rc::as_ptr(&object))?,
        }
        Ok(())
    }
}

impl From<Value> for ObjectHolder {
    fn from(value: Value) -> Self {
        Self::own(value)
    }
}
