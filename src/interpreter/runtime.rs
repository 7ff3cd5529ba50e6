/// Classes, methods, and class instances.
///
/// Defines the class model of the language: named classes with an ordered
/// method list and an optional parent, method resolution along the parent
/// chain, and instances holding their fields in a scope of their own. Also
/// implements method invocation on held objects.
pub mod class;
/// Cross-type equality and ordering.
///
/// Implements the comparison protocol between held values: value comparison
/// for same-kind primitives, dispatch to `__eq__`/`__lt__` for class
/// instances, and the comparisons derived from `equal` and `less`.
pub mod compare;
/// Values, holders, and scopes.
///
/// Declares the runtime value representation, the shared-ownership holder
/// that scopes and fields store, truthiness, and the printing protocol.
pub mod object;

pub use class::{Class, ClassInstance, Method};
pub use object::{Closure, Object, ObjectHolder, Value};
