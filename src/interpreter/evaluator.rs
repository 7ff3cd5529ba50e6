/// Arithmetic and comparison evaluation.
///
/// Implements the binary operators: checked integer arithmetic, string
/// concatenation, `__add__` dispatch for instances, and the six comparison
/// operators on top of the runtime comparison protocol.
pub mod binary;
/// The execution context and statement dispatch.
///
/// Declares [`core::Context`], the object every evaluation threads through,
/// along with the statement and expression dispatchers and the control-flow
/// carrier for `return`.
pub mod core;
/// Short-circuit logic operators.
pub mod logic;
/// Object-related evaluation: variable paths, field assignment,
/// stringification, instantiation, and method calls.
pub mod object;
