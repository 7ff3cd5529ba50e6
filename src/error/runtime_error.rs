#[derive(Debug)]
/// Represents all errors that can occur during program execution.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in the current scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to read a field that the object does not have.
    UndefinedField {
        /// The name of the field.
        name: String,
    },
    /// A field or method was accessed on a value that is not a class
    /// instance.
    NotAnInstance {
        /// Description of the value actually found.
        found: String,
    },
    /// A method was called that neither the class nor any of its ancestors
    /// defines.
    UnknownMethod {
        /// The name of the class.
        class:  String,
        /// The name of the method.
        method: String,
    },
    /// A method was called with the wrong number of arguments.
    ArityMismatch {
        /// The name of the class.
        class:    String,
        /// The name of the method.
        method:   String,
        /// The number of parameters the method declares.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An operation was applied to values of incompatible types.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic produced a value outside the 32 bit signed range.
    IntegerOverflow,
    /// A condition evaluated to something other than a boolean.
    ExpectedBoolean {
        /// Description of the value actually found.
        found: String,
    },
    /// A `return` was executed outside of any method body.
    ReturnOutsideMethod,
    /// The output sink rejected a write.
    OutputFailed {
        /// Details reported by the sink.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::UndefinedField { name } => write!(f, "Undefined field '{name}'."),
            Self::NotAnInstance { found } => {
                write!(f, "Expected a class instance but found {found}.")
            },
            Self::UnknownMethod { class, method } => {
                write!(f, "Class '{class}' has no method '{method}'.")
            },
            Self::ArityMismatch { class,
                                  method,
                                  expected,
                                  found, } => {
                write!(f,
                       "Method '{class}.{method}' takes {expected} arguments but {found} were given.")
            },
            Self::TypeMismatch { details } => write!(f, "Type mismatch: {details}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::IntegerOverflow => write!(f, "Integer overflow while computing the result."),
            Self::ExpectedBoolean { found } => {
                write!(f, "Expected a boolean condition but found {found}.")
            },
            Self::ReturnOutsideMethod => write!(f, "'return' outside of a method."),
            Self::OutputFailed { details } => write!(f, "Writing to the output failed: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(error: std::io::Error) -> Self {
        Self::OutputFailed { details: error.to_string() }
    }
}
