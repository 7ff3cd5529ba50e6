use std::rc::Rc;

use crate::interpreter::runtime::Class;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct that yields a value when evaluated, from
/// literals and variable paths to arithmetic, comparisons, logic,
/// instantiation, and method calls. The parser builds these nodes and the
/// evaluator walks them.
#[derive(Debug, Clone)]
pub enum Expr {
    /// An integer literal.
    NumericConst(i32),
    /// A string literal.
    StringConst(String),
    /// A boolean literal, `True` or `False`.
    BoolConst(bool),
    /// The `None` literal.
    NoneConst,
    /// A variable read: a single name, or a dotted path such as `a.b.c`
    /// descending through instance fields.
    Variable {
        /// The names of the path, outermost first. Never empty.
        path: Vec<String>,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// The operator to apply.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A comparison producing a boolean.
    Comparison {
        /// The comparison to apply.
        op:    Comparator,
        /// Left operand.
        left:  Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Short-circuit logical or; yields a boolean.
    Or {
        /// Left operand, always evaluated.
        left:  Box<Expr>,
        /// Right operand, evaluated only when the left one is falsy.
        right: Box<Expr>,
    },
    /// Short-circuit logical and; yields a boolean.
    And {
        /// Left operand, always evaluated.
        left:  Box<Expr>,
        /// Right operand, evaluated only when the left one is truthy.
        right: Box<Expr>,
    },
    /// Logical negation of the operand's truthiness.
    Not {
        /// The operand.
        value: Box<Expr>,
    },
    /// `str(x)`: renders the operand the way `print` would and yields the
    /// result as a string.
    Stringify {
        /// The operand.
        value: Box<Expr>,
    },
    /// Instantiation of a class, calling `__init__` when one with a
    /// matching parameter count exists.
    NewInstance {
        /// The class to instantiate.
        class: Rc<Class>,
        /// Constructor arguments.
        args:  Vec<Expr>,
    },
    /// A method call on the result of an object expression.
    MethodCall {
        /// The receiver.
        object: Box<Expr>,
        /// The method name.
        method: String,
        /// Call arguments, evaluated left to right.
        args:   Vec<Expr>,
    },
}

/// A statement: a unit of execution that may bind names, control flow, or
/// produce output.
#[derive(Debug, Clone)]
pub enum Statement {
    /// Binds a variable in the current scope.
    Assignment {
        /// The variable name.
        var:   String,
        /// The expression whose value is bound.
        value: Expr,
    },
    /// Stores a value into a field of an instance reached by a variable
    /// path.
    FieldAssignment {
        /// Path to the instance, outermost name first.
        object: Vec<String>,
        /// The field name to set.
        field:  String,
        /// The expression whose value is stored.
        value:  Expr,
    },
    /// Evaluates an expression for its effects, such as a method call.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// Prints the arguments separated by single spaces, then a newline.
    Print {
        /// The values to print; may be empty.
        args: Vec<Expr>,
    },
    /// Leaves the enclosing method body, carrying a value.
    Return {
        /// The expression whose value the method yields.
        value: Expr,
    },
    /// Conditional execution. The condition must evaluate to a boolean.
    IfElse {
        /// The condition.
        condition: Expr,
        /// Executed when the condition is `True`.
        if_body:   Box<Statement>,
        /// Executed when the condition is `False`, if present.
        else_body: Option<Box<Statement>>,
    },
    /// A sequence of statements executed in order.
    Compound {
        /// The statements of the block.
        statements: Vec<Statement>,
    },
    /// Binds a class under its name in the current scope.
    ClassDefinition {
        /// The class being defined.
        class: Rc<Class>,
    },
    /// The outermost node of every method: executes the body and absorbs a
    /// `return` raised anywhere inside it.
    MethodBody {
        /// The method's statements.
        body: Box<Statement>,
    },
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`); also concatenates strings and dispatches `__add__`.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero.
    Div,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Comparator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessOrEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterOrEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
