use std::rc::Rc;

use bigdecimal::BigDecimal;

use crate::location::SourceLocation;

/// A constant written directly in the source.
///
/// Covers conventional literals as well as values decoded from poetic
/// literals, which the lexer has already turned into plain numbers and
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `null` and its synonyms.
    Null,
    /// `mysterious`, the explicitly uninitialized value.
    Mysterious,
    /// A boolean constant.
    Bool(bool),
    /// An arbitrary-precision decimal.
    Number(BigDecimal),
    /// A string.
    Str(String),
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<BigDecimal> for Literal {
    fn from(value: BigDecimal) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An expression node.
///
/// Every variable reference, including pronouns, has already been resolved to
/// its canonical lowercase name by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A constant value.
    Literal {
        /// The constant.
        value:    Literal,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// Reference to a variable by canonical name.
    Variable {
        /// Canonical lowercase name, e.g. `my heart` or `doctor feelgood`.
        name:     String,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// Logical negation (`not`).
    Not {
        /// The operand.
        expr:     Box<Self>,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Span covering both operands.
        location: SourceLocation,
    },
    /// Function call (`Midnight taking my heart, your soul`).
    FunctionCall {
        /// Canonical name of the function.
        name:      String,
        /// Argument expressions in order.
        arguments: Vec<Self>,
        /// Span in the source code.
        location:  SourceLocation,
    },
}

impl Expr {
    /// Gets the source span of `self`.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        match self {
            Self::Literal { location, .. }
            | Self::Variable { location, .. }
            | Self::Not { location, .. }
            | Self::BinaryOp { location, .. }
            | Self::FunctionCall { location, .. } => *location,
        }
    }
}

/// A user-defined function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Canonical name of the function.
    pub name:     String,
    /// Canonical parameter names in declaration order.
    pub params:   Vec<String>,
    /// The statements executed on each call.
    pub body:     Vec<Statement>,
    /// Span of the declaration line.
    pub location: SourceLocation,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// An expression evaluated for its side effects, typically a call.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// `say`/`shout`/`whisper`/`scream`: write a value to the output sink.
    Print {
        /// The value to print.
        value:    Expr,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// `listen to X` or a bare `listen`: read one line of input.
    Listen {
        /// Variable receiving the line; `None` discards it.
        target:   Option<String>,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// Binds a value to a variable (`put`, `is`, `says`, `thinks`).
    Assignment {
        /// Canonical name of the target.
        name:     String,
        /// The value to assign.
        value:    Expr,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// `build X up`, repeated `up`s adding to the magnitude.
    Increment {
        /// Canonical name of the target.
        name:     String,
        /// How many times `up` was written.
        amount:   u32,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// `knock X down`, repeated `down`s adding to the magnitude.
    Decrement {
        /// Canonical name of the target.
        name:     String,
        /// How many times `down` was written.
        amount:   u32,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// Conditional with an optional else branch.
    If {
        /// The condition.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements run otherwise.
        else_branch: Option<Vec<Self>>,
        /// Span of the `if` line.
        location:    SourceLocation,
    },
    /// Pre-test loop running while the condition is truthy.
    While {
        /// The condition, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Span of the `while` line.
        location:  SourceLocation,
    },
    /// Pre-test loop running until the condition is truthy.
    Until {
        /// The condition, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Span of the `until` line.
        location:  SourceLocation,
    },
    /// `break` / `break it down`.
    Break {
        /// Span in the source code.
        location: SourceLocation,
    },
    /// `continue` / `take it to the top`.
    Continue {
        /// Span in the source code.
        location: SourceLocation,
    },
    /// `give back X`.
    Return {
        /// The returned value.
        value:    Expr,
        /// Span in the source code.
        location: SourceLocation,
    },
    /// A function declaration.
    Function(Rc<FunctionDef>),
}

impl Statement {
    /// Gets the source span of `self`.
    #[must_use]
    pub fn location(&self) -> SourceLocation {
        match self {
            Self::Expression { location, .. }
            | Self::Print { location, .. }
            | Self::Listen { location, .. }
            | Self::Assignment { location, .. }
            | Self::Increment { location, .. }
            | Self::Decrement { location, .. }
            | Self::If { location, .. }
            | Self::While { location, .. }
            | Self::Until { location, .. }
            | Self::Break { location }
            | Self::Continue { location }
            | Self::Return { location, .. } => *location,
            Self::Function(def) => def.location,
        }
    }
}

/// A whole parsed program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
    /// Span enclosing every statement.
    pub location:   SourceLocation,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `plus`, `with`
    Add,
    /// `minus`, `without`
    Sub,
    /// `times`, `of`
    Mul,
    /// `over`
    Div,
    /// `is`
    Equal,
    /// `ain't`, `aint`, `is not`
    NotEqual,
    /// `is higher than` and synonyms
    Greater,
    /// `is lower than` and synonyms
    Less,
    /// `is as high as` and synonyms
    GreaterEqual,
    /// `is as low as` and synonyms
    LessEqual,
    /// `and`
    And,
    /// `or`
    Or,
    /// `nor`
    Nor,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Nor, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "plus",
            Sub => "minus",
            Mul => "times",
            Div => "over",
            Equal => "is",
            NotEqual => "ain't",
            Greater => "is higher than",
            Less => "is lower than",
            GreaterEqual => "is as high as",
            LessEqual => "is as low as",
            And => "and",
            Or => "or",
            Nor => "nor",
        };
        write!(f, "{operator}")
    }
}
