//! Allow-list and the validated expression tree

use tracing::debug;

use super::eval;
use super::number::Number;
use super::parser::{self, RawExpr};
use super::token;
use crate::{GenError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        }
    }
}

/// Allow-listed constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Allow-listed functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Abs,
    Round,
    Min,
    Max,
    Sum,
    Pow,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log,
    Log10,
    Exp,
    Ceil,
    Floor,
}

impl Function {
    pub const ALL: [Function; 15] = [
        Function::Abs,
        Function::Round,
        Function::Min,
        Function::Max,
        Function::Sum,
        Function::Pow,
        Function::Sqrt,
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Log,
        Function::Log10,
        Function::Exp,
        Function::Ceil,
        Function::Floor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Round => "round",
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Pow => "pow",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Exp => "exp",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Minimum and maximum argument count (`None` = unbounded)
    pub fn arity(&self) -> (usize, Option<usize>) {
        match self {
            Self::Round | Self::Log => (1, Some(2)),
            Self::Pow => (2, Some(2)),
            Self::Min | Self::Max => (1, None),
            Self::Sum => (0, None),
            _ => (1, Some(1)),
        }
    }
}

/// True if `name` is an allow-listed constant or function
pub(crate) fn is_allowed(name: &str) -> bool {
    Constant::from_name(name).is_some() || Function::from_name(name).is_some()
}

/// Validated expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Number),
    Constant(Constant),
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary { op: BinaryOp, lhs: Box<Expr>, rhs: Box<Expr> },
    Call { function: Function, args: Vec<Expr> },
}

/// A compiled expression; every name in it is on the allow-list
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    root: Expr,
}

impl Program {
    /// Tokenize, parse and validate `input`
    pub fn compile(input: &str) -> Result<Self> {
        let tokens = token::tokenize(input)?;
        debug!(tokens = tokens.len(), "Program::compile: tokenized");
        let raw = parser::parse(&tokens, input.chars().count())?;
        let root = validate(raw)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Evaluate the program; fractional results are rounded to 10 decimal places
    pub fn evaluate(&self) -> Result<Number> {
        eval::evaluate(&self.root).map(Number::rounded)
    }
}

/// Resolve every name in the tree, failing before anything is evaluated
fn validate(raw: RawExpr) -> Result<Expr> {
    match raw {
        RawExpr::Number(n) => Ok(Expr::Number(n)),
        RawExpr::Name { name, .. } => match Constant::from_name(&name) {
            Some(constant) => Ok(Expr::Constant(constant)),
            None => Err(GenError::DisallowedIdentifier { name }),
        },
        RawExpr::Call { name, position, args } => {
            let function = Function::from_name(&name).ok_or(GenError::DisallowedIdentifier { name })?;
            check_arity(function, args.len(), position)?;
            let args = args.into_iter().map(validate).collect::<Result<Vec<_>>>()?;
            Ok(Expr::Call { function, args })
        }
        RawExpr::Unary { op, operand } => Ok(Expr::Unary {
            op,
            operand: Box::new(validate(*operand)?),
        }),
        RawExpr::Binary { op, lhs, rhs } => Ok(Expr::Binary {
            op,
            lhs: Box::new(validate(*lhs)?),
            rhs: Box::new(validate(*rhs)?),
        }),
    }
}

fn check_arity(function: Function, given: usize, position: usize) -> Result<()> {
    let (min, max) = function.arity();
    let ok = given >= min && max.is_none_or(|max| given <= max);
    if ok {
        return Ok(());
    }
    let expected = match max {
        Some(max) if max == min => format!("{}", min),
        Some(max) => format!("{} to {}", min, max),
        None => format!("at least {}", min),
    };
    Err(GenError::syntax(
        position,
        format!("{}() takes {} argument(s) ({} given)", function.name(), expected, given),
    ))
}
