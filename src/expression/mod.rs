//! (representation) Arithmetic expression trees over a single free variable.
//!
//! An [`Expression`] is built once, by [`Expression::sample`] or [`Expression::parse`], and is
//! then only ever read. Its [`Display`] form is the fully parenthesized formula, which
//! [`Expression::parse`] reads back.
//!
//! # Examples
//!
//! ```
//! use approximator::{BinaryOp, Expression, UnaryOp};
//!
//! let expr = Expression::binary(
//!     BinaryOp::Add,
//!     Expression::unary(UnaryOp::Log, Expression::Variable),
//!     Expression::TWO,
//! );
//! assert_eq!(expr.to_string(), "(log(X)+2)");
//! assert_eq!(expr.eval(1.0), 2.0);
//! assert_eq!(Expression::parse("(log(X)+2)").unwrap(), expr);
//! ```
//!
//! [`Display`]: std::fmt::Display

mod parser;
mod reduce;
mod sampler;
pub use self::parser::ParseError;
pub use self::sampler::{LEAF_DEPTH, OPERATOR_DEPTH};

use rand::Rng;
use std::borrow::Cow;
use std::fmt;

/// The label under which the free variable is displayed and parsed.
pub const VARIABLE_LABEL: &str = "X";

/// Operators taking a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Natural logarithm.
    Log,
}
impl UnaryOp {
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Log => "log",
        }
    }
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "log" => Some(UnaryOp::Log),
            _ => None,
        }
    }
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryOp::Log => x.ln(),
        }
    }
}

/// Operators taking a left and a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Multiply,
    Divide,
    Add,
    Subtract,
    /// `left` raised to `right`.
    Power,
}
impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Power => '^',
        }
    }
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '*' => Some(BinaryOp::Multiply),
            '/' => Some(BinaryOp::Divide),
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Subtract),
            '^' => Some(BinaryOp::Power),
            _ => None,
        }
    }
    /// IEEE-754 semantics throughout: nothing here ever fails, division by zero and friends
    /// produce infinities or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Multiply => left * right,
            BinaryOp::Divide => left / right,
            BinaryOp::Add => left + right,
            BinaryOp::Subtract => left - right,
            BinaryOp::Power => left.powf(right),
        }
    }
}

/// An immutable formula over one free variable.
///
/// Equality is structural. Constants compare by value and label, so two NaN constants are never
/// equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A fixed value. The label is only used for display and need not be the decimal form of
    /// `value`, as with [`Expression::INF`].
    Constant {
        value: f64,
        label: Cow<'static, str>,
    },
    /// The free input.
    Variable,
    Unary(UnaryOp, Box<Expression>),
    Binary(BinaryOp, Box<Expression>, Box<Expression>),
}
impl Expression {
    pub const NEG_ONE: Expression = Expression::Constant {
        value: -1.0,
        label: Cow::Borrowed("-1"),
    };
    pub const ZERO: Expression = Expression::Constant {
        value: 0.0,
        label: Cow::Borrowed("0"),
    };
    pub const ONE: Expression = Expression::Constant {
        value: 1.0,
        label: Cow::Borrowed("1"),
    };
    pub const TWO: Expression = Expression::Constant {
        value: 2.0,
        label: Cow::Borrowed("2"),
    };
    pub const INF: Expression = Expression::Constant {
        value: f64::INFINITY,
        label: Cow::Borrowed("INF"),
    };

    /// A constant labelled with the decimal form of its value.
    pub fn constant(value: f64) -> Self {
        Expression::Constant {
            value,
            label: Cow::Owned(value.to_string()),
        }
    }
    pub fn unary(op: UnaryOp, child: Expression) -> Self {
        Expression::Unary(op, Box::new(child))
    }
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    /// Evaluate the expression with `x` bound to the free variable.
    ///
    /// This is total: special values propagate according to IEEE-754.
    ///
    /// ```
    /// use approximator::{BinaryOp, Expression};
    ///
    /// let expr = Expression::binary(BinaryOp::Divide, Expression::ONE, Expression::Variable);
    /// assert_eq!(expr.eval(4.0), 0.25);
    /// assert_eq!(expr.eval(0.0), f64::INFINITY);
    /// ```
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expression::Constant { value, .. } => *value,
            Expression::Variable => x,
            Expression::Unary(op, child) => op.apply(child.eval(x)),
            Expression::Binary(op, left, right) => op.apply(left.eval(x), right.eval(x)),
        }
    }

    /// The value of a `Constant`, `None` for every other variant.
    pub fn constant_value(&self) -> Option<f64> {
        match self {
            Expression::Constant { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Leaves have depth 0; every other node is one deeper than its deepest child.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Constant { .. } | Expression::Variable => 0,
            Expression::Unary(_, child) => 1 + child.depth(),
            Expression::Binary(_, left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    /// The number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expression::Constant { .. } | Expression::Variable => 1,
            Expression::Unary(_, child) => 1 + child.size(),
            Expression::Binary(_, left, right) => 1 + left.size() + right.size(),
        }
    }

    /// Sample a random expression whose root sits at generation depth `depth`.
    ///
    /// Binary nodes are reduced as they are assembled, see [`Expression::reduce`]. The
    /// distribution narrows as `depth` grows, and from [`LEAF_DEPTH`] onwards only leaves are
    /// produced, so sampling always terminates.
    ///
    /// ```
    /// use approximator::expression::{Expression, LEAF_DEPTH};
    /// use rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let rng = &mut SmallRng::seed_from_u64(7);
    /// let expr = Expression::sample(1, rng);
    /// assert!(expr.depth() <= LEAF_DEPTH - 1);
    ///
    /// let leaf = Expression::sample(LEAF_DEPTH, rng);
    /// assert_eq!(leaf.depth(), 0);
    /// ```
    pub fn sample<R: Rng>(depth: usize, rng: &mut R) -> Self {
        sampler::sample(depth, rng)
    }

    /// Apply a single local simplification to a binary node whose children are already reduced.
    ///
    /// This is not a fixed-point simplifier: the result is not reduced again, and unary nodes,
    /// leaves and binary nodes without a constant child are returned as they are.
    ///
    /// ```
    /// use approximator::{BinaryOp, Expression};
    ///
    /// let expr = Expression::binary(BinaryOp::Multiply, Expression::ZERO, Expression::Variable);
    /// assert_eq!(expr.reduce(), Expression::ZERO);
    ///
    /// let expr = Expression::binary(BinaryOp::Divide, Expression::Variable, Expression::ZERO);
    /// assert_eq!(expr.reduce(), Expression::INF);
    /// ```
    pub fn reduce(self) -> Self {
        reduce::reduce(self)
    }

    /// Parse a formula in the form written by `Display`. The inverse of `to_string`.
    ///
    /// Binary nodes are `(L op R)` with `op` one of `* / + - ^`, unary nodes are `log(E)`, the
    /// variable is `X` and constants are decimal numbers, `INF`, `inf`, `-inf` or `NaN`.
    /// Extraneous white space is ignored.
    pub fn parse(inp: &str) -> Result<Self, ParseError> {
        parser::parse(inp)
    }
}
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Constant { label, .. } => f.write_str(label),
            Expression::Variable => f.write_str(VARIABLE_LABEL),
            Expression::Unary(op, child) => write!(f, "{}({})", op.name(), child),
            Expression::Binary(op, left, right) => {
                write!(f, "({}{}{})", left, op.symbol(), right)
            }
        }
    }
}
