//! The PCF term tree.
//!
//! `Term` is a closed sum type with one variant per syntactic form. Terms are
//! immutable once built; sub-terms sit behind `Arc` so that cloning a term,
//! or reusing it at several sites, never copies the tree.

use std::fmt;
use std::sync::Arc;

use crate::name::split_sigil;
use crate::{BoundVariable, Name, NamingError};

/// Arithmetic operator of a `BinaryOp` term.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
    ];

    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }

    /// Binding strength for rendering; higher binds tighter.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => 1,
            BinaryOp::Multiply | BinaryOp::Divide => 2,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// A PCF term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// Free or unresolved reference.
    Variable(Name),
    /// Reference introduced by a binder. Evaluates exactly like `Variable`.
    BoundVariable(BoundVariable),
    /// Integer literal.
    Number(i64),
    /// Lambda abstraction.
    Function {
        parameter: BoundVariable,
        body: Arc<Term>,
    },
    /// `left` applied to `right`.
    Application { left: Arc<Term>, right: Arc<Term> },
    /// Arithmetic on two operands.
    BinaryOp {
        op: BinaryOp,
        left: Arc<Term>,
        right: Arc<Term>,
    },
    /// `then_branch` if `condition` reduces to 0, `else_branch` otherwise.
    IfZero {
        condition: Arc<Term>,
        then_branch: Arc<Term>,
        else_branch: Arc<Term>,
    },
    /// Recursion: `fixed` stands for the whole `Fix` term inside `body`.
    Fix { fixed: BoundVariable, body: Arc<Term> },
    /// Non-recursive local binding of `variable` to `value` in `body`.
    Let {
        variable: BoundVariable,
        value: Arc<Term>,
        body: Arc<Term>,
    },
}

impl Term {
    pub fn number(value: i64) -> Self {
        Term::Number(value)
    }

    pub fn variable(name: Name) -> Self {
        Term::Variable(name)
    }

    pub fn bound(variable: impl Into<BoundVariable>) -> Self {
        Term::BoundVariable(variable.into())
    }

    /// Turn identifier text into a reference term.
    ///
    /// Text starting with [`BOUND_SIGIL`](crate::BOUND_SIGIL) yields a
    /// `BoundVariable`, anything else a `Variable`.
    pub fn ident(text: &str) -> Result<Self, NamingError> {
        let (bound, _) = split_sigil(text)?;
        let name = Name::new(text)?;
        Ok(if bound {
            Term::BoundVariable(name.into())
        } else {
            Term::Variable(name)
        })
    }

    pub fn function(parameter: impl Into<BoundVariable>, body: impl Into<Arc<Term>>) -> Self {
        Term::Function {
            parameter: parameter.into(),
            body: body.into(),
        }
    }

    pub fn application(left: impl Into<Arc<Term>>, right: impl Into<Arc<Term>>) -> Self {
        Term::Application {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn binary(op: BinaryOp, left: impl Into<Arc<Term>>, right: impl Into<Arc<Term>>) -> Self {
        Term::BinaryOp {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn add(left: impl Into<Arc<Term>>, right: impl Into<Arc<Term>>) -> Self {
        Term::binary(BinaryOp::Add, left, right)
    }

    pub fn subtract(left: impl Into<Arc<Term>>, right: impl Into<Arc<Term>>) -> Self {
        Term::binary(BinaryOp::Subtract, left, right)
    }

    pub fn multiply(left: impl Into<Arc<Term>>, right: impl Into<Arc<Term>>) -> Self {
        Term::binary(BinaryOp::Multiply, left, right)
    }

    pub fn divide(left: impl Into<Arc<Term>>, right: impl Into<Arc<Term>>) -> Self {
        Term::binary(BinaryOp::Divide, left, right)
    }

    pub fn if_zero(
        condition: impl Into<Arc<Term>>,
        then_branch: impl Into<Arc<Term>>,
        else_branch: impl Into<Arc<Term>>,
    ) -> Self {
        Term::IfZero {
            condition: condition.into(),
            then_branch: then_branch.into(),
            else_branch: else_branch.into(),
        }
    }

    pub fn fix(fixed: impl Into<BoundVariable>, body: impl Into<Arc<Term>>) -> Self {
        Term::Fix {
            fixed: fixed.into(),
            body: body.into(),
        }
    }

    pub fn let_in(
        variable: impl Into<BoundVariable>,
        value: impl Into<Arc<Term>>,
        body: impl Into<Arc<Term>>,
    ) -> Self {
        Term::Let {
            variable: variable.into(),
            value: value.into(),
            body: body.into(),
        }
    }

    /// The literal value, if this is a `Number`.
    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Term::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The referenced name, for `Variable` and `BoundVariable`.
    pub fn reference(&self) -> Option<&Name> {
        match self {
            Term::Variable(name) => Some(name),
            Term::BoundVariable(variable) => Some(variable.name()),
            _ => None,
        }
    }

    /// Short variant name, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Variable(_) => "variable",
            Term::BoundVariable(_) => "bound variable",
            Term::Number(_) => "number",
            Term::Function { .. } => "function",
            Term::Application { .. } => "application",
            Term::BinaryOp { .. } => "binary operation",
            Term::IfZero { .. } => "ifz",
            Term::Fix { .. } => "fix",
            Term::Let { .. } => "let",
        }
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Number(value)
    }
}

impl From<Name> for Term {
    fn from(name: Name) -> Self {
        Term::Variable(name)
    }
}

impl From<BoundVariable> for Term {
    fn from(variable: BoundVariable) -> Self {
        Term::BoundVariable(variable)
    }
}

impl TryFrom<&str> for Term {
    type Error = NamingError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Term::ident(text)
    }
}

#[cfg(test)]
mod tests;
