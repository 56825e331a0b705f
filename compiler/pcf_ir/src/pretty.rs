//! Concrete-syntax rendering of terms.
//!
//! Output is for inspection only; nothing parses it back. Parentheses are
//! inserted only where precedence or associativity requires them:
//!
//! ```text
//! binder   fun x -> e | fix f -> e | let x = e in e | ifz e then e else e
//! sum      e + e | e - e            (left-associative)
//! product  e * e | e / e            (left-associative)
//! app      e e                      (left-associative)
//! atom     n | x | ( e )
//! ```

use std::fmt::{self, Write};

use crate::Term;

/// Binders extend as far right as possible.
const BINDER: u8 = 0;
/// Operand position of an application (left-hand head).
const APP: u8 = 3;
/// Argument position of an application.
const ATOM: u8 = 4;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_term(f, self, BINDER)
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, term: &Term, context: u8) -> fmt::Result {
    let own = level(term);
    let parens = own < context;
    if parens {
        f.write_char('(')?;
    }
    match term {
        Term::Variable(name) => write!(f, "{name}")?,
        Term::BoundVariable(variable) => write!(f, "{variable}")?,
        Term::Number(value) => write!(f, "{value}")?,
        Term::Function { parameter, body } => {
            write!(f, "fun {parameter} -> ")?;
            write_term(f, body, BINDER)?;
        }
        Term::Fix { fixed, body } => {
            write!(f, "fix {fixed} -> ")?;
            write_term(f, body, BINDER)?;
        }
        Term::Let {
            variable,
            value,
            body,
        } => {
            write!(f, "let {variable} = ")?;
            write_term(f, value, BINDER)?;
            f.write_str(" in ")?;
            write_term(f, body, BINDER)?;
        }
        Term::IfZero {
            condition,
            then_branch,
            else_branch,
        } => {
            f.write_str("ifz ")?;
            write_term(f, condition, BINDER)?;
            f.write_str(" then ")?;
            write_term(f, then_branch, BINDER)?;
            f.write_str(" else ")?;
            write_term(f, else_branch, BINDER)?;
        }
        Term::Application { left, right } => {
            write_term(f, left, APP)?;
            f.write_char(' ')?;
            write_term(f, right, ATOM)?;
        }
        Term::BinaryOp { op, left, right } => {
            let prec = op.precedence();
            write_term(f, left, prec)?;
            write!(f, " {op} ")?;
            write_term(f, right, prec.saturating_add(1))?;
        }
    }
    if parens {
        f.write_char(')')?;
    }
    Ok(())
}

/// Precedence level a term occupies when rendered without parentheses.
fn level(term: &Term) -> u8 {
    match term {
        Term::Function { .. } | Term::Fix { .. } | Term::Let { .. } | Term::IfZero { .. } => {
            BINDER
        }
        Term::BinaryOp { op, .. } => op.precedence(),
        Term::Application { .. } => APP,
        // A negative literal as an argument would read as subtraction.
        Term::Number(value) if *value < 0 => APP - 1,
        Term::Variable(_) | Term::BoundVariable(_) | Term::Number(_) => ATOM,
    }
}
