//! Term construction shorthands for unit tests.

use pcf_ir::{BoundVariable, Name, Term};

pub(crate) fn bv(text: &str) -> BoundVariable {
    match BoundVariable::new(text) {
        Ok(variable) => variable,
        Err(err) => panic!("invalid test identifier {text:?}: {err}"),
    }
}

pub(crate) fn var(text: &str) -> Term {
    match Name::new(text) {
        Ok(name) => Term::variable(name),
        Err(err) => panic!("invalid test identifier {text:?}: {err}"),
    }
}

pub(crate) fn num(value: i64) -> Term {
    Term::number(value)
}

pub(crate) fn fun(parameter: &str, body: Term) -> Term {
    Term::function(bv(parameter), body)
}

pub(crate) fn app(left: Term, right: Term) -> Term {
    Term::application(left, right)
}
