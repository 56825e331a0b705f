//! Staged builders for binder and conditional terms.
//!
//! Each builder is an optional-field struct: parts are supplied one call at a
//! time and validated once, at `build`. Finalizing with a required part
//! missing is a [`ConstructionError`], never a default.
//!
//! ```text
//! FunBuilder::new(x).to(body)                      fun x -> body
//! IfzBuilder::new(c).then(t).otherwise(e)?         ifz c then t else e
//! FixBuilder::new(f).in_(body)                     fix f -> body
//! LetBuilder::new(x).be(v).in_(body)?              let x = v in body
//! ```

use std::sync::Arc;

use crate::{BoundVariable, ConstructionError, Term};

/// Anything that can produce a finished term.
pub trait TermBuilder {
    fn build(&self) -> Result<Term, ConstructionError>;
}

impl TermBuilder for Term {
    fn build(&self) -> Result<Term, ConstructionError> {
        Ok(self.clone())
    }
}

/// Builds `Function` terms.
#[derive(Clone, Debug)]
pub struct FunBuilder {
    parameter: BoundVariable,
    body: Option<Arc<Term>>,
}

impl FunBuilder {
    pub fn new(parameter: impl Into<BoundVariable>) -> Self {
        FunBuilder {
            parameter: parameter.into(),
            body: None,
        }
    }

    /// Supply the body and keep building.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Arc<Term>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Supply the body and finish.
    pub fn to(self, body: impl Into<Arc<Term>>) -> Term {
        Term::function(self.parameter, body)
    }
}

impl TermBuilder for FunBuilder {
    fn build(&self) -> Result<Term, ConstructionError> {
        let body = self
            .body
            .clone()
            .ok_or_else(|| ConstructionError::missing("fun", "a body"))?;
        Ok(Term::function(self.parameter.clone(), body))
    }
}

/// Builds `IfZero` terms.
#[derive(Clone, Debug)]
pub struct IfzBuilder {
    condition: Arc<Term>,
    then_branch: Option<Arc<Term>>,
    else_branch: Option<Arc<Term>>,
}

impl IfzBuilder {
    pub fn new(condition: impl Into<Arc<Term>>) -> Self {
        IfzBuilder {
            condition: condition.into(),
            then_branch: None,
            else_branch: None,
        }
    }

    #[must_use]
    pub fn then(mut self, then_branch: impl Into<Arc<Term>>) -> Self {
        self.then_branch = Some(then_branch.into());
        self
    }

    /// Supply the else branch and finish.
    pub fn otherwise(mut self, else_branch: impl Into<Arc<Term>>) -> Result<Term, ConstructionError> {
        self.else_branch = Some(else_branch.into());
        self.build()
    }
}

impl TermBuilder for IfzBuilder {
    fn build(&self) -> Result<Term, ConstructionError> {
        let then_branch = self
            .then_branch
            .clone()
            .ok_or_else(|| ConstructionError::missing("ifz", "a then clause"))?;
        let else_branch = self
            .else_branch
            .clone()
            .ok_or_else(|| ConstructionError::missing("ifz", "an else clause"))?;
        Ok(Term::if_zero(
            Arc::clone(&self.condition),
            then_branch,
            else_branch,
        ))
    }
}

/// Builds `Fix` terms.
#[derive(Clone, Debug)]
pub struct FixBuilder {
    fixed: BoundVariable,
    body: Option<Arc<Term>>,
}

impl FixBuilder {
    pub fn new(fixed: impl Into<BoundVariable>) -> Self {
        FixBuilder { fixed: fixed.into(), body: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Arc<Term>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Supply the body and finish.
    pub fn in_(self, body: impl Into<Arc<Term>>) -> Term {
        Term::fix(self.fixed, body)
    }
}

impl TermBuilder for FixBuilder {
    fn build(&self) -> Result<Term, ConstructionError> {
        let body = self
            .body
            .clone()
            .ok_or_else(|| ConstructionError::missing("fix", "a body"))?;
        Ok(Term::fix(self.fixed.clone(), body))
    }
}

/// Builds `Let` terms.
#[derive(Clone, Debug)]
pub struct LetBuilder {
    variable: BoundVariable,
    value: Option<Arc<Term>>,
    body: Option<Arc<Term>>,
}

impl LetBuilder {
    pub fn new(variable: impl Into<BoundVariable>) -> Self {
        LetBuilder {
            variable: variable.into(),
            value: None,
            body: None,
        }
    }

    /// Supply the bound value.
    #[must_use]
    pub fn be(mut self, value: impl Into<Arc<Term>>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Supply the body and finish.
    pub fn in_(mut self, body: impl Into<Arc<Term>>) -> Result<Term, ConstructionError> {
        self.body = Some(body.into());
        self.build()
    }
}

impl TermBuilder for LetBuilder {
    fn build(&self) -> Result<Term, ConstructionError> {
        let value = self
            .value
            .clone()
            .ok_or_else(|| ConstructionError::missing("let", "a value"))?;
        let body = self
            .body
            .clone()
            .ok_or_else(|| ConstructionError::missing("let", "an in clause"))?;
        Ok(Term::let_in(self.variable.clone(), value, body))
    }
}

#[cfg(test)]
mod tests;
