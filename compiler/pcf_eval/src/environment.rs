//! Persistent environment chain for the interpreter.
//!
//! An `Environment` is a handle to one frame; each frame owns its
//! declarations and holds a shared handle to its parent. Frames are never
//! mutated after construction: `push` builds a child, so every caller keeps
//! its own view and clones are O(1).

use std::iter;
use std::sync::Arc;

use pcf_ir::{BoundVariable, Term};
use smallvec::SmallVec;

use crate::errors::{unbound_identifier, EvalResult};

/// Pairs a bound variable with its, possibly unevaluated, term.
#[derive(Clone, Debug)]
pub struct Declaration {
    variable: BoundVariable,
    term: Arc<Term>,
    /// Where `term` must be reduced. `None` means the environment this
    /// declaration is pushed onto.
    scope: Option<Environment>,
}

impl Declaration {
    pub fn new(variable: impl Into<BoundVariable>, term: impl Into<Arc<Term>>) -> Self {
        Declaration {
            variable: variable.into(),
            term: term.into(),
            scope: None,
        }
    }

    /// A declaration whose term is reduced in `scope`, wherever it is pushed.
    pub fn scoped(
        variable: impl Into<BoundVariable>,
        term: impl Into<Arc<Term>>,
        scope: Environment,
    ) -> Self {
        Declaration {
            variable: variable.into(),
            term: term.into(),
            scope: Some(scope),
        }
    }

    #[inline]
    pub fn variable(&self) -> &BoundVariable {
        &self.variable
    }

    #[inline]
    pub fn term(&self) -> &Term {
        &self.term
    }
}

/// Most frames bind exactly one name (one application or one `let`).
type Declarations = SmallVec<[Declaration; 1]>;

#[derive(Debug, Default)]
struct Frame {
    declarations: Declarations,
    parent: Option<Environment>,
}

/// A name resolved through the chain.
#[derive(Clone, Debug)]
pub struct Binding {
    /// The bound term, unevaluated.
    pub term: Arc<Term>,
    /// The environment the term must be reduced in.
    pub scope: Environment,
}

/// Lexical environment: a handle to the innermost frame of a chain.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    frame: Arc<Frame>,
}

impl Environment {
    /// Create an environment with a single empty root frame.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Layer `declarations` in a new child frame in front of `self`.
    #[must_use]
    pub fn push(&self, declarations: impl IntoIterator<Item = Declaration>) -> Self {
        Environment {
            frame: Arc::new(Frame {
                declarations: declarations.into_iter().collect(),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Look up the term bound to `name`.
    ///
    /// Searches the current frame in insertion order, then the parents.
    pub fn lookup(&self, name: &str) -> EvalResult<&Term> {
        self.find(name)
            .map(|(declaration, _)| declaration.term())
            .ok_or_else(|| unbound_identifier(name))
    }

    /// Look up `name` along with the environment its term must be reduced in.
    pub fn resolve(&self, name: &str) -> EvalResult<Binding> {
        let (declaration, frame) = self.find(name).ok_or_else(|| unbound_identifier(name))?;
        let scope = match (&declaration.scope, &frame.parent) {
            (Some(scope), _) | (None, Some(scope)) => scope.clone(),
            (None, None) => Environment::new(),
        };
        Ok(Binding {
            term: Arc::clone(&declaration.term),
            scope,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// All bound names, innermost frame first, insertion order within a frame.
    ///
    /// Shadowed names are yielded once per declaration.
    pub fn names(&self) -> impl Iterator<Item = &BoundVariable> + '_ {
        self.frames()
            .flat_map(|frame| frame.declarations.iter().map(Declaration::variable))
    }

    /// Number of declarations across the whole chain.
    pub fn len(&self) -> usize {
        self.frames().map(|frame| frame.declarations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.frames().all(|frame| frame.declarations.is_empty())
    }

    /// Number of frames in the chain, root included.
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        iter::successors(Some(&*self.frame), |frame| {
            frame.parent.as_ref().map(|parent| &*parent.frame)
        })
    }

    fn find(&self, name: &str) -> Option<(&Declaration, &Frame)> {
        self.frames().find_map(|frame| {
            frame
                .declarations
                .iter()
                .find(|declaration| declaration.variable.as_str() == name)
                .map(|declaration| (declaration, frame))
        })
    }
}
