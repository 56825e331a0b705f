//! Tree-walking, call-by-name interpreter for PCF terms.
//!
//! Reduction is one recursive function over an exhaustive `match` on `Term`.
//! Beta-reduction extends the environment instead of substituting, and a
//! term whose reduction is blocked (a non-function head, a non-numeric
//! operand or condition) is rebuilt around its reduced parts and returned
//! as a residual term.
//!
//! Internally every reduction yields the result term together with the
//! environment it was reduced in, so a function produced by one reduction
//! keeps its defining environment when applied by another. Only the term
//! leaves the interpreter.

mod builder;

pub use builder::InterpreterBuilder;

use std::sync::Arc;

use pcf_ir::{BinaryOp, Name, Term, TermBuilder};

use crate::eval_mode::{EvalMode, ModeState};
use crate::{ensure_sufficient_stack, evaluate_binary, Declaration, Environment, EvalResult};

/// Reduce `term` in `env` with the default mode.
pub fn interpret(term: &Term, env: &Environment) -> EvalResult<Term> {
    Interpreter::new().interpret(term, env)
}

/// A reduced term and the environment it was reduced in.
struct Reduced {
    term: Term,
    scope: Environment,
}

impl Reduced {
    fn new(term: Term, scope: &Environment) -> Self {
        Reduced {
            term,
            scope: scope.clone(),
        }
    }
}

/// The PCF interpreter.
///
/// Holds the evaluation mode, the counters enforcing it, and a base
/// environment used by [`Interpreter::run`].
pub struct Interpreter {
    mode: EvalMode,
    state: ModeState,
    env: Environment,
}

impl Interpreter {
    /// Interpreter with the default mode and an empty base environment.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    /// The base environment used by `run`.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Reduction steps taken by the most recent call.
    pub fn steps(&self) -> u64 {
        self.state.steps()
    }

    /// Reduce `term` in the base environment.
    pub fn run(&mut self, term: &Term) -> EvalResult<Term> {
        let env = self.env.clone();
        self.interpret(term, &env)
    }

    /// Reduce `term` in `env`.
    ///
    /// Returns a `Number` when reduction completes, or a residual term when
    /// it is blocked.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn interpret(&mut self, term: &Term, env: &Environment) -> EvalResult<Term> {
        self.state.reset();
        let reduced = self.reduce(term, env)?;
        tracing::debug!(
            steps = self.state.steps(),
            kind = reduced.term.kind(),
            "evaluation finished"
        );
        Ok(reduced.term)
    }

    /// Build the term first, then reduce it in `env`.
    pub fn interpret_built(
        &mut self,
        builder: &impl TermBuilder,
        env: &Environment,
    ) -> EvalResult<Term> {
        let term = builder.build()?;
        self.interpret(&term, env)
    }

    fn reduce(&mut self, term: &Term, env: &Environment) -> EvalResult<Reduced> {
        self.state.enter()?;
        let result = ensure_sufficient_stack(|| self.reduce_term(term, env));
        self.state.leave();
        result
    }

    fn reduce_term(&mut self, term: &Term, env: &Environment) -> EvalResult<Reduced> {
        match term {
            Term::Variable(name) => self.reduce_reference(name, env),
            Term::BoundVariable(variable) => self.reduce_reference(variable.name(), env),
            Term::Number(_) | Term::Function { .. } => Ok(Reduced::new(term.clone(), env)),
            Term::Application { left, right } => self.reduce_application(left, right, env),
            Term::BinaryOp { op, left, right } => self.reduce_binary(*op, left, right, env),
            Term::IfZero {
                condition,
                then_branch,
                else_branch,
            } => self.reduce_if_zero(condition, then_branch, else_branch, env),
            Term::Fix { fixed, body } => {
                if !self.mode.reduces_binders() {
                    return Ok(Reduced::new(term.clone(), env));
                }
                tracing::trace!(name = %fixed, "unfolding fix");
                let frame = env.push([Declaration::new(fixed.clone(), term.clone())]);
                self.reduce(body, &frame)
            }
            Term::Let {
                variable,
                value,
                body,
            } => {
                if !self.mode.reduces_binders() {
                    return Ok(Reduced::new(term.clone(), env));
                }
                tracing::trace!(name = %variable, "binding let");
                let frame = env.push([Declaration::new(variable.clone(), Arc::clone(value))]);
                self.reduce(body, &frame)
            }
        }
    }

    /// Force the term bound to `name` in the environment it was bound in.
    fn reduce_reference(&mut self, name: &Name, env: &Environment) -> EvalResult<Reduced> {
        let binding = env.resolve(name.as_str())?;
        tracing::trace!(%name, "resolved");
        self.reduce(&binding.term, &binding.scope)
    }

    fn reduce_application(
        &mut self,
        left: &Arc<Term>,
        right: &Arc<Term>,
        env: &Environment,
    ) -> EvalResult<Reduced> {
        if let Term::Function { parameter, body } = &**left {
            tracing::trace!(%parameter, "beta");
            let frame = env.push([Declaration::new(parameter.clone(), Arc::clone(right))]);
            return self.reduce(body, &frame);
        }

        let Reduced { term: head, scope } = self.reduce(left, env)?;
        if let Term::Function { parameter, body } = &head {
            // The body sees the function's own environment; the argument
            // stays scoped to the caller's.
            tracing::trace!(%parameter, "beta");
            let frame = scope.push([Declaration::scoped(
                parameter.clone(),
                Arc::clone(right),
                env.clone(),
            )]);
            return self.reduce(body, &frame);
        }

        tracing::trace!(head = head.kind(), "stuck application");
        Ok(Reduced::new(Term::application(head, Arc::clone(right)), env))
    }

    fn reduce_binary(
        &mut self,
        op: BinaryOp,
        left: &Arc<Term>,
        right: &Arc<Term>,
        env: &Environment,
    ) -> EvalResult<Reduced> {
        let left = self.reduce(left, env)?.term;
        let right = self.reduce(right, env)?.term;
        match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => Ok(Reduced::new(Term::Number(evaluate_binary(op, l, r)?), env)),
            _ => {
                tracing::trace!(%op, "stuck arithmetic");
                Ok(Reduced::new(Term::binary(op, left, right), env))
            }
        }
    }

    fn reduce_if_zero(
        &mut self,
        condition: &Arc<Term>,
        then_branch: &Arc<Term>,
        else_branch: &Arc<Term>,
        env: &Environment,
    ) -> EvalResult<Reduced> {
        let condition = self.reduce(condition, env)?.term;
        match condition.as_number() {
            Some(0) => self.reduce(then_branch, env),
            Some(_) => self.reduce(else_branch, env),
            None => {
                tracing::trace!("stuck ifz");
                Ok(Reduced::new(
                    Term::if_zero(condition, Arc::clone(then_branch), Arc::clone(else_branch)),
                    env,
                ))
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
