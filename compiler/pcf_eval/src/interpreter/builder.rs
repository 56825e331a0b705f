//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::eval_mode::{EvalMode, ModeState};
use crate::Environment;

/// Builder for creating `Interpreter` instances with various configurations.
///
/// Defaults to `EvalMode::Interpret` and an empty base environment.
#[derive(Clone, Debug, Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    mode: EvalMode,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation mode.
    ///
    /// Controls `fix`/`let` reduction, the step budget and the recursion limit.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the base environment used by `Interpreter::run`.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        let state = ModeState::new(&self.mode);
        Interpreter {
            mode: self.mode,
            state,
            env: self.env.unwrap_or_default(),
        }
    }
}
