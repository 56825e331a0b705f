//! Evaluation modes for the PCF interpreter.
//!
//! `EvalMode` selects the reduction policy and the resource guards of an
//! `Interpreter`; `ModeState` carries the per-call counters that enforce
//! them.

use crate::errors::{EvalError, EvalResult};

/// Recursion limit for the bounded modes.
const BOUNDED_DEPTH: usize = 10_000;

/// Evaluation mode, determines interpreter behavior via match dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// `fix` and `let` are terminal; no step budget; the stack grows on demand.
    #[default]
    Interpret,
    /// Same rules as `Interpret`, with a step budget and a recursion limit.
    Bounded {
        /// Maximum number of reduction steps per call.
        budget: u32,
    },
    /// `fix` unfolds and `let` binds its value; budget-limited, since a
    /// `fix` need not terminate.
    Unfold {
        /// Maximum number of reduction steps per call.
        budget: u32,
    },
}

impl EvalMode {
    /// Whether `fix` and `let` terms are reduced instead of returned as-is.
    #[inline]
    pub fn reduces_binders(&self) -> bool {
        matches!(self, Self::Unfold { .. })
    }

    /// Maximum reduction steps per call, or `None` for unlimited.
    #[inline]
    pub fn step_budget(&self) -> Option<u32> {
        match self {
            Self::Interpret => None,
            Self::Bounded { budget } | Self::Unfold { budget } => Some(*budget),
        }
    }

    /// Maximum nesting of reductions, or `None` for unlimited.
    ///
    /// - `Interpret`: `None` on native (stacker grows the stack), 200 on WASM
    /// - `Bounded`, `Unfold`: always 10 000
    #[inline]
    pub fn max_recursion_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(200)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    None
                }
            }
            Self::Bounded { .. } | Self::Unfold { .. } => Some(BOUNDED_DEPTH),
        }
    }
}

/// Per-call counters for the active mode's guards.
#[derive(Debug)]
pub struct ModeState {
    steps: u64,
    depth: usize,
    budget: Option<u32>,
    max_depth: Option<usize>,
}

impl ModeState {
    pub fn new(mode: &EvalMode) -> Self {
        ModeState {
            steps: 0,
            depth: 0,
            budget: mode.step_budget(),
            max_depth: mode.max_recursion_depth(),
        }
    }

    /// Clear the counters before a new top-level call.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.depth = 0;
    }

    /// Account for one reduction step entering one level deeper.
    #[inline]
    pub fn enter(&mut self) -> EvalResult<()> {
        self.steps = self.steps.saturating_add(1);
        if let Some(budget) = self.budget {
            if self.steps > u64::from(budget) {
                return Err(EvalError::BudgetExceeded { budget });
            }
        }
        let depth = self.depth.saturating_add(1);
        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(EvalError::StackOverflow { depth: limit });
            }
        }
        self.depth = depth;
        Ok(())
    }

    /// Leave the level entered by the matching `enter`.
    #[inline]
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Reduction steps taken since the last `reset`.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current nesting of reductions.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests;
