//! Command logic for the `pcf` binary.
//!
//! Option parsing and evaluation live here; `main` only prints.

use pcf_eval::{EvalMode, InterpreterBuilder};
use pcf_ir::Term;

use crate::demos::Demo;
use crate::CliError;

/// Step budget used by `--unfold` when no `--budget` is given.
pub const DEFAULT_UNFOLD_BUDGET: u32 = 100_000;

/// Options accepted by `run` and `all`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Reduce `fix` and `let` (--unfold)
    pub unfold: bool,
    /// Step budget (--budget=N)
    pub budget: Option<u32>,
}

impl RunOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = RunOptions::default();
        for arg in args {
            if arg == "--unfold" {
                options.unfold = true;
            } else if let Some(value) = arg.strip_prefix("--budget=") {
                let budget = value.parse().map_err(|_| CliError::InvalidBudget {
                    value: value.to_string(),
                })?;
                options.budget = Some(budget);
            } else {
                return Err(CliError::UnknownOption {
                    option: arg.clone(),
                });
            }
        }
        Ok(options)
    }

    /// The evaluation mode these options select.
    pub fn mode(&self) -> EvalMode {
        match (self.unfold, self.budget) {
            (true, budget) => EvalMode::Unfold {
                budget: budget.unwrap_or(DEFAULT_UNFOLD_BUDGET),
            },
            (false, Some(budget)) => EvalMode::Bounded { budget },
            (false, None) => EvalMode::Interpret,
        }
    }
}

/// A finished demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub result: Term,
    pub steps: u64,
}

/// Reduce `term` in an empty environment under `options`.
pub fn evaluate(term: &Term, options: &RunOptions) -> Result<Evaluation, CliError> {
    let mut interpreter = InterpreterBuilder::new().mode(options.mode()).build();
    let result = interpreter.run(term)?;
    Ok(Evaluation {
        result,
        steps: interpreter.steps(),
    })
}

/// Build and reduce a demo.
pub fn run_demo(demo: &Demo, options: &RunOptions) -> Result<Evaluation, CliError> {
    tracing::debug!(demo = demo.name, ?options, "running demo");
    evaluate(&demo.term()?, options)
}
