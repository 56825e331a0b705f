//! Driver errors.

use pcf_eval::EvalError;
use pcf_ir::{ConstructionError, NamingError, TypeNameError};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown demo `{name}` (see `pcf list`)")]
    UnknownDemo { name: String },
    #[error("unknown option `{option}`")]
    UnknownOption { option: String },
    #[error("invalid budget `{value}`: expected an unsigned 32-bit integer")]
    InvalidBudget { value: String },
    #[error(transparent)]
    Naming(#[from] NamingError),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    TypeName(#[from] TypeNameError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
