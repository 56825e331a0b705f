//! PCF IR - term representation for the PCF interpreter.
//!
//! This crate contains the data structures every other layer consumes:
//! - `Name` and `BoundVariable` for validated identifiers
//! - `Term`, the immutable syntax tree, and `BinaryOp`
//! - `PcfType`, the type-tag model (no checker consumes it)
//! - Staged builders (`FunBuilder`, `IfzBuilder`, `FixBuilder`, `LetBuilder`)
//! - Construction and naming errors
//!
//! # Design Philosophy
//!
//! - **Immutable trees**: sub-terms live behind `Arc`, so a term can be reused
//!   at many sites and shared across threads without copying.
//! - **Complete by construction**: `Term` constructors take every required
//!   part by type. Builders collect parts incrementally and validate once,
//!   in `build`.
//! - **Structural equality**: two terms are equal iff they have the same
//!   variant and recursively equal fields.

mod builder;
mod errors;
mod name;
mod pretty;
mod term;
mod types;

pub use builder::{FixBuilder, FunBuilder, IfzBuilder, LetBuilder, TermBuilder};
pub use errors::{ConstructionError, NamingError, TypeNameError};
pub use name::{BoundVariable, Name, BOUND_SIGIL};
pub use term::{BinaryOp, Term};
pub use types::PcfType;
