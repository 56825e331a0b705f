//! Errors raised while constructing terms and types.
//!
//! All of these surface immediately at construction time; none is ever
//! deferred to evaluation.

use thiserror::Error;

/// Malformed identifier text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NamingError {
    /// The identifier text was empty.
    #[error("empty string is not a valid identifier")]
    Empty,
    /// The identifier text consisted only of the bound-variable sigil.
    #[error("`{sigil}` alone is not a valid identifier")]
    SigilOnly { sigil: char },
}

/// A builder was finalized before all of its required parts were supplied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("cannot build `{construct}` without {part}")]
    Missing {
        /// The construct being built (`fun`, `ifz`, `fix`, `let`).
        construct: &'static str,
        /// The missing part, as it reads in the construct's syntax.
        part: &'static str,
    },
}

impl ConstructionError {
    pub(crate) fn missing(construct: &'static str, part: &'static str) -> Self {
        ConstructionError::Missing { construct, part }
    }
}

/// Unknown base type name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeNameError {
    #[error("unsupported base type `{name}`: only `Nat` is built in")]
    Unsupported { name: String },
}
