//! PCF type tags.
//!
//! Only the data model: nothing in the interpreter checks or infers types.

use std::fmt;
use std::sync::Arc;

use crate::TypeNameError;

/// A PCF type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PcfType {
    /// The natural numbers, written `Nat`.
    Natural,
    /// `from -> to`.
    FunctionType { from: Arc<PcfType>, to: Arc<PcfType> },
}

impl PcfType {
    /// Look up a built-in base type by name.
    pub fn base(name: &str) -> Result<Self, TypeNameError> {
        match name {
            "Nat" => Ok(PcfType::Natural),
            _ => Err(TypeNameError::Unsupported {
                name: name.to_string(),
            }),
        }
    }

    pub fn function(from: impl Into<Arc<PcfType>>, to: impl Into<Arc<PcfType>>) -> Self {
        PcfType::FunctionType {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for PcfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PcfType::Natural => f.write_str("Nat"),
            PcfType::FunctionType { from, to } => {
                if matches!(**from, PcfType::FunctionType { .. }) {
                    write!(f, "({from}) -> {to}")
                } else {
                    write!(f, "{from} -> {to}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
