//! Validated identifiers.
//!
//! A `Name` is non-empty and never carries the bound-variable sigil; the
//! sigil only decides, at construction time, whether identifier text becomes
//! a `Variable` or a `BoundVariable` term. Both resolve identically during
//! evaluation.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::NamingError;

/// Leading character that marks identifier text as a bound variable.
pub const BOUND_SIGIL: char = '$';

/// Non-empty identifier text, cheap to clone.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
    /// Create a name from identifier text.
    ///
    /// A leading [`BOUND_SIGIL`] is stripped, so `"$x"` and `"x"` produce the
    /// same name.
    pub fn new(text: &str) -> Result<Self, NamingError> {
        let (_, bare) = split_sigil(text)?;
        Ok(Name(Arc::from(bare)))
    }

    /// The identifier text, without sigil.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Split identifier text into its sigil flag and bare name.
pub(crate) fn split_sigil(text: &str) -> Result<(bool, &str), NamingError> {
    if text.is_empty() {
        return Err(NamingError::Empty);
    }
    match text.strip_prefix(BOUND_SIGIL) {
        Some("") => Err(NamingError::SigilOnly { sigil: BOUND_SIGIL }),
        Some(bare) => Ok((true, bare)),
        None => Ok((false, text)),
    }
}

impl TryFrom<&str> for Name {
    type Error = NamingError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Name::new(text)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name introduced by a binder: function parameter, `let` or `fix`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundVariable(Name);

impl BoundVariable {
    /// Create a bound variable from identifier text, with or without sigil.
    pub fn new(text: &str) -> Result<Self, NamingError> {
        Name::new(text).map(BoundVariable)
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Name> for BoundVariable {
    fn from(name: Name) -> Self {
        BoundVariable(name)
    }
}

impl From<BoundVariable> for Name {
    fn from(variable: BoundVariable) -> Self {
        variable.0
    }
}

impl TryFrom<&str> for BoundVariable {
    type Error = NamingError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        BoundVariable::new(text)
    }
}

impl fmt::Display for BoundVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
