//! Utility module with wincon's errors.
//!
//! OS-level failures never surface as errors in this crate: per the console
//! adapter's contract, they turn into the absence of a result (see
//! [`Console`](crate::Console)). The types in this module cover the other
//! failure tier, i.e., invalid caller input, which always aborts the call.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, PyErr};

/// An erroneous color argument.
///
/// Color setters accept colors as numbers in `0..=15` and as names from the
/// console palette. This error covers both ways an argument can miss:
///
///   * a number outside the valid range, including an explicit `-1`, which is
///     not a stand-in for "leave unchanged" — that's what omitting the
///     argument is for;
///   * a string that is neither a palette name nor a string of decimal
///     digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// A color value outside of `0..=15`.
    OutOfBounds(i64),
    /// A string that resolves to neither a color name nor a color value.
    UnknownName(String),
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(value) => f.write_fmt(format_args!(
                "color value {} does not fit into range 0..=15",
                value
            )),
            Self::UnknownName(name) => f.write_fmt(format_args!(
                "\"{}\" is neither a color name nor a decimal color value",
                name
            )),
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous codepage argument.
///
/// A string that is neither a recognized codepage name nor a decimal number
/// is an error rather than silently defaulting to codepage 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodepageError {
    name: String,
}

impl CodepageError {
    /// Create a new codepage error for the given unresolvable name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for CodepageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "\"{}\" is neither a codepage name nor a decimal codepage number",
            self.name
        ))
    }
}

impl std::error::Error for CodepageError {}

#[cfg(feature = "pyffi")]
impl From<CodepageError> for PyErr {
    fn from(value: CodepageError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
