//! Console codepages.
//!
//! A codepage is a numeric identifier selecting the character encoding the
//! console uses for input or output. This module models the identifier and
//! the handful of symbolic names the original module recognized; the live
//! console codepages are read and written through
//! [`Console`](crate::Console).

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::err::CodepageError;

/// The recognized codepage names.
///
/// The first five entries are the `CP_*` pseudo-identifiers that Windows
/// resolves to the system's current ANSI, OEM, Mac, thread-ANSI, and symbol
/// codepages.
const CODEPAGE_NAMES: [(&str, u32); 7] = [
    ("ANSI", 0),
    ("OEM", 1),
    ("MAC", 2),
    ("T_ANSI", 3),
    ("SYMBOL", 4),
    ("UTF7", 65000),
    ("UTF8", 65001),
];

/// A console codepage identifier.
///
/// Any `u32` converts into a codepage; whether the operating system accepts
/// it only becomes apparent when applying it. Strings parse through a
/// case-insensitive name lookup with a decimal fallback:
///
/// ```
/// # use wincon::Codepage;
/// assert_eq!("utf8".parse::<Codepage>()?, Codepage::UTF8);
/// assert_eq!("65001".parse::<Codepage>()?, Codepage::UTF8);
/// assert!("latin-1".parse::<Codepage>().is_err());
/// # Ok::<(), wincon::err::CodepageError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Codepage(u32);

impl Codepage {
    /// The UTF-8 codepage.
    pub const UTF8: Codepage = Codepage(65_001);

    /// Look up a codepage by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        CODEPAGE_NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, cp)| Self(*cp))
    }

    /// Get this codepage's numeric identifier.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Codepage {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Codepage> for u32 {
    fn from(value: Codepage) -> Self {
        value.0
    }
}

impl std::str::FromStr for Codepage {
    type Err = CodepageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(codepage) = Self::from_name(s) {
            return Ok(codepage);
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| CodepageError::new(s))
    }
}

impl std::fmt::Display for Codepage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.0))
    }
}

// ====================================================================================================================

/// A caller-supplied codepage argument.
///
/// Codepage setters accept either a number, which is used directly, or a
/// string, which resolves by name with a decimal fallback. Numbers are cast
/// to `u32`, so negative values wrap rather than fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodepageSpec {
    /// A codepage as a number.
    Number(i64),
    /// A codepage as a name or a decimal string.
    Name(String),
}

impl CodepageSpec {
    /// Resolve this specification into a codepage.
    pub fn resolve(&self) -> Result<Codepage, CodepageError> {
        match self {
            Self::Number(number) => Ok(Codepage(*number as u32)),
            Self::Name(name) => name.parse(),
        }
    }

    /// Extract a codepage specification from a Python object, returning
    /// `None` for unsupported argument types. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub(crate) fn from_object(object: &Bound<'_, PyAny>) -> Option<Self> {
        if let Ok(name) = object.extract::<String>() {
            Some(Self::Name(name))
        } else if let Ok(number) = object.extract::<i64>() {
            Some(Self::Number(number))
        } else {
            None
        }
    }
}

impl From<u32> for CodepageSpec {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for CodepageSpec {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Codepage, CodepageSpec};

    #[test]
    fn test_names() {
        assert_eq!(Codepage::from_name("UTF8"), Some(Codepage::UTF8));
        assert_eq!(Codepage::from_name("utf8"), Some(Codepage::UTF8));
        assert_eq!(Codepage::from_name("t_ansi"), Some(Codepage::from(3)));
        assert_eq!(Codepage::from_name("oem"), Some(Codepage::from(1)));
        assert_eq!(Codepage::from_name("utf16"), None);
    }

    #[test]
    fn test_parsing() {
        assert_eq!("UTF7".parse::<Codepage>(), Ok(Codepage::from(65_000)));
        assert_eq!("65001".parse::<Codepage>(), Ok(Codepage::UTF8));
        assert_eq!("437".parse::<Codepage>(), Ok(Codepage::from(437)));
        assert!("shift-jis".parse::<Codepage>().is_err());
        assert!("".parse::<Codepage>().is_err());
    }

    #[test]
    fn test_resolution() {
        assert_eq!(
            CodepageSpec::from("utf8").resolve(),
            Ok(Codepage::UTF8)
        );
        assert_eq!(
            CodepageSpec::from("65001").resolve(),
            Ok(Codepage::UTF8)
        );
        assert_eq!(CodepageSpec::from(65_001).resolve(), Ok(Codepage::UTF8));
        assert_eq!(
            CodepageSpec::Number(-1).resolve(),
            Ok(Codepage::from(u32::MAX))
        );
        assert!(CodepageSpec::from("nope").resolve().is_err());
    }
}
