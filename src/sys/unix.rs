//! The non-Windows stand-in for the console subsystem.
//!
//! Only Windows has console text attributes and codepages. On every other
//! platform this module behaves like a process that never has a console
//! attached: the console lookup fails, so attribute operations take their
//! soft-failure paths, and the codepage reads report UTF-8, the only
//! encoding a modern Unix terminal reasonably uses.

use std::io::{Error, ErrorKind, Result};

/// The console attached to the process's standard output.
///
/// No value of this type ever exists on this platform; the lookup is the
/// only constructor and it always fails.
#[derive(Debug)]
pub(crate) enum RawConsole {}

impl RawConsole {
    /// Acquire the standard output console. Always fails on this platform.
    pub fn output() -> Result<Self> {
        Err(Error::from(ErrorKind::Unsupported))
    }

    /// Read the current text attribute.
    pub fn attribute(&self) -> Result<u16> {
        match *self {}
    }

    /// Write the text attribute.
    pub fn set_attribute(&self, _attribute: u16) -> Result<()> {
        match *self {}
    }
}

/// Get the console's input codepage.
pub(crate) fn input_codepage() -> u32 {
    65_001
}

/// Set the console's input codepage.
pub(crate) fn set_input_codepage(_codepage: u32) -> Result<()> {
    Err(Error::from(ErrorKind::Unsupported))
}

/// Get the console's output codepage.
pub(crate) fn output_codepage() -> u32 {
    65_001
}

/// Set the console's output codepage.
pub(crate) fn set_output_codepage(_codepage: u32) -> Result<()> {
    Err(Error::from(ErrorKind::Unsupported))
}
