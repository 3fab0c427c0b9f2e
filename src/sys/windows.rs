use std::io::{Error, ErrorKind, Result};
use std::mem::MaybeUninit;

use windows_sys::Win32::Foundation;
use windows_sys::Win32::System::Console::{self, CONSOLE_SCREEN_BUFFER_INFO};

use super::util::IntoResult;
use super::RawHandle;

/// The console attached to the process's standard output.
///
/// The handle is looked up anew for every console object rather than cached,
/// since a process may gain or lose its console at any time, e.g., through
/// `AllocConsole` and `FreeConsole`.
#[derive(Debug)]
pub(crate) struct RawConsole {
    handle: RawHandle,
}

impl RawConsole {
    /// Acquire the standard output console.
    ///
    /// The lookup fails when the process has no standard output handle at
    /// all or when that handle is invalid.
    pub fn output() -> Result<Self> {
        // SAFETY: GetStdHandle has no preconditions.
        let handle = unsafe { Console::GetStdHandle(Console::STD_OUTPUT_HANDLE) };
        if handle.is_null() || handle == Foundation::INVALID_HANDLE_VALUE {
            Err(Error::from(ErrorKind::NotConnected))
        } else {
            Ok(Self { handle })
        }
    }

    /// Read the current text attribute from the screen buffer.
    ///
    /// This fails when the handle does not refer to a console, e.g., when
    /// standard output is redirected to a file or pipe.
    pub fn attribute(&self) -> Result<u16> {
        let mut info = MaybeUninit::<CONSOLE_SCREEN_BUFFER_INFO>::uninit();
        // SAFETY: the pointer is valid for writes of CONSOLE_SCREEN_BUFFER_INFO
        // and the call initializes it on success.
        unsafe { Console::GetConsoleScreenBufferInfo(self.handle, info.as_mut_ptr()) }
            .into_result()?;
        // SAFETY: the call above succeeded, so the struct is initialized.
        let info = unsafe { info.assume_init() };
        Ok(info.wAttributes)
    }

    /// Write the text attribute to the screen buffer.
    pub fn set_attribute(&self, attribute: u16) -> Result<()> {
        // SAFETY: the handle was validated on lookup; the call performs no
        // writes through pointers.
        unsafe { Console::SetConsoleTextAttribute(self.handle, attribute) }.into_result()?;
        Ok(())
    }
}

/// Get the console's input codepage.
pub(crate) fn input_codepage() -> u32 {
    // SAFETY: GetConsoleCP has no preconditions.
    unsafe { Console::GetConsoleCP() }
}

/// Set the console's input codepage.
pub(crate) fn set_input_codepage(codepage: u32) -> Result<()> {
    // SAFETY: SetConsoleCP has no preconditions.
    unsafe { Console::SetConsoleCP(codepage) }.into_result()?;
    Ok(())
}

/// Get the console's output codepage.
pub(crate) fn output_codepage() -> u32 {
    // SAFETY: GetConsoleOutputCP has no preconditions.
    unsafe { Console::GetConsoleOutputCP() }
}

/// Set the console's output codepage.
pub(crate) fn set_output_codepage(codepage: u32) -> Result<()> {
    // SAFETY: SetConsoleOutputCP has no preconditions.
    unsafe { Console::SetConsoleOutputCP(codepage) }.into_result()?;
    Ok(())
}
