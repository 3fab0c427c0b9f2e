//! The console adapter.

use std::cell::Cell;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::attr::{Attribute, Color, ColorSpec};
use crate::cp::{Codepage, CodepageSpec};
use crate::err::{CodepageError, ColorError};
use crate::sys::{self, RawConsole};

/// An adapter for the console attached to the process's standard output.
///
/// A console object owns the saved default appearance instead of hiding it
/// in process-global state: creating one captures the console's current text
/// attribute as the *initial attribute*, and dropping one restores that
/// attribute, so the console leaves an application looking the way it
/// entered. [`Console::restore`] performs the restoration eagerly for hosts
/// that manage their own shutdown order.
///
/// All operations target the standard output console. They acquire the
/// handle anew on every call, so a console allocated after the object was
/// created is picked up transparently.
///
/// Every operation distinguishes two failure tiers. An invalid argument,
/// such as a color value outside `0..=15`, is a hard error and aborts the
/// call. A missing console or a failing OS call is a soft failure and merely
/// produces no result, i.e., `None`. Creating a console object never fails;
/// without a console, the initial attribute starts out as the unset
/// sentinel.
///
/// ```no_run
/// # use wincon::{Console, ColorSpec};
/// let console = Console::new();
/// let previous = console.set_text_color(
///     Some(&ColorSpec::from("yellow")),
///     None,
/// )?;
/// // ... print something loud ...
/// if let Some(previous) = previous {
///     console.set_text_attribute(previous);
/// }
/// # Ok::<(), wincon::err::ColorError>(())
/// ```
///
/// The adapter performs no synchronization; the embedding host is
/// responsible for confining an instance to one logical thread of control.
#[cfg_attr(feature = "pyffi", pyclass(unsendable, module = "wincon"))]
#[derive(Debug)]
pub struct Console {
    initial: Cell<i64>,
}

impl Console {
    /// The sentinel marking the initial attribute as unset.
    ///
    /// Assigning the sentinel through [`Console::set_initial_attribute`]
    /// disables restoration on drop.
    pub const UNSET: i64 = -1;

    /// Create a new console adapter.
    ///
    /// If a console is attached and its attribute can be queried, that
    /// attribute becomes the initial attribute. Otherwise the initial
    /// attribute remains [`Console::UNSET`].
    pub fn new() -> Self {
        let initial = RawConsole::output()
            .and_then(|console| console.attribute())
            .map_or(Self::UNSET, i64::from);
        Self {
            initial: Cell::new(initial),
        }
    }

    /// Read the console's current text attribute.
    ///
    /// The result is `None` when no console is attached or the query fails.
    pub fn text_attribute(&self) -> Option<Attribute> {
        let console = RawConsole::output().ok()?;
        console.attribute().ok().map(Attribute::from)
    }

    /// Write the text attribute verbatim to the console.
    ///
    /// This operation is fire-and-forget: it reports neither a missing
    /// console nor a failing OS call. The asymmetry with the getter is
    /// deliberate; scripts treat attribute writes as advisory.
    pub fn set_text_attribute(&self, attribute: Attribute) {
        if let Ok(console) = RawConsole::output() {
            let _ = console.set_attribute(attribute.value());
        }
    }

    /// Read the console's current foreground and background colors.
    ///
    /// The result is `None` when no console is attached or the query fails.
    pub fn text_color(&self) -> Option<(Color, Color)> {
        let attribute = self.text_attribute()?;
        Some((attribute.foreground(), attribute.background()))
    }

    /// Change the console's foreground and/or background color.
    ///
    /// Either argument may be omitted to leave that channel unchanged;
    /// omitting both still performs the read/write round trip. Arguments are
    /// validated before the console is touched, and an invalid one aborts
    /// the call with an error. Bits outside the two color channels carry
    /// over unchanged.
    ///
    /// On success, the result is the attribute read *before* the update —
    /// not the new one — so a caller can stash it away and restore it later.
    /// A missing console or failing OS call yields `Ok(None)`.
    pub fn set_text_color(
        &self,
        foreground: Option<&ColorSpec>,
        background: Option<&ColorSpec>,
    ) -> Result<Option<Attribute>, ColorError> {
        let foreground = foreground.map(ColorSpec::resolve).transpose()?;
        let background = background.map(ColorSpec::resolve).transpose()?;

        let Ok(console) = RawConsole::output() else {
            return Ok(None);
        };
        let Ok(raw) = console.attribute() else {
            return Ok(None);
        };

        let previous = Attribute::from(raw);
        let mut next = previous;
        if let Some(color) = foreground {
            next = next.with_foreground(color);
        }
        if let Some(color) = background {
            next = next.with_background(color);
        }

        if console.set_attribute(next.value()).is_err() {
            return Ok(None);
        }
        Ok(Some(previous))
    }

    /// Get the stored initial attribute.
    ///
    /// The result is [`Console::UNSET`] when no attribute was captured on
    /// creation and none has been assigned since.
    pub fn initial_attribute(&self) -> i64 {
        self.initial.get()
    }

    /// Overwrite the stored initial attribute and return the new value.
    ///
    /// Any integer is accepted, including [`Console::UNSET`] to disable
    /// restoration on drop. The console itself is not touched.
    pub fn set_initial_attribute(&self, attribute: i64) -> i64 {
        self.initial.set(attribute);
        attribute
    }

    /// Read the console's input codepage.
    pub fn codepage(&self) -> Codepage {
        Codepage::from(sys::input_codepage())
    }

    /// Change the console's input codepage.
    ///
    /// An unresolvable codepage name is a hard error. Otherwise the result
    /// reflects whether the operating system accepted the codepage.
    pub fn set_codepage(&self, codepage: &CodepageSpec) -> Result<bool, CodepageError> {
        let codepage = codepage.resolve()?;
        Ok(sys::set_input_codepage(codepage.value()).is_ok())
    }

    /// Read the console's output codepage.
    pub fn output_codepage(&self) -> Codepage {
        Codepage::from(sys::output_codepage())
    }

    /// Change the console's output codepage.
    ///
    /// An unresolvable codepage name is a hard error. Otherwise the result
    /// reflects whether the operating system accepted the codepage.
    pub fn set_output_codepage(&self, codepage: &CodepageSpec) -> Result<bool, CodepageError> {
        let codepage = codepage.resolve()?;
        Ok(sys::set_output_codepage(codepage.value()).is_ok())
    }

    /// Restore the console's text attribute to the initial attribute.
    ///
    /// This is a best-effort cleanup: when the initial attribute is unset,
    /// no console is attached, or the write fails, the method does nothing.
    /// It runs automatically when the object drops.
    pub fn restore(&self) {
        let initial = self.initial.get();
        if initial == Self::UNSET {
            return;
        }
        if let Ok(console) = RawConsole::output() {
            let _ = console.set_attribute(initial as u16);
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        self.restore();
    }
}

// ====================================================================================================================

/// The Python surface of the console adapter.
///
/// Method names keep the PascalCase spelling of the long-standing `wincon`
/// scripting interface so existing scripts keep working; soft failures
/// surface as `None` and invalid arguments raise exceptions.
#[cfg(feature = "pyffi")]
#[pymethods]
impl Console {
    #[new]
    fn py_new() -> Self {
        Self::new()
    }

    /// Get the console's current text attribute, or `None` on failure.
    #[pyo3(name = "GetTextAttribute")]
    fn py_text_attribute(&self) -> Option<u16> {
        self.text_attribute().map(u16::from)
    }

    /// Set the console's text attribute verbatim. Returns nothing.
    #[pyo3(name = "SetTextAttribute")]
    fn py_set_text_attribute(&self, attribute: u16) {
        self.set_text_attribute(Attribute::from(attribute));
    }

    /// Get the console's (foreground, background) colors, or `None` on
    /// failure.
    #[pyo3(name = "GetTextColor")]
    fn py_text_color(&self) -> Option<(u8, u8)> {
        self.text_color()
            .map(|(fore, back)| (fore.value(), back.value()))
    }

    /// Set the console's foreground and/or background color.
    ///
    /// Either argument may be a number in `0..=15`, a color name, or `None`
    /// to leave that channel unchanged. Returns the previous attribute, or
    /// `None` on failure. Raises `ValueError` for invalid colors.
    #[pyo3(name = "SetTextColor", signature = (foreground=None, background=None))]
    fn py_set_text_color(
        &self,
        foreground: Option<ColorSpec>,
        background: Option<ColorSpec>,
    ) -> PyResult<Option<u16>> {
        let previous = self.set_text_color(foreground.as_ref(), background.as_ref())?;
        Ok(previous.map(u16::from))
    }

    /// Get the stored initial attribute, overwriting it first if an
    /// argument is given. `-1` means "unset" and disables restoration.
    #[pyo3(name = "InitialTextAttribute", signature = (attribute=None))]
    fn py_initial_text_attribute(&self, attribute: Option<i64>) -> i64 {
        match attribute {
            Some(attribute) => self.set_initial_attribute(attribute),
            None => self.initial_attribute(),
        }
    }

    /// Get the console's input codepage.
    #[pyo3(name = "GetCodepage")]
    fn py_codepage(&self) -> u32 {
        self.codepage().value()
    }

    /// Set the console's input codepage by number or name.
    ///
    /// Returns whether the operating system accepted the codepage, or
    /// `None` for an unsupported argument type. Raises `ValueError` for an
    /// unresolvable name.
    #[pyo3(name = "SetCodepage")]
    fn py_set_codepage(&self, codepage: &Bound<'_, PyAny>) -> PyResult<Option<bool>> {
        match CodepageSpec::from_object(codepage) {
            Some(codepage) => Ok(Some(self.set_codepage(&codepage)?)),
            None => Ok(None),
        }
    }

    /// Get the console's output codepage.
    #[pyo3(name = "GetOutputCodepage")]
    fn py_output_codepage(&self) -> u32 {
        self.output_codepage().value()
    }

    /// Set the console's output codepage by number or name.
    ///
    /// Returns whether the operating system accepted the codepage, or
    /// `None` for an unsupported argument type. Raises `ValueError` for an
    /// unresolvable name.
    #[pyo3(name = "SetOutputCodepage")]
    fn py_set_output_codepage(&self, codepage: &Bound<'_, PyAny>) -> PyResult<Option<bool>> {
        match CodepageSpec::from_object(codepage) {
            Some(codepage) => Ok(Some(self.set_output_codepage(&codepage)?)),
            None => Ok(None),
        }
    }

    /// Restore the console's text attribute to the initial attribute.
    ///
    /// Best-effort; also runs when the object is garbage-collected.
    #[pyo3(name = "restore")]
    fn py_restore(&self) {
        self.restore();
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Console;
    use crate::attr::ColorSpec;
    use crate::cp::CodepageSpec;

    #[test]
    fn test_invalid_colors_error_without_console() {
        // Validation runs before the console is touched, so these hold on
        // every platform.
        let console = Console::new();
        assert!(console
            .set_text_color(Some(&ColorSpec::from(16)), None)
            .is_err());
        assert!(console
            .set_text_color(None, Some(&ColorSpec::from(-1)))
            .is_err());
        assert!(console
            .set_text_color(Some(&ColorSpec::from("no-such-color")), None)
            .is_err());
    }

    #[test]
    fn test_initial_attribute() {
        let console = Console::new();

        assert_eq!(console.set_initial_attribute(0x0017), 0x0017);
        assert_eq!(console.initial_attribute(), 0x0017);

        // Unsetting the attribute also gives the drop handler nothing to
        // restore, keeping this test free of visible side effects.
        assert_eq!(console.set_initial_attribute(Console::UNSET), Console::UNSET);
        assert_eq!(console.initial_attribute(), Console::UNSET);
    }

    #[test]
    fn test_unresolvable_codepage_errors() {
        let console = Console::new();
        console.set_initial_attribute(Console::UNSET);
        assert!(console
            .set_codepage(&CodepageSpec::from("no-such-codepage"))
            .is_err());
        assert!(console
            .set_output_codepage(&CodepageSpec::from("no-such-codepage"))
            .is_err());
    }

    #[cfg(not(target_family = "windows"))]
    #[test]
    fn test_consoleless_host() {
        let console = Console::new();
        assert_eq!(console.initial_attribute(), Console::UNSET);
        assert_eq!(console.text_attribute(), None);
        assert_eq!(console.text_color(), None);
        assert_eq!(console.set_text_color(None, None), Ok(None));
        assert_eq!(
            console.set_text_color(Some(&ColorSpec::from("RED")), None),
            Ok(None)
        );
        assert_eq!(console.codepage().value(), 65_001);
        assert_eq!(console.output_codepage().value(), 65_001);
        assert_eq!(console.set_codepage(&CodepageSpec::from("utf8")), Ok(false));
        assert_eq!(
            console.set_output_codepage(&CodepageSpec::from(65_001)),
            Ok(false)
        );
    }

    #[cfg(target_family = "windows")]
    #[test]
    fn test_attribute_round_trip() {
        // With a console attached, reading and immediately re-writing the
        // attribute is a no-op; without one, both sides soft-fail.
        let console = Console::new();
        if let Some(attribute) = console.text_attribute() {
            console.set_text_attribute(attribute);
            assert_eq!(console.text_attribute(), Some(attribute));

            let previous = console
                .set_text_color(None, None)
                .expect("omitted colors are valid");
            assert_eq!(previous, Some(attribute));
        } else {
            assert_eq!(console.set_text_color(None, None), Ok(None));
        }
    }
}
