//! # Wincon
//!
//! This crate provides **scriptable control over the Windows console's text
//! attributes and codepages**. It wraps a handful of console APIs behind a
//! small, explicit adapter and performs the bit-level translation between
//! the console's 16-bit attribute word and the 16-color palette that console
//! applications actually think in.
//!
//! The crate serves two audiences with one codebase:
//!
//!   * **Rust applications** use [`Console`] directly, together with the
//!     [`Attribute`], [`Color`], and [`Codepage`] value types.
//!   * **Embedding scripting hosts** load the crate as a native extension
//!     module. With the `pyffi` feature enabled, the crate builds as a
//!     Python extension exposing the [`Console`] class, whose method names
//!     keep the long-standing `wincon` scripting interface verbatim:
//!     `GetTextAttribute`, `SetTextAttribute`, `GetTextColor`,
//!     `SetTextColor`, `InitialTextAttribute`, `GetCodepage`, `SetCodepage`,
//!     `GetOutputCodepage`, and `SetOutputCodepage`.
//!
//!
//! # Example
//!
//! ```no_run
//! # use wincon::{ColorSpec, Console};
//! # fn main() -> Result<(), wincon::err::ColorError> {
//! let console = Console::new();
//!
//! // Turn the foreground red, remember what it was.
//! let previous = console.set_text_color(Some(&ColorSpec::from("RED")), None)?;
//! println!("this line is angry");
//!
//! // Put things back. `previous` is None when there is no console, e.g.,
//! // when output is redirected, in which case there is nothing to undo.
//! if let Some(previous) = previous {
//!     console.set_text_attribute(previous);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Dropping the [`Console`] restores the attribute captured at creation, so
//! even an application that never cleans up after itself leaves the console
//! the way it found it. Assign `-1` through
//! [`Console::set_initial_attribute`] to opt out.
//!
//!
//! # Failure Model
//!
//! Operations distinguish caller mistakes from environmental conditions. A
//! color outside `0..=15` or an unresolvable name is an error — in Python, an
//! exception. A missing console or a failing OS call is an expected
//! condition and simply produces no result, so scripts can probe for console
//! support by checking for `None`.
//!
//!
//! # Beyond Windows
//!
//! Console attributes and codepages exist on Windows only. On other
//! platforms the crate still builds and behaves like a Windows process
//! without an attached console: attribute operations produce no result and
//! the codepage reads report UTF-8.

mod attr;
mod con;
mod cp;
pub mod err;
mod sys;

pub use attr::{Attribute, Color, ColorSpec};
pub use con::Console;
pub use cp::{Codepage, CodepageSpec};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The Python extension module.
#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn wincon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Console>()?;
    Ok(())
}
