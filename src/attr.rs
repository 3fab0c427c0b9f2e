//! The console attribute word and its color encoding.
//!
//! A Windows console tracks one 16-bit [`Attribute`] word per screen buffer.
//! Its low byte encodes the foreground and background [`Color`]s, four bits
//! each; the remaining bits carry unrelated display flags that this module
//! reads and writes but never modifies.

#[cfg(feature = "pyffi")]
use pyo3::FromPyObject;

use crate::err::ColorError;

/// Attribute bit for a blue foreground.
const FOREGROUND_BLUE: u16 = 0x0001;
/// Attribute bit for a green foreground.
const FOREGROUND_GREEN: u16 = 0x0002;
/// Attribute bit for a red foreground.
const FOREGROUND_RED: u16 = 0x0004;
/// Attribute bit for an intensified foreground.
const FOREGROUND_INTENSITY: u16 = 0x0008;
/// Attribute bit for a blue background.
const BACKGROUND_BLUE: u16 = 0x0010;
/// Attribute bit for a green background.
const BACKGROUND_GREEN: u16 = 0x0020;
/// Attribute bit for a red background.
const BACKGROUND_RED: u16 = 0x0040;
/// Attribute bit for an intensified background.
const BACKGROUND_INTENSITY: u16 = 0x0080;

const FOREGROUND_BITS: u16 =
    FOREGROUND_BLUE | FOREGROUND_GREEN | FOREGROUND_RED | FOREGROUND_INTENSITY;
const BACKGROUND_BITS: u16 =
    BACKGROUND_BLUE | BACKGROUND_GREEN | BACKGROUND_RED | BACKGROUND_INTENSITY;

// ====================================================================================================================
// Color
// ====================================================================================================================

/// The names of the 16 console palette colors, with name at index *i* naming
/// color value *i*.
///
/// The palette really does name both 0 and 8 `BLACK`, even though value 8 is
/// the intensified variant. The duplication is kept as-is; name lookup scans
/// in order, so the name always resolves to 0.
const COLOR_NAMES: [&str; 16] = [
    "BLACK", "NAVY", "MAROON", "PURPLE", "GREEN", "TEAL", "OLIVE", "GRAY", "BLACK", "BLUE", "RED",
    "FUCHSIA", "LIME", "AQUA", "YELLOW", "WHITE",
];

/// A console palette color.
///
/// A color is a value in `0..=15` with bit 0 for blue, bit 1 for red, bit 2
/// for green, and bit 3 for intensity. Mind the ordering: it differs from the
/// attribute word, whose second and third bits per channel are green and red,
/// respectively. [`Attribute`] translates between the two layouts.
///
/// Rust code converts between numbers and colors with `TryFrom<u8>`,
/// `TryFrom<i64>`, and `u8 as From<Color>`; strings parse through `FromStr`,
/// accepting a palette name (case-insensitively) or a string of decimal
/// digits.
///
/// ```
/// # use wincon::Color;
/// let red: Color = "red".parse()?;
/// assert_eq!(red.value(), 10);
/// assert_eq!(red.name(), "RED");
/// # Ok::<(), wincon::err::ColorError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// The largest valid color value.
    pub const MAX: u8 = 15;

    /// Look up a color by its palette name, ignoring case.
    ///
    /// The lookup scans the palette in order and the first match wins. That
    /// matters for `BLACK`, which appears at values 0 and 8; it resolves
    /// to 0.
    pub fn from_name(name: &str) -> Option<Self> {
        COLOR_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|index| Self(index as u8))
    }

    /// Get this color's value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Get this color's palette name.
    pub const fn name(&self) -> &'static str {
        COLOR_NAMES[self.0 as usize]
    }
}

impl TryFrom<u8> for Color {
    type Error = ColorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ColorError::OutOfBounds(value.into()))
        }
    }
}

impl TryFrom<i64> for Color {
    type Error = ColorError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ColorError::OutOfBounds(value))
            .and_then(Self::try_from)
    }
}

impl From<Color> for u8 {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(color) = Self::from_name(s) {
            return Ok(color);
        }
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let value = s
                .parse::<i64>()
                .map_err(|_| ColorError::UnknownName(s.to_string()))?;
            return Self::try_from(value);
        }
        Err(ColorError::UnknownName(s.to_string()))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
// Color specification
// ====================================================================================================================

/// A caller-supplied color argument.
///
/// Color setters accept colors as numbers or as name strings. This type
/// captures the argument before validation; [`ColorSpec::resolve`] performs
/// the validation. With the `pyffi` feature enabled, it also extracts from
/// Python integers and strings.
#[cfg_attr(feature = "pyffi", derive(FromPyObject))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    /// A color as a number, validated against `0..=15` on resolution.
    Value(i64),
    /// A color as a palette name or a string of decimal digits.
    Name(String),
}

impl ColorSpec {
    /// Resolve this specification into a color.
    ///
    /// Numbers must lie in `0..=15`. Strings resolve through the palette
    /// first and, failing that, parse as decimal numbers.
    pub fn resolve(&self) -> Result<Color, ColorError> {
        match self {
            Self::Value(value) => Color::try_from(*value),
            Self::Name(name) => name.parse(),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(value: Color) -> Self {
        Self::Value(value.value().into())
    }
}

impl From<i64> for ColorSpec {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

// ====================================================================================================================
// Attribute
// ====================================================================================================================

/// A console text attribute word.
///
/// The console reports and accepts its text attribute as one 16-bit word.
/// This type decodes the foreground and background [`Color`]s out of that
/// word and re-encodes them one channel at a time, passing every bit it does
/// not understand through unchanged. It performs no I/O of its own; reading
/// and writing the live attribute is [`Console`](crate::Console)'s job.
///
/// ```
/// # use wincon::{Attribute, Color};
/// let attribute = Attribute::from(0x0007);
/// assert_eq!(attribute.foreground().name(), "GRAY");
/// let loud = attribute.with_foreground("YELLOW".parse()?);
/// assert_eq!(loud.foreground().value(), 14);
/// assert_eq!(loud.background(), attribute.background());
/// # Ok::<(), wincon::err::ColorError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attribute(u16);

impl Attribute {
    /// Get this attribute's raw 16-bit value.
    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Decode the foreground color.
    pub fn foreground(&self) -> Color {
        let mut value = 0;
        if self.0 & FOREGROUND_BLUE != 0 {
            value |= 1;
        }
        if self.0 & FOREGROUND_RED != 0 {
            value |= 2;
        }
        if self.0 & FOREGROUND_GREEN != 0 {
            value |= 4;
        }
        if self.0 & FOREGROUND_INTENSITY != 0 {
            value |= 8;
        }
        Color(value)
    }

    /// Decode the background color.
    pub fn background(&self) -> Color {
        let mut value = 0;
        if self.0 & BACKGROUND_BLUE != 0 {
            value |= 1;
        }
        if self.0 & BACKGROUND_RED != 0 {
            value |= 2;
        }
        if self.0 & BACKGROUND_GREEN != 0 {
            value |= 4;
        }
        if self.0 & BACKGROUND_INTENSITY != 0 {
            value |= 8;
        }
        Color(value)
    }

    /// Create a new attribute with the given foreground color.
    ///
    /// Only the four foreground bits change; the background and all
    /// unrelated flag bits carry over.
    #[must_use = "the method returns a new attribute and does not mutate this attribute"]
    pub fn with_foreground(&self, color: Color) -> Self {
        let mut raw = self.0 & !FOREGROUND_BITS;
        let value = color.value();
        if value & 1 != 0 {
            raw |= FOREGROUND_BLUE;
        }
        if value & 2 != 0 {
            raw |= FOREGROUND_RED;
        }
        if value & 4 != 0 {
            raw |= FOREGROUND_GREEN;
        }
        if value & 8 != 0 {
            raw |= FOREGROUND_INTENSITY;
        }
        Self(raw)
    }

    /// Create a new attribute with the given background color.
    ///
    /// Only the four background bits change; the foreground and all
    /// unrelated flag bits carry over.
    #[must_use = "the method returns a new attribute and does not mutate this attribute"]
    pub fn with_background(&self, color: Color) -> Self {
        let mut raw = self.0 & !BACKGROUND_BITS;
        let value = color.value();
        if value & 1 != 0 {
            raw |= BACKGROUND_BLUE;
        }
        if value & 2 != 0 {
            raw |= BACKGROUND_RED;
        }
        if value & 4 != 0 {
            raw |= BACKGROUND_GREEN;
        }
        if value & 8 != 0 {
            raw |= BACKGROUND_INTENSITY;
        }
        Self(raw)
    }
}

impl From<u16> for Attribute {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Attribute> for u16 {
    fn from(value: Attribute) -> Self {
        value.0
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("0x{:04x}", self.0))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Attribute, Color, ColorSpec, BACKGROUND_BITS, FOREGROUND_BITS};
    use crate::err::ColorError;

    #[test]
    fn test_round_trip() -> Result<(), ColorError> {
        // Unrelated flag bits, e.g. COMMON_LVB_REVERSE_VIDEO, must survive.
        let flags = Attribute::from(0x4500);

        for value in 0..=Color::MAX {
            let color = Color::try_from(value)?;

            let with_fore = flags.with_foreground(color);
            assert_eq!(with_fore.foreground(), color);
            assert_eq!(with_fore.value() & !FOREGROUND_BITS, 0x4500);

            let with_back = flags.with_background(color);
            assert_eq!(with_back.background(), color);
            assert_eq!(with_back.value() & !BACKGROUND_BITS, 0x4500);
        }

        Ok(())
    }

    #[test]
    fn test_channel_isolation() -> Result<(), ColorError> {
        let attribute = Attribute::from(0x00f0).with_foreground(Color::try_from(10u8)?);
        assert_eq!(attribute.foreground().value(), 10);
        assert_eq!(attribute.background().value(), 15);

        let attribute = attribute.with_background(Color::try_from(1u8)?);
        assert_eq!(attribute.foreground().value(), 10);
        assert_eq!(attribute.background().value(), 1);

        Ok(())
    }

    #[test]
    fn test_bit_layout() {
        // Color bit 1 is red but attribute bit 1 is green. MAROON (2) is the
        // dark red at FOREGROUND_RED = 0x0004, GREEN (4) at 0x0002.
        let maroon = Attribute::default().with_foreground(Color(2));
        assert_eq!(maroon.value(), 0x0004);
        let green = Attribute::default().with_foreground(Color(4));
        assert_eq!(green.value(), 0x0002);
        let navy_back = Attribute::default().with_background(Color(1));
        assert_eq!(navy_back.value(), 0x0010);
    }

    #[test]
    fn test_names() {
        let red = Color::from_name("red").unwrap();
        assert_eq!(red.value(), 10);
        let white = Color::from_name("WhItE").unwrap();
        assert_eq!(white.value(), 15);
        assert!(Color::from_name("chartreuse").is_none());

        // BLACK appears twice; the lookup resolves to the first entry while
        // value 8 still renders under the duplicated name.
        assert_eq!(Color::from_name("black").unwrap().value(), 0);
        assert_eq!(Color(8).name(), "BLACK");
    }

    #[test]
    fn test_parsing() {
        assert_eq!("NAVY".parse::<Color>(), Ok(Color(1)));
        assert_eq!("10".parse::<Color>(), Ok(Color(10)));
        assert_eq!("16".parse::<Color>(), Err(ColorError::OutOfBounds(16)));
        assert_eq!(
            "-1".parse::<Color>(),
            Err(ColorError::UnknownName("-1".to_string()))
        );
        assert_eq!(
            "".parse::<Color>(),
            Err(ColorError::UnknownName(String::new()))
        );
    }

    #[test]
    fn test_resolution() {
        assert_eq!(ColorSpec::from("white").resolve(), Ok(Color(15)));
        assert_eq!(ColorSpec::from(0).resolve(), Ok(Color(0)));
        assert_eq!(
            ColorSpec::from(16).resolve(),
            Err(ColorError::OutOfBounds(16))
        );
        assert_eq!(
            ColorSpec::from(-1).resolve(),
            Err(ColorError::OutOfBounds(-1))
        );
    }
}
