//! Conversion of unsigned integers between positional numeral systems.
//!
//! Digits use the alphabet `0-9a-z`. Input is read case-insensitively and output is always
//! lowercase, so `convert("FF", 16, 2)` and `convert("ff", 16, 2)` both give `"11111111"`.
//!
//! Radices outside 2..=36 are rejected outright rather than falling back to base 10.

#[cfg(not(feature = "std"))]
use crate::no_std::*;

use core::fmt;

use paste::paste;
use snafu::prelude::*;

use crate::error::*;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A validated numeral-system base.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: Radix = Radix(2);
    pub const MAX: Radix = Radix(36);

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Validates `radix`.
    ///
    /// # Errors
    /// Returns [`InvalidRadix`](Error::InvalidRadix) if `radix` is outside 2..=36.
    #[inline]
    pub fn new(radix: u32) -> Result<Self> {
        ensure!((Self::MIN.0..=Self::MAX.0).contains(&radix), InvalidRadixSnafu { radix });
        Ok(Self(radix))
    }

    #[must_use]
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    #[inline]
    fn try_from(radix: u32) -> Result<Self> {
        Self::new(radix)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base-{}", self.0)
    }
}

/// Reads `text` as an unsigned number written in `radix`.
///
/// A single leading `+` is accepted. Anything else outside the radix alphabet, an empty string,
/// or a value too large for a `u64` is an error.
///
/// # Errors
/// Returns [`InvalidDigits`](Error::InvalidDigits) if `text` isn't a valid number in `radix`.
pub fn parse(text: &str, radix: Radix) -> Result<u64> {
    u64::from_str_radix(text, radix.0).context(InvalidDigitsSnafu { text, radix: radix.0 })
}

/// Writes `value` out in `radix`, using lowercase letters for digits past 9.
#[must_use]
pub fn format(mut value: u64, radix: Radix) -> String {
    if value == 0 {
        return String::from("0");
    }

    let base = u64::from(radix.0);
    // 64 binary digits is the longest any u64 can get
    let mut buffer = [0u8; 64];
    let mut start = buffer.len();
    while value > 0 {
        start -= 1;
        buffer[start] = DIGITS[(value % base) as usize];
        value /= base;
    }

    buffer[start..].iter().map(|&digit| char::from(digit)).collect()
}

/// Writes `value` out in `radix`, prefixing negative values with `-`.
///
/// # Errors
/// Returns [`InvalidRadix`](Error::InvalidRadix) if `radix` is outside 2..=36.
pub fn format_signed(value: i64, radix: u32) -> Result<String> {
    let radix = Radix::new(radix)?;
    let magnitude = self::format(value.unsigned_abs(), radix);
    Ok(if value < 0 { ["-", &magnitude].concat() } else { magnitude })
}

/// Converts `text`, written in base `from`, into base `to`.
///
/// ```
/// use numkit_core::radix::convert;
///
/// assert_eq!(convert("1010", 2, 16).unwrap(), "a");
/// assert!(convert("12", 2, 10).is_err());
/// ```
///
/// # Errors
/// Returns [`InvalidRadix`](Error::InvalidRadix) if either radix is outside 2..=36, or
/// [`InvalidDigits`](Error::InvalidDigits) if `text` isn't a valid number in `from`.
pub fn convert(text: &str, from: u32, to: u32) -> Result<String> {
    let from = Radix::new(from)?;
    let to = Radix::new(to)?;
    let value = self::parse(text, from)?;
    log::trace!("Converting {text:?} from {from} to {to}");
    Ok(self::format(value, to))
}

/// Converts a decimal value into base `to`.
///
/// # Errors
/// Returns [`InvalidRadix`](Error::InvalidRadix) if `to` is outside 2..=36.
#[inline]
pub fn convert_decimal(value: u64, to: u32) -> Result<String> {
    Ok(self::format(value, Radix::new(to)?))
}

macro_rules! from_decimal {
    ($($to:ident),+) => {
        paste! {
            $(
                #[doc = "Converts a decimal value to " $to "."]
                #[must_use]
                #[inline]
                pub fn [<convert_decimal_to_ $to>](value: u64) -> String {
                    self::format(value, Radix::[<$to:upper>])
                }
            )+
        }
    };
}

macro_rules! between {
    ($($from:ident => $to:ident),+ $(,)?) => {
        paste! {
            $(
                #[doc = "Converts " $from " text to " $to "."]
                #[doc = ""]
                #[doc = "# Errors"]
                #[doc = "Returns [`InvalidDigits`](Error::InvalidDigits) if the text isn't valid " $from "."]
                #[inline]
                pub fn [<convert_ $from _to_ $to>](text: &str) -> Result<String> {
                    let value = self::parse(text, Radix::[<$from:upper>])?;
                    Ok(self::format(value, Radix::[<$to:upper>]))
                }
            )+
        }
    };
}

from_decimal!(hexadecimal, binary, octal);

between!(
    binary => hexadecimal,
    binary => octal,
    binary => decimal,
    hexadecimal => binary,
    hexadecimal => octal,
    hexadecimal => decimal,
    octal => binary,
    octal => hexadecimal,
    octal => decimal,
);
