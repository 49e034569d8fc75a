//! Binary-prefixed memory units, as defined by IEC 80000-13.
//!
//! Each [`MemoryUnit`] is a power of 1024, from a kibibyte (1024 bytes) up to a yobibyte
//! (1024^8 bytes). The byte value of every unit is stored in a constant table, both as an exact
//! [`u128`] and as an [`f64`]; since every entry is a power of two the floating point copy is
//! exact too.
//!
//! # Classification
//! [`MemoryUnit::classify`] picks the smallest unit that can hold a magnitude:
//!
//! | Magnitude (bytes) | Unit |
//! |-------------------|------|
//! | `0..=1024` | KiB |
//! | `1025..=1024^2` | MiB |
//! | ... | ... |
//! | `> 1024^7` | YiB |
//!
//! Anything larger than a yobibyte still classifies as YiB, since there is no bigger unit.

#[cfg(not(feature = "std"))]
use crate::no_std::*;

use core::fmt;
use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use snafu::prelude::*;

use crate::error::*;

/// The base that every unit is a power of.
pub const CONVERSION_STANDARD: u128 = 1024;

const BYTE_COUNTS: [u128; 8] = {
    let mut table = [0u128; 8];
    let mut value = 1;
    let mut i = 0;
    while i < table.len() {
        value *= CONVERSION_STANDARD;
        table[i] = value;
        i += 1;
    }
    table
};

const SCALARS: [f64; 8] = [
    1_024.0,
    1_048_576.0,
    1_073_741_824.0,
    1_099_511_627_776.0,
    1_125_899_906_842_624.0,
    1_152_921_504_606_846_976.0,
    1_180_591_620_717_411_303_424.0,
    1_208_925_819_614_629_174_706_176.0,
];

/// A binary-prefixed unit of memory. The discriminant is the power of 1024 it represents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MemoryUnit {
    /// 1024 bytes.
    Kibi = 1,
    /// 1024^2 bytes.
    Mebi = 2,
    /// 1024^3 bytes.
    Gibi = 3,
    /// 1024^4 bytes.
    Tebi = 4,
    /// 1024^5 bytes.
    Pebi = 5,
    /// 1024^6 bytes.
    Exbi = 6,
    /// 1024^7 bytes.
    Zebi = 7,
    /// 1024^8 bytes.
    Yobi = 8,
}

impl MemoryUnit {
    /// All units, smallest first.
    pub const ALL: [MemoryUnit; 8] = [
        MemoryUnit::Kibi,
        MemoryUnit::Mebi,
        MemoryUnit::Gibi,
        MemoryUnit::Tebi,
        MemoryUnit::Pebi,
        MemoryUnit::Exbi,
        MemoryUnit::Zebi,
        MemoryUnit::Yobi,
    ];

    const SYMBOLS: [&'static str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];
    const NAMES: [&'static str; 8] = [
        "kibibyte", "mebibyte", "gibibyte", "tebibyte", "pebibyte", "exbibyte", "zebibyte", "yobibyte",
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the power of 1024 this unit represents.
    #[must_use]
    #[inline]
    pub const fn exponent(self) -> u8 {
        self as u8
    }

    /// Returns how many bytes make up one of this unit.
    #[must_use]
    #[inline]
    pub const fn scalar_value(self) -> f64 {
        SCALARS[self.index()]
    }

    /// Returns the exact number of bytes in one of this unit.
    #[must_use]
    #[inline]
    pub const fn byte_count(self) -> u128 {
        BYTE_COUNTS[self.index()]
    }

    /// Returns the IEC symbol, e.g. `"MiB"`.
    #[must_use]
    #[inline]
    pub const fn symbol(self) -> &'static str {
        Self::SYMBOLS[self.index()]
    }

    /// Returns the full name, e.g. `"mebibyte"`.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Expresses a number of bytes in this unit.
    #[must_use]
    #[inline]
    pub fn to_unit(self, bytes: f64) -> f64 {
        bytes / self.scalar_value()
    }

    /// Expresses an amount of this unit in bytes.
    #[must_use]
    #[inline]
    pub fn to_bytes(self, amount: f64) -> f64 {
        amount * self.scalar_value()
    }

    /// Returns the smallest unit whose byte value is at least `magnitude`.
    ///
    /// Everything up to and including 1024 is [`Kibi`](MemoryUnit::Kibi), and everything past
    /// 1024^7 is [`Yobi`](MemoryUnit::Yobi), including infinity.
    ///
    /// ```
    /// use numkit_core::units::MemoryUnit;
    ///
    /// assert_eq!(MemoryUnit::classify(1000.0).unwrap(), MemoryUnit::Kibi);
    /// assert_eq!(MemoryUnit::classify(1_048_576.0).unwrap(), MemoryUnit::Mebi);
    /// assert_eq!(MemoryUnit::classify(1e30).unwrap(), MemoryUnit::Yobi);
    /// ```
    ///
    /// # Errors
    /// Returns [`NegativeMagnitude`](Error::NegativeMagnitude) if `magnitude` is negative, or
    /// [`NotANumber`](Error::NotANumber) if it is NaN.
    pub fn classify(magnitude: f64) -> Result<Self> {
        ensure!(!magnitude.is_nan(), NotANumberSnafu);
        ensure!(magnitude >= 0.0, NegativeMagnitudeSnafu { magnitude });

        // Comparing against the exact table keeps powers of 1024 on the right side of the boundary
        let unit = Self::ALL
            .into_iter()
            .find(|unit| magnitude <= unit.scalar_value())
            .unwrap_or(MemoryUnit::Yobi);
        log::trace!("Classified {magnitude} bytes as {unit}");
        Ok(unit)
    }

    /// Integer version of [`classify`](Self::classify), for exact byte counts.
    #[must_use]
    pub fn classify_bytes(bytes: u128) -> Self {
        // Smallest k >= 1 where 1024^k >= bytes
        let exponent = match bytes.checked_sub(1) {
            None | Some(0) => 1,
            Some(below) => below.ilog(CONVERSION_STANDARD) + 1,
        };
        u8::try_from(exponent)
            .ok()
            .and_then(|exponent| Self::try_from(exponent).ok())
            .unwrap_or(MemoryUnit::Yobi)
    }

    /// Returns the largest unit that fits into `bytes` at least once, or `None` for anything
    /// under a kibibyte.
    #[must_use]
    pub fn largest_within(bytes: u128) -> Option<Self> {
        Self::ALL.into_iter().rev().find(|unit| unit.byte_count() <= bytes)
    }
}

impl fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MemoryUnit {
    type Err = Error;

    /// Accepts either the symbol or the full name, ignoring case.
    fn from_str(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|unit| {
                unit.symbol().eq_ignore_ascii_case(trimmed) || unit.name().eq_ignore_ascii_case(trimmed)
            })
            .context(UnknownUnitSnafu { name })
    }
}

/// Converts a byte count to a human-readable format.
///
/// This condenses the count into the largest unit that still fits at least once and prints it to
/// two decimal places, e.g. `1536` becomes `"1.50 KiB"`. Anything under a kibibyte is printed as
/// a plain byte count.
#[must_use]
pub fn format_size(bytes: u128) -> String {
    match MemoryUnit::largest_within(bytes) {
        None => format!("{bytes} bytes"),
        Some(unit) => format!("{:.2} {}", unit.to_unit(bytes as f64), unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KILO_BYTE: f64 = 1e3;
    const MEGA_BYTE: f64 = 1e6;
    const GIGA_BYTE: f64 = 1e9;
    const TERA_BYTE: f64 = 1e12;
    const PETA_BYTE: f64 = 1e15;
    const EXA_BYTE: f64 = 1e18;
    const ZETTA_BYTE: f64 = 1e21;
    const YOTTA_BYTE: f64 = 1e24;

    #[test]
    fn scalar_values() {
        assert_eq!(MemoryUnit::Kibi.scalar_value(), 1024.0);
        assert_eq!(MemoryUnit::Mebi.scalar_value(), 1048576.0);
        assert_eq!(MemoryUnit::Gibi.scalar_value(), 1073741824.0);
        assert_eq!(MemoryUnit::Tebi.scalar_value(), 1099511627776.0);
        assert_eq!(MemoryUnit::Pebi.scalar_value(), 1125899906842624.0);
        assert_eq!(MemoryUnit::Exbi.scalar_value(), 1152921504606846976.0);
        assert_eq!(MemoryUnit::Zebi.scalar_value(), 1180591620717411303424.0);
        assert_eq!(MemoryUnit::Yobi.scalar_value(), 1208925819614629174706176.0);
    }

    #[test]
    fn tables_agree() {
        for unit in MemoryUnit::ALL {
            let exact = CONVERSION_STANDARD.pow(u32::from(unit.exponent()));
            assert_eq!(unit.byte_count(), exact);
            assert_eq!(unit.scalar_value(), exact as f64);
            assert_eq!(MemoryUnit::try_from(unit.exponent()).unwrap(), unit);
            assert_eq!(u8::from(unit), unit.exponent());
        }
        assert!(MemoryUnit::try_from(0u8).is_err());
        assert!(MemoryUnit::try_from(9u8).is_err());
    }

    #[test]
    fn classify_decimal_magnitudes() {
        assert_eq!(MemoryUnit::classify(KILO_BYTE).unwrap(), MemoryUnit::Kibi);
        assert_eq!(MemoryUnit::classify(MEGA_BYTE).unwrap(), MemoryUnit::Mebi);
        assert_eq!(MemoryUnit::classify(GIGA_BYTE).unwrap(), MemoryUnit::Gibi);
        assert_eq!(MemoryUnit::classify(TERA_BYTE).unwrap(), MemoryUnit::Tebi);
        assert_eq!(MemoryUnit::classify(PETA_BYTE).unwrap(), MemoryUnit::Pebi);
        assert_eq!(MemoryUnit::classify(EXA_BYTE).unwrap(), MemoryUnit::Exbi);
        assert_eq!(MemoryUnit::classify(ZETTA_BYTE).unwrap(), MemoryUnit::Zebi);
        assert_eq!(MemoryUnit::classify(YOTTA_BYTE).unwrap(), MemoryUnit::Yobi);
    }

    #[test]
    fn classify_exact_boundaries() {
        for unit in MemoryUnit::ALL {
            assert_eq!(MemoryUnit::classify(unit.scalar_value()).unwrap(), unit);
            assert_eq!(MemoryUnit::classify_bytes(unit.byte_count()), unit);
        }
        assert_eq!(MemoryUnit::classify(1025.0).unwrap(), MemoryUnit::Mebi);
        assert_eq!(MemoryUnit::classify_bytes(1025), MemoryUnit::Mebi);
    }

    #[test]
    fn classify_small_and_huge() {
        assert_eq!(MemoryUnit::classify(0.0).unwrap(), MemoryUnit::Kibi);
        assert_eq!(MemoryUnit::classify(0.5).unwrap(), MemoryUnit::Kibi);
        assert_eq!(MemoryUnit::classify(1e27).unwrap(), MemoryUnit::Yobi);
        assert_eq!(MemoryUnit::classify(f64::MAX).unwrap(), MemoryUnit::Yobi);
        assert_eq!(MemoryUnit::classify(f64::INFINITY).unwrap(), MemoryUnit::Yobi);

        assert_eq!(MemoryUnit::classify_bytes(0), MemoryUnit::Kibi);
        assert_eq!(MemoryUnit::classify_bytes(1), MemoryUnit::Kibi);
        assert_eq!(MemoryUnit::classify_bytes(u128::MAX), MemoryUnit::Yobi);
        assert_eq!(MemoryUnit::classify_bytes(MemoryUnit::Yobi.byte_count() + 1), MemoryUnit::Yobi);
    }

    #[test]
    fn classify_rejects_negative() {
        let error = MemoryUnit::classify(-1.0).unwrap_err();
        assert!(matches!(error, Error::NegativeMagnitude { .. }));
        assert!(matches!(MemoryUnit::classify(f64::NAN), Err(Error::NotANumber)));
        assert!(matches!(MemoryUnit::classify(-f64::NAN), Err(Error::NotANumber)));
        assert!(MemoryUnit::classify(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn names_and_symbols() {
        assert_eq!(MemoryUnit::Gibi.to_string(), "GiB");
        assert_eq!(MemoryUnit::Gibi.name(), "gibibyte");
        assert_eq!("mib".parse::<MemoryUnit>().unwrap(), MemoryUnit::Mebi);
        assert_eq!("Yobibyte".parse::<MemoryUnit>().unwrap(), MemoryUnit::Yobi);
        assert!(matches!("MB".parse::<MemoryUnit>(), Err(Error::UnknownUnit { .. })));
    }

    #[test]
    fn conversions() {
        assert_eq!(MemoryUnit::Mebi.to_unit(1_572_864.0), 1.5);
        assert_eq!(MemoryUnit::Kibi.to_bytes(2.0), 2048.0);
    }

    #[test]
    fn pretty_sizes() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
        assert_eq!(format_size(1024), "1.00 KiB");
        assert_eq!(format_size(1536), "1.50 KiB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GiB");
        assert_eq!(format_size(MemoryUnit::Yobi.byte_count() * 2048), "2048.00 YiB");
    }
}
