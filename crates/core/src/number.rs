//! Helpers for plain numeric values.
//!
//! # Null-safety
//! Absent values are modelled as [`Option`], and [`null_safe`] swaps `None` for a per-width
//! sentinel so callers always get a concrete number back:
//!
//! | Width | Type | Sentinel |
//! |-------|------|----------|
//! | Byte   | `i8`  | `i8::MIN` |
//! | Short  | `i16` | `i16::MIN` |
//! | Int    | `i32` | `i32::MIN` |
//! | Long   | `i64` | `i64::MIN` |
//! | Float  | `f32` | 2^-149, the smallest positive subnormal |
//! | Double | `f64` | 2^-1074, the smallest positive subnormal |
//!
//! The sentinel is only distinguishable by convention. If you rely on it to detect a missing
//! value, you can't also use it as real data.
//!
//! When the width is only known at runtime, [`Width`] and [`Number`] offer the same behavior on a
//! tagged value.

#[cfg(not(feature = "std"))]
use crate::no_std::*;

use core::fmt;
use core::str::FromStr;

use hashbrown::HashSet;
use rand::Rng;
use snafu::prelude::*;

use crate::error::*;

/// Numeric types that have a sentinel to stand in for an absent value.
pub trait NullSafe: Copy {
    /// The value returned by [`null_safe`] when nothing was passed in.
    const SENTINEL: Self;
}

macro_rules! impl_null_safe {
    ($($ty:ty => $sentinel:expr),+ $(,)?) => {
        $(
            impl NullSafe for $ty {
                const SENTINEL: Self = $sentinel;
            }
        )+
    };
}

impl_null_safe!(
    i8 => i8::MIN,
    i16 => i16::MIN,
    i32 => i32::MIN,
    i64 => i64::MIN,
    // These round to exactly one ULP above zero
    f32 => 1.0e-45,
    f64 => 5.0e-324,
);

/// Returns `value` if present, otherwise the sentinel for its width.
///
/// ```
/// use numkit_core::number::null_safe;
///
/// assert_eq!(null_safe(Some(10i16)), 10);
/// assert_eq!(null_safe::<i16>(None), i16::MIN);
/// ```
#[must_use]
#[inline]
pub fn null_safe<T: NullSafe>(value: Option<T>) -> T {
    value.unwrap_or(T::SENTINEL)
}

/// Every numeric width the null-safe accessors cover.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Width {
    /// 8-bit signed integer.
    Byte,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
}

/// A numeric value tagged with its width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(value: $ty) -> Self {
                    Number::$variant(value)
                }
            }
        )+
    };
}

number_from!(i8 => Byte, i16 => Short, i32 => Int, i64 => Long, f32 => Float, f64 => Double);

impl Width {
    /// All widths, from narrowest integer to widest float.
    pub const ALL: [Width; 6] =
        [Width::Byte, Width::Short, Width::Int, Width::Long, Width::Float, Width::Double];

    /// Returns the sentinel for this width, tagged.
    #[must_use]
    pub const fn sentinel(self) -> Number {
        match self {
            Width::Byte => Number::Byte(i8::SENTINEL),
            Width::Short => Number::Short(i16::SENTINEL),
            Width::Int => Number::Int(i32::SENTINEL),
            Width::Long => Number::Long(i64::SENTINEL),
            Width::Float => Number::Float(f32::SENTINEL),
            Width::Double => Number::Double(f64::SENTINEL),
        }
    }

    /// Tagged version of [`null_safe`].
    ///
    /// # Errors
    /// Returns [`WidthMismatch`](Error::WidthMismatch) if `value` is present but of another width.
    pub fn null_safe(self, value: Option<Number>) -> Result<Number> {
        match value {
            None => Ok(self.sentinel()),
            Some(number) => {
                let found = number.width();
                ensure!(found == self, WidthMismatchSnafu { expected: self, found });
                Ok(number)
            }
        }
    }

    /// Parses `text` as a value of this width.
    ///
    /// # Errors
    /// Returns [`InvalidNumber`](Error::InvalidNumber) if `text` isn't a valid literal for the
    /// width, including when it is out of range.
    pub fn parse(self, text: &str) -> Result<Number> {
        let trimmed = text.trim();
        let number = match self {
            Width::Byte => trimmed.parse().ok().map(Number::Byte),
            Width::Short => trimmed.parse().ok().map(Number::Short),
            Width::Int => trimmed.parse().ok().map(Number::Int),
            Width::Long => trimmed.parse().ok().map(Number::Long),
            Width::Float => trimmed.parse().ok().map(Number::Float),
            Width::Double => trimmed.parse().ok().map(Number::Double),
        };
        number.context(InvalidNumberSnafu { text, width: self })
    }

    /// Returns the Rust type name for this width.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Width::Byte => "i8",
            Width::Short => "i16",
            Width::Int => "i32",
            Width::Long => "i64",
            Width::Float => "f32",
            Width::Double => "f64",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for Width {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let width = match name.trim().to_ascii_lowercase().as_str() {
            "byte" | "i8" => Width::Byte,
            "short" | "i16" => Width::Short,
            "int" | "integer" | "i32" => Width::Int,
            "long" | "i64" => Width::Long,
            "float" | "f32" => Width::Float,
            "double" | "f64" => Width::Double,
            _ => return UnknownWidthSnafu { name }.fail(),
        };
        Ok(width)
    }
}

impl Number {
    /// Returns which width this value carries.
    #[must_use]
    pub const fn width(&self) -> Width {
        match self {
            Number::Byte(_) => Width::Byte,
            Number::Short(_) => Width::Short,
            Number::Int(_) => Width::Int,
            Number::Long(_) => Width::Long,
            Number::Float(_) => Width::Float,
            Number::Double(_) => Width::Double,
        }
    }

    /// Returns `true` if this value is bit-for-bit the sentinel of its width.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        match *self {
            Number::Float(value) => value.to_bits() == f32::SENTINEL.to_bits(),
            Number::Double(value) => value.to_bits() == f64::SENTINEL.to_bits(),
            other => other == other.width().sentinel(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Byte(value) => fmt::Display::fmt(value, f),
            Number::Short(value) => fmt::Display::fmt(value, f),
            Number::Int(value) => fmt::Display::fmt(value, f),
            Number::Long(value) => fmt::Display::fmt(value, f),
            Number::Float(value) => fmt::Display::fmt(value, f),
            Number::Double(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// Floor of the square root, computed with Newton's method so it stays exact across the whole
/// `i64` range.
fn isqrt(value: u64) -> u64 {
    if value < 2 {
        return value;
    }
    // value <= i64::MAX, so this can't overflow
    let mut root = value;
    let mut next = (root + 1) / 2;
    while next < root {
        root = next;
        next = (root + value / root) / 2;
    }
    root
}

/// Returns `true` if `value` is the square of an integer.
///
/// Negative values never are. An absent value should go through [`null_safe`] first, and since
/// the `i64` sentinel is negative it comes out as `false`.
///
/// ```
/// use numkit_core::number::{is_perfect_square, null_safe};
///
/// assert!(is_perfect_square(81));
/// assert!(!is_perfect_square(80));
/// assert!(!is_perfect_square(null_safe(None)));
/// ```
#[must_use]
pub fn is_perfect_square(value: i64) -> bool {
    if value < 0 {
        return false;
    }
    let value = value.unsigned_abs();
    isqrt(value).pow(2) == value
}

/// Returns how many base-10 digits it takes to write `|n|`. Zero has one digit.
#[must_use]
#[inline]
pub fn count_digits(n: i64) -> u32 {
    n.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

fn check_sample_bounds(lower: i64, upper: i64, count: i64) -> Result<usize> {
    ensure!(lower >= 0 && upper >= 0 && count >= 0, NegativeArgumentSnafu);
    ensure!(lower < upper, InvertedBoundsSnafu { lower, upper });

    // With both bounds non-negative the span is never wider than `upper`
    let available = upper - lower;
    ensure!(count <= upper && count <= available, InsufficientRangeSnafu { count, available });

    usize::try_from(count).ok().context(InsufficientRangeSnafu { count, available })
}

/// Draws `count` distinct integers from `[lower, upper)` using the provided generator.
///
/// Values are drawn uniformly and collected into a set until it holds `count` of them, so the
/// order of the returned values carries no meaning.
///
/// # Errors
/// * [`NegativeArgument`](Error::NegativeArgument) if any argument is negative.
/// * [`InvertedBounds`](Error::InvertedBounds) if `lower >= upper`.
/// * [`InsufficientRange`](Error::InsufficientRange) if the range holds fewer than `count`
///   values.
/// * [`SampleTooLarge`](Error::SampleTooLarge) if `count` values can't be held in memory.
pub fn unique_random_sample_with<R: Rng + ?Sized>(
    rng: &mut R, lower: i64, upper: i64, count: i64,
) -> Result<Vec<i64>> {
    let target = check_sample_bounds(lower, upper, count)?;
    log::debug!("Sampling {target} unique values from [{lower}, {upper})");

    let mut seen: HashSet<i64> = HashSet::new();
    seen.try_reserve(target).ok().context(SampleTooLargeSnafu { count })?;
    let mut draws: u64 = 0;
    while seen.len() < target {
        seen.insert(rng.random_range(lower..upper));
        draws += 1;
    }
    log::trace!("Took {draws} draws to collect {target} values");

    Ok(seen.into_iter().collect())
}

/// Draws `count` distinct integers from `[lower, upper)` using the thread-local generator.
///
/// # Errors
/// See [`unique_random_sample_with`].
#[cfg(feature = "std")]
#[inline]
pub fn unique_random_sample(lower: i64, upper: i64, count: i64) -> Result<Vec<i64>> {
    unique_random_sample_with(&mut rand::rng(), lower, upper, count)
}

/// Draws `count` distinct integers from `[0, upper)` using the thread-local generator.
///
/// # Errors
/// See [`unique_random_sample_with`].
#[cfg(feature = "std")]
#[inline]
pub fn unique_random_sample_below(upper: i64, count: i64) -> Result<Vec<i64>> {
    unique_random_sample(0, upper, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LOWER: i64 = 10;
    const UPPER: i64 = 81;
    const COUNT: i64 = 12;

    fn all_unique(values: &[i64]) -> bool {
        let mut seen = HashSet::new();
        values.iter().all(|value| seen.insert(*value))
    }

    #[test]
    fn null_safe_sentinels() {
        assert_eq!(null_safe::<i8>(None), i8::MIN);
        assert_eq!(null_safe::<i16>(None), i16::MIN);
        assert_eq!(null_safe::<i32>(None), i32::MIN);
        assert_eq!(null_safe::<i64>(None), i64::MIN);
        assert_eq!(null_safe::<f32>(None).to_bits(), 1);
        assert_eq!(null_safe::<f64>(None).to_bits(), 1);
    }

    #[test]
    fn null_safe_passes_values_through() {
        assert_eq!(null_safe(Some(2i8)), 2);
        assert_eq!(null_safe(Some(2i16)), 2);
        assert_eq!(null_safe(Some(2i32)), 2);
        assert_eq!(null_safe(Some(2i64)), 2);
        assert_eq!(null_safe(Some(2.0f32)), 2.0);
        assert_eq!(null_safe(Some(2.0f64)), 2.0);
        // A sentinel passed in explicitly is still just a value
        assert_eq!(null_safe(Some(i32::MIN)), i32::MIN);
    }

    #[test]
    fn tagged_null_safe() {
        for width in Width::ALL {
            let sentinel = width.null_safe(None).unwrap();
            assert_eq!(sentinel.width(), width);
            assert!(sentinel.is_sentinel());
        }

        assert_eq!(Width::Short.null_safe(Some(Number::from(7i16))).unwrap(), Number::Short(7));
        let error = Width::Short.null_safe(Some(Number::from(7i64))).unwrap_err();
        assert!(matches!(
            error,
            Error::WidthMismatch { expected: Width::Short, found: Width::Long }
        ));
    }

    #[test]
    fn width_parsing() {
        assert_eq!("short".parse::<Width>().unwrap(), Width::Short);
        assert_eq!("F64".parse::<Width>().unwrap(), Width::Double);
        assert!(matches!("u8".parse::<Width>(), Err(Error::UnknownWidth { .. })));

        assert_eq!(Width::Byte.parse(" -12 ").unwrap(), Number::Byte(-12));
        assert_eq!(Width::Double.parse("2.5").unwrap(), Number::Double(2.5));
        assert!(matches!(Width::Byte.parse("300"), Err(Error::InvalidNumber { .. })));
        assert!(matches!(Width::Int.parse("1.5"), Err(Error::InvalidNumber { .. })));
    }

    #[test]
    fn perfect_squares() {
        assert!(is_perfect_square(0));
        assert!(is_perfect_square(1));
        assert!(is_perfect_square(81));
        assert!(is_perfect_square(100));

        assert!(!is_perfect_square(5));
        assert!(!is_perfect_square(80));
        assert!(!is_perfect_square(101));
        assert!(!is_perfect_square(250));
        assert!(!is_perfect_square(-4));
        assert!(!is_perfect_square(null_safe(None)));
        assert!(is_perfect_square(null_safe(Some(49))));
    }

    #[test]
    fn perfect_squares_near_the_top_of_the_range() {
        let root: i64 = 3_037_000_499; // floor(sqrt(i64::MAX))
        assert!(is_perfect_square(root * root));
        assert!(!is_perfect_square(root * root - 1));
        assert!(!is_perfect_square(root * root + 1));
        assert!(!is_perfect_square(i64::MAX));

        let root: i64 = (1 << 31) - 1;
        assert!(is_perfect_square(root * root));
        assert!(!is_perfect_square(root * root + 1));
    }

    #[test]
    fn digit_counts() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(2), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(-10), 2);
        assert_eq!(count_digits(99_999), 5);
        assert_eq!(count_digits(i64::MAX), 19);
        assert_eq!(count_digits(i64::MIN), 19);
    }

    #[test]
    fn sample_is_unique_and_in_range() {
        let values = unique_random_sample(LOWER, UPPER, COUNT).unwrap();
        assert_eq!(values.len(), COUNT as usize);
        assert!(all_unique(&values));
        assert!(values.iter().all(|value| (LOWER..UPPER).contains(value)));

        let values = unique_random_sample_below(UPPER, COUNT).unwrap();
        assert_eq!(values.len(), COUNT as usize);
        assert!(all_unique(&values));
        assert!(values.iter().all(|value| (0..UPPER).contains(value)));
    }

    #[test]
    fn sample_can_exhaust_the_range() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut values = unique_random_sample_with(&mut rng, LOWER, UPPER, UPPER - LOWER).unwrap();
        values.sort_unstable();
        assert_eq!(values, (LOWER..UPPER).collect::<Vec<_>>());

        assert!(unique_random_sample_with(&mut rng, LOWER, UPPER, 0).unwrap().is_empty());
    }

    #[test]
    fn seeded_samples_repeat() {
        let mut first = unique_random_sample_with(&mut StdRng::seed_from_u64(42), 0, 1000, 20).unwrap();
        let mut second =
            unique_random_sample_with(&mut StdRng::seed_from_u64(42), 0, 1000, 20).unwrap();
        first.sort_unstable();
        second.sort_unstable();
        assert_eq!(first, second);
    }

    #[test]
    fn sample_rejects_negative_arguments() {
        for (lower, upper, count) in
            [(-1, -1, -1), (-1, UPPER, -1), (-1, UPPER, COUNT), (LOWER, -1, COUNT), (LOWER, UPPER, -1)]
        {
            let error = unique_random_sample(lower, upper, count).unwrap_err();
            assert!(matches!(error, Error::NegativeArgument));
            assert_eq!(error.to_string(), "Negative number is not allowed as an argument.");
        }
        assert!(matches!(unique_random_sample_below(-1, COUNT), Err(Error::NegativeArgument)));
        assert!(matches!(unique_random_sample_below(UPPER, -1), Err(Error::NegativeArgument)));
    }

    #[test]
    fn sample_rejects_inverted_bounds() {
        let error = unique_random_sample(UPPER, LOWER, COUNT).unwrap_err();
        assert!(matches!(error, Error::InvertedBounds { lower: UPPER, upper: LOWER }));
        assert_eq!(error.to_string(), "Lower Bound cannot be larger than Upper Bound.");

        assert!(matches!(unique_random_sample(LOWER, LOWER, 0), Err(Error::InvertedBounds { .. })));
    }

    #[test]
    fn sample_rejects_small_ranges() {
        let error = unique_random_sample(LOWER, COUNT, UPPER).unwrap_err();
        assert!(matches!(error, Error::InsufficientRange { count: UPPER, available: 2 }));
        assert_eq!(error.to_string(), "Not enough unique numbers available for the array size.");

        assert!(matches!(
            unique_random_sample(LOWER, UPPER, UPPER - LOWER + 1),
            Err(Error::InsufficientRange { .. })
        ));
    }

    #[test]
    fn sample_rejects_counts_too_large_to_hold() {
        let mut rng = StdRng::seed_from_u64(7);
        let error = unique_random_sample_with(&mut rng, 0, i64::MAX, i64::MAX / 2).unwrap_err();
        assert!(matches!(error, Error::SampleTooLarge { count } if count == i64::MAX / 2));
    }
}
