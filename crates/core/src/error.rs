//! Shared error definitions for every helper module.

#[cfg(not(feature = "std"))]
use crate::no_std::*;

use snafu::prelude::*;

use crate::number::Width;

/// Error conditions for when a helper is handed an argument it can't work with.
///
/// Every variant is an invalid-argument condition: the helpers check their preconditions up front
/// and return before producing any output.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    /// Thrown if a sampling bound or count is below zero.
    #[snafu(display("Negative number is not allowed as an argument."))]
    NegativeArgument,

    /// Thrown if the lower sampling bound isn't strictly below the upper one.
    #[snafu(display("Lower Bound cannot be larger than Upper Bound."))]
    InvertedBounds { lower: i64, upper: i64 },

    /// Thrown if the sampling range holds fewer distinct values than were requested.
    #[snafu(display("Not enough unique numbers available for the array size."))]
    InsufficientRange { count: i64, available: i64 },

    /// Thrown if there isn't enough memory to collect the requested number of unique values.
    #[snafu(display("Unable to hold {count} unique numbers in memory."))]
    SampleTooLarge { count: i64 },

    /// Thrown if a memory magnitude is negative.
    #[snafu(display("Negative number is not allowed as an argument. Got {magnitude}"))]
    NegativeMagnitude { magnitude: f64 },

    /// Thrown if a memory magnitude is NaN.
    #[snafu(display("Magnitude must be a number, got NaN"))]
    NotANumber,

    /// Thrown if a radix falls outside 2..=36.
    #[snafu(display("Radix {radix} is outside the supported range 2..=36"))]
    InvalidRadix { radix: u32 },

    /// Thrown if text can't be read as an unsigned number in the given radix.
    #[snafu(display("Unable to parse {text:?} as a base-{radix} number: {source}"))]
    InvalidDigits { text: String, radix: u32, source: core::num::ParseIntError },

    /// Thrown if text can't be read as a value of the given width.
    #[snafu(display("Unable to parse {text:?} as {width}"))]
    InvalidNumber { text: String, width: Width },

    /// Thrown if a tagged value doesn't match the width it is being checked against.
    #[snafu(display("Expected a value of width {expected}, got {found}"))]
    WidthMismatch { expected: Width, found: Width },

    /// Thrown if a width name isn't recognised.
    #[snafu(display("Unknown numeric width {name:?}"))]
    UnknownWidth { name: String },

    /// Thrown if a memory unit name or symbol isn't recognised.
    #[snafu(display("Unknown memory unit {name:?}"))]
    UnknownUnit { name: String },
}

pub type Result<T> = core::result::Result<T, Error>;
