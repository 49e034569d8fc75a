use std::str::FromStr;

use argp::FromArgs;
use numkit_core::prelude::Width;

use super::create_submodule;

create_submodule!(
    Number,
    "number",
    "Null-safe numeric helpers",
    NullSafe(NullSafeFlags),
    PerfectSquare(PerfectSquareFlags),
    Digits(DigitsFlags),
    Sample(SampleFlags)
);

#[derive(FromArgs, PartialEq, Debug)]
#[argp(subcommand, name = "null-safe")]
#[argp(description = "Print a value, or the sentinel its width falls back to when omitted")]
pub struct NullSafeFlags {
    #[argp(positional, from_str_fn(parse_width))]
    #[argp(description = "Numeric width (i8, i16, i32, i64, f32, f64)")]
    pub width: Width,

    #[argp(positional)]
    #[argp(description = "Value to pass through, use `--` before negative values")]
    pub value: Option<String>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argp(subcommand, name = "perfect-square")]
#[argp(description = "Check whether a number is a perfect square")]
pub struct PerfectSquareFlags {
    #[argp(positional)]
    #[argp(description = "Number to check")]
    pub value: i64,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argp(subcommand, name = "digits")]
#[argp(description = "Count the decimal digits of a number")]
pub struct DigitsFlags {
    #[argp(positional)]
    #[argp(description = "Number to count")]
    pub value: i64,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argp(subcommand, name = "sample")]
#[argp(description = "Draw unique random numbers from [lower, upper)")]
pub struct SampleFlags {
    #[argp(option, short = 'l', default = "0")]
    #[argp(description = "Inclusive lower bound")]
    pub lower: i64,

    #[argp(positional)]
    #[argp(description = "Exclusive upper bound")]
    pub upper: i64,

    #[argp(positional)]
    #[argp(description = "How many numbers to draw")]
    pub count: i64,
}

fn parse_width(value: &str) -> Result<Width, String> {
    Width::from_str(value).map_err(|e| e.to_string())
}
