use argp::FromArgs;

use super::create_submodule;

create_submodule!(
    Memory,
    "memory",
    "Binary-prefixed memory units",
    Classify(ClassifyFlags),
    Format(FormatFlags),
    Table(TableFlags)
);

#[derive(FromArgs, PartialEq, Debug)]
#[argp(subcommand, name = "classify")]
#[argp(description = "Find the smallest unit that can hold a number of bytes")]
pub struct ClassifyFlags {
    #[argp(positional)]
    #[argp(description = "Magnitude in bytes, may be fractional")]
    pub magnitude: f64,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "format")]
#[argp(description = "Print a byte count in human-readable form")]
pub struct FormatFlags {
    #[argp(positional)]
    #[argp(description = "Number of bytes")]
    pub bytes: u128,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "table")]
#[argp(description = "List every unit with its byte value")]
pub struct TableFlags {}
