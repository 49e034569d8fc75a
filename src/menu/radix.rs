use argp::FromArgs;

use super::create_submodule;

create_submodule!(
    Radix,
    "radix",
    "Numeral system conversion",
    Convert(ConvertFlags),
    Signed(SignedFlags)
);

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "convert")]
#[argp(description = "Convert an unsigned number between two radices (2-36)")]
pub struct ConvertFlags {
    #[argp(positional)]
    #[argp(description = "Digits to convert")]
    pub value: String,

    #[argp(positional)]
    #[argp(description = "Radix the digits are written in")]
    pub from: u32,

    #[argp(positional)]
    #[argp(description = "Radix to write the result in")]
    pub to: u32,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand, name = "signed")]
#[argp(description = "Write a signed decimal number in another radix")]
pub struct SignedFlags {
    #[argp(positional)]
    #[argp(description = "Decimal number, use `--` before negative values")]
    pub value: i64,

    #[argp(positional)]
    #[argp(description = "Radix to write the result in")]
    pub to: u32,
}
