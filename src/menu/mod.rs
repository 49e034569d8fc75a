use argp::FromArgs;
use paste::paste;

macro_rules! declare_module {
    ($($name:ident),+) => {
        $(
        paste! {
            mod $name;
            #[allow(unused_imports)]
            pub(crate) use $name::[<$name:camel Modules>];
            #[allow(unused_imports)]
            use $name::[<$name:camel Option>];
        }
    )+
};
}

declare_module!(memory, number, radix);

/// Top-level command
#[derive(FromArgs, PartialEq, Debug)]
#[argp(description = "Null-safe numeric helpers, radix conversion and binary memory units.")]
pub struct Numkit {
    #[argp(option, short = 'v', global, default = "0")]
    #[argp(description = "Logging level (0 = Off, 1 = Error, 2 = Warn, 3 = Info, 4 = Debug, 5 = Trace)")]
    pub verbose: usize,

    #[argp(subcommand)]
    pub nested: Modules,
}

/// These are all the helper groups numkit exposes via command line.
#[derive(FromArgs, PartialEq, Debug)]
#[argp(subcommand)]
#[non_exhaustive]
pub enum Modules {
    Number(NumberOption),
    Radix(RadixOption),
    Memory(MemoryOption),
}

// Some interaction with argp/argh's derives breaks doc comment macro expansion, so descriptions
// are passed in as plain strings
macro_rules! create_submodule {
    ($module_name:ident, $module_str:literal, $module_description:expr, $( $submodule_name:ident($submodule_type:ty) ),* ) => {
        use paste::paste;
        paste! {
            // This is the command for the `$module_str` group.
            #[derive(FromArgs, PartialEq, Debug)]
            #[argp(subcommand, name = $module_str)]
            #[argp(description = $module_description)]
            pub struct [<$module_name Option>] {
                #[argp(subcommand)]
                pub nested: [<$module_name Modules>],
            }

            // These are all commands within `$module_str`.
            #[derive(FromArgs, PartialEq, Debug)]
            #[argp(subcommand)]
            #[non_exhaustive]
            pub enum [<$module_name Modules>] {
                $( $submodule_name($submodule_type) ),*
            }
        }
    };
}
pub(crate) use create_submodule;
