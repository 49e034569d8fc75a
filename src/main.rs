use std::io::Write;

use anyhow::{Context, Result};
use mimalloc::MiMalloc;
use numkit_core::number;
use numkit_core::radix;
use numkit_core::units::{self, MemoryUnit};
use owo_colors::OwoColorize;

mod menu;
use menu::*;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn setup_logger(verbosity: usize) {
    let level = match verbosity {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        //anything past the end is as loud as it gets
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => record.level().red().to_string(),
                log::Level::Warn => record.level().yellow().to_string(),
                log::Level::Info => record.level().green().to_string(),
                log::Level::Debug => record.level().blue().to_string(),
                log::Level::Trace => record.level().purple().to_string(),
            };
            //pad wider than the level name since the color codes count towards the width
            writeln!(buf, "{:>16} {}", level, record.args())
        })
        .init();
}

fn print_verdict(value: i64, verdict: bool, description: &str) {
    if verdict {
        println!("{value} is {}", description.green());
    } else {
        println!("{value} is {}", format!("not {description}").red());
    }
}

fn run_number(module: NumberModules) -> Result<()> {
    match module {
        NumberModules::NullSafe(flags) => {
            let value = match flags.value.as_deref() {
                Some(text) => Some(flags.width.parse(text)?),
                None => None,
            };
            let result = flags.width.null_safe(value)?;
            if result.is_sentinel() {
                log::info!("{result} is the sentinel for {}", flags.width);
            }
            println!("{result}");
        }
        NumberModules::PerfectSquare(flags) => {
            print_verdict(flags.value, number::is_perfect_square(flags.value), "a perfect square");
        }
        NumberModules::Digits(flags) => {
            println!("{}", number::count_digits(flags.value));
        }
        NumberModules::Sample(flags) => {
            let values = number::unique_random_sample(flags.lower, flags.upper, flags.count)
                .with_context(|| {
                    format!(
                        "Unable to draw {} unique numbers from [{}, {})",
                        flags.count, flags.lower, flags.upper
                    )
                })?;
            let values: Vec<String> = values.iter().map(ToString::to_string).collect();
            println!("{}", values.join(" "));
        }
    }
    Ok(())
}

fn run_radix(module: RadixModules) -> Result<()> {
    match module {
        RadixModules::Convert(flags) => {
            let converted = radix::convert(&flags.value, flags.from, flags.to).with_context(|| {
                format!("Unable to convert {:?} from base {} to base {}", flags.value, flags.from, flags.to)
            })?;
            println!("{converted}");
        }
        RadixModules::Signed(flags) => {
            println!("{}", radix::format_signed(flags.value, flags.to)?);
        }
    }
    Ok(())
}

fn run_memory(module: MemoryModules) -> Result<()> {
    match module {
        MemoryModules::Classify(flags) => {
            let unit = MemoryUnit::classify(flags.magnitude)?;
            println!(
                "{} ({}, {:.2} {})",
                unit.bold(),
                unit.name(),
                unit.to_unit(flags.magnitude),
                unit
            );
        }
        MemoryModules::Format(flags) => {
            println!("{}", units::format_size(flags.bytes));
        }
        MemoryModules::Table(_) => {
            for unit in MemoryUnit::ALL {
                println!(
                    "{:>3}  {:<8}  1024^{}  {}",
                    unit.symbol().bold(),
                    unit.name(),
                    unit.exponent(),
                    unit.byte_count()
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Numkit = argp::parse_args_or_exit(argp::DEFAULT);

    setup_logger(args.verbose);
    log::debug!("Arguments: {args:?}");

    match args.nested {
        Modules::Number(option) => run_number(option.nested),
        Modules::Radix(option) => run_radix(option.nested),
        Modules::Memory(option) => run_memory(option.nested),
    }
}
