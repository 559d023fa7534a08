//! Command-line interface for classorder
//! Sorts utility classes using the built-in ranking table (optionally extended by a config file).
//!
//! Usage:
//!   classorder `<classes>` [--config `<file>`] [--ignore-first] [--ignore-last] [--apply]
//!   classorder [options] < input                - Sort every line of stdin

use clap::{Arg, ArgAction, ArgMatches, Command};
use classorder::config::Loader;
use classorder::ranking::TableRanker;
use classorder::{sort_target, RankResolver, SortOptions, Target};
use std::io::{self, BufRead, Write};

fn main() {
    init_tracing();

    let matches = Command::new("classorder")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort utility classes into canonical order")
        .arg(
            Arg::new("classes")
                .help("Class string to sort (reads stdin line by line when absent)")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("ignore-first")
                .long("ignore-first")
                .help("Keep the first class in place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-last")
                .long("ignore-last")
                .help("Keep the last class in place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("apply")
                .long("apply")
                .help("Treat input as @apply parameters (keeps a trailing !important)")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let config = loader.build()?;
    let table = TableRanker::from_config(&config.ranking)?;
    let resolver = RankResolver::single(&table);

    let options = SortOptions {
        ignore_first: config.sorting.ignore_first || matches.get_flag("ignore-first"),
        ignore_last: config.sorting.ignore_last || matches.get_flag("ignore-last"),
    };
    let target = if matches.get_flag("apply") {
        Target::ApplyDirective
    } else {
        Target::ClassAttribute
    };

    let mut stdout = io::stdout().lock();
    match matches.get_one::<String>("classes") {
        Some(classes) => {
            writeln!(stdout, "{}", sort_target(target, classes, &resolver, options))?;
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                writeln!(stdout, "{}", sort_target(target, &line, &resolver, options))?;
            }
        }
    }

    Ok(())
}

/// Enable with `RUST_LOG=classorder=debug` or `RUST_LOG=classorder=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .init();
    }
}
