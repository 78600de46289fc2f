//! json-record: Read a JSON file and extract a validated record from it
//!
//! Usage:
//!   # Read p_p.json from the current directory
//!   json-record
//!
//!   # Read a specific file and print the record as JSON
//!   json-record data.json --json
//!
//!   # Drop unknown keys and wait for Enter before exiting
//!   json-record data.json --keep-unknown=false --pause

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use json_record::{read_record, ExtractConfig, Item, Record};
use log::{debug, info};
use std::io::{stdin, BufRead};
use std::path::PathBuf;

const DEFAULT_INPUT: &str = "p_p.json";

#[derive(Parser, Debug)]
#[command(name = "json-record")]
#[command(about = "Extract a validated record from a JSON file", long_about = None)]
struct Args {
    /// Input file, relative to the current directory (default: p_p.json)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the record as JSON instead of the table view
    #[arg(long)]
    json: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(long, requires = "json")]
    compact: bool,

    /// Keep keys that are not part of the record
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    keep_unknown: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let pause = args.pause;

    let code = match run(args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    };

    if pause {
        wait_for_enter();
    }

    std::process::exit(code);
}

fn run(args: Args) -> Result<()> {
    let path = std::env::current_dir()
        .context("Failed to resolve current directory")?
        .join(args.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)));
    info!("reading {}", path.display());

    let data = std::fs::read(&path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let config = ExtractConfig {
        collect_unknown: args.keep_unknown,
    };

    let record = read_record(&data, config).map_err(|e| {
        debug!("extraction from {} failed: {e:#}", path.display());
        e
    })?;

    if args.json {
        let output = if args.compact {
            serde_json::to_string(&record)?
        } else {
            serde_json::to_string_pretty(&record)?
        };
        println!("{}", output);
    } else {
        print_table(&record);
    }

    Ok(())
}

fn print_table(record: &Record) {
    println!("JSON:");
    println!("\tFoo \t: \t{}", record.foo);
    println!("\tBar \t: \t{}", record.bar);
    println!("\tBaz \t: \t{}", record.baz);
    println!("\tQoo \t: \t{}", record.qoo);

    if !record.foz.is_empty() {
        let items: Vec<String> = record
            .foz
            .iter()
            .map(|item| match item {
                Item::Text(s) => s.clone(),
                Item::Opaque(v) => v.to_string(),
            })
            .collect();
        println!("\tFoz \t: \t[{}]", items.join(" "));
    }

    for (key, value) in &record.extra {
        println!("\t{} \t: \t{}", key, value);
    }
}

fn wait_for_enter() {
    println!("press enter to quit");
    let mut line = String::new();
    let _ = stdin().lock().read_line(&mut line);
}
