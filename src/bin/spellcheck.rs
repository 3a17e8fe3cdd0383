//! spellcheck: load a word list and suggest corrections interactively.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;

use spellmap::{
    run_session, Dictionary, HashStrategy, HashTable, ReplacePolicy, Result, TableConfig,
};

#[derive(Parser, Debug)]
#[command(name = "spellcheck")]
#[command(about = "Check words against a dictionary and suggest close matches")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Word list to load
    #[arg(short, long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Initial number of hash table slots
    #[arg(long, default_value_t = spellmap::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Average chain length that triggers a resize
    #[arg(long = "max-load", default_value_t = spellmap::DEFAULT_MAX_LOAD_FACTOR)]
    max_load: f64,

    /// Key hash function
    #[arg(long, value_enum, default_value_t = HashArg::CharSum)]
    hash: HashArg,

    /// Suggestion replacement rule
    #[arg(long, value_enum, default_value_t = PolicyArg::FirstWorse)]
    policy: PolicyArg,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HashArg {
    CharSum,
    WeightedCharSum,
}

impl From<HashArg> for HashStrategy {
    fn from(arg: HashArg) -> Self {
        match arg {
            HashArg::CharSum => HashStrategy::CharSum,
            HashArg::WeightedCharSum => HashStrategy::WeightedCharSum,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    FirstWorse,
    Worst,
}

impl From<PolicyArg> for ReplacePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FirstWorse => ReplacePolicy::FirstWorse,
            PolicyArg::Worst => ReplacePolicy::Worst,
        }
    }
}

impl Args {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = TableConfig::with_capacity(args.capacity).max_load_factor(args.max_load);
    let table = HashTable::with_config(config, HashStrategy::from(args.hash))?;
    let mut dict = Dictionary::new(table).with_policy(args.policy.into());

    let file = File::open(&args.dictionary)?;
    let started = Instant::now();
    let words = dict.load(file)?;
    let elapsed = started.elapsed().as_secs_f64();
    println!("Dictionary loaded in {elapsed:.6} seconds");
    log::info!(
        "{words} words in {} slots, load factor {:.3}",
        dict.table().capacity(),
        dict.table().load_factor()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&dict, stdin.lock(), stdout.lock())
}

fn main() {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
