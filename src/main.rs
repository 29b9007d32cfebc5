use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};
use sieve::BloomFilter;

// -h is taken by the hash-count flag, so clap's auto help short flag is
// disabled and help stays reachable via --help.
#[derive(Parser, Debug)]
#[clap(author, version, about = "Bloom-filter dictionary membership checker", long_about = None)]
#[clap(disable_help_flag = true)]
#[clap(group(ArgGroup::new("stat")))]
struct Args {
    /// Query items to test against the filter, one per line.
    input_file: PathBuf,

    /// Dictionary items to add to the filter, one per line. The line count
    /// sizes the filter.
    dictionary_file: PathBuf,

    /// Number of bits in the filter.
    array_size: String,

    /// Print the false positive rate and exit.
    #[clap(short = 'f', long = "rate", group = "stat")]
    rate_only: bool,

    /// Print the optimal hash count and exit.
    #[clap(short = 'h', long = "hashes", group = "stat")]
    hashes_only: bool,

    /// Print the raw bit array and exit.
    #[clap(short = 'b', long = "bits", group = "stat")]
    bits_only: bool,

    /// Print the false positive rate and hash count and exit.
    #[clap(short = 'd', long = "diagnostics", group = "stat")]
    diagnostics: bool,

    /// Print help.
    #[clap(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,sieve=info");
    }
    tracing_subscriber::fmt()
    .with_target(false)
    .with_level(true)
    .init();

    let args = Args::parse();

    // Hard error before any filter work.
    let array_size: usize = match args.array_size.parse() {
        Ok(m) => m,
        Err(_) => {
            eprintln!("Bitarray size is invalid!");
            process::exit(1);
        }
    };

    let input = read_lines(&args.input_file);
    let dictionary = read_lines(&args.dictionary_file);

    let filter = match BloomFilter::new(dictionary.len(), array_size) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Single-stat flags are informational early exits (status 1).
    if args.rate_only {
        println!("False Positive Rate: {}", filter.false_positive_rate());
        process::exit(1);
    }
    if args.hashes_only {
        println!("Optimal Hash Count: {}", filter.hash_count());
        process::exit(1);
    }
    if args.bits_only {
        println!("Bit Array: {}", filter.bit_array());
        process::exit(1);
    }
    if args.diagnostics {
        println!("False Positive Rate: {}", filter.false_positive_rate());
        println!("Optimal Hash Count: {}", filter.hash_count());
        process::exit(1);
    }

    run(filter, &dictionary, &input);
}

fn run(mut filter: BloomFilter, dictionary: &[String], input: &[String]) {
    for item in dictionary {
        if let Err(e) = filter.add(item) {
            eprintln!("{}", e);
            process::exit(1);
        }
    }

    for item in input {
        match filter.check(item) {
            Ok(true) => println!("{}: Possibly present", item),
            Ok(false) => println!("{}: Not present", item),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }

    println!();
    println!("Optimal Hash Count: {}", filter.hash_count());
    println!("False Positive Rate: {}", filter.false_positive_rate());
}

fn read_lines(path: &PathBuf) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => text.lines().map(str::to_string).collect(),
        Err(e) => {
            eprintln!("Cannot read {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}
