use std::{
    fs,
    io::{self, Write},
};

use clap::Parser;
use rockstar::{Options, interpreter::environment::ScopeMode, run_with_options};

/// rockstar runs programs written in Rockstar, the language whose programs
/// read like song lyrics.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rockstar to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Gives every function call its own variable frame instead of sharing
    /// the caller's variables.
    #[arg(short, long)]
    isolated_scopes: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let options = Options { scope: if args.isolated_scopes {
                                ScopeMode::Isolated
                            } else {
                                ScopeMode::Shared
                            } };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let result = run_with_options(&script, &options, &mut input, &mut output);
    let flushed = output.flush();

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
    if let Err(e) = flushed {
        eprintln!("Failed to write the program output: {e}");
        std::process::exit(1);
    }
}
