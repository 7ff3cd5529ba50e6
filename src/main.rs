use std::fs;

use clap::Parser;
use mython::run_program;

/// mython is a tree-walking interpreter for Mython, a small
/// indentation-significant language with classes and dunder dispatch.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mython to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run_program(&source, &mut stdout) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
