use std::fs;

use clap::Parser;
use turquoise::program::Program;

/// turquoise evaluates terse, whitespace-free arithmetic scripts, or
/// translates them to Python.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells turquoise to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the Python translation instead of evaluating.
    #[arg(short, long)]
    transpile: bool,

    /// Leaves translated lines unwrapped instead of wrapping them in
    /// `print(...)`.
    #[arg(long)]
    no_print_wrap: bool,

    /// Prints bare values without the source they came from.
    #[arg(long)]
    hide_source: bool,

    /// Prints the reduced parse tree before anything else.
    #[arg(long)]
    tree: bool,

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

    let program = Program::new(&script);

    if args.tree {
        print!("{}", program.tree().outline());
    }

    if args.transpile {
        println!("{}", program.transpile(!args.no_print_wrap));
        return;
    }

    let mut failed = false;
    for result in program.execute(true, !args.hide_source) {
        if let Err(e) = result {
            eprintln!("{e}");
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}
