//! llgc CLI

use std::path::Path;
use std::process::ExitCode;

use llgc::commands::{eval_expr, run_file};
use llgc::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: llgc run <file>");
                return ExitCode::FAILURE;
            }
            run_file(Path::new(&args[2])).map_err(|err| err.to_string())
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: llgc eval <expr>");
                eprintln!("Example: llgc eval '(+ 1 2)'");
                return ExitCode::FAILURE;
            }
            eval_expr(&args[2..].join(" ")).map_err(|err| err.to_string())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "version" | "--version" | "-V" => {
            println!("llgc {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("llgc, a minimal lisp runtime");
    println!();
    println!("Usage: llgc <command> [args]");
    println!();
    println!("Commands:");
    println!("  run <file>      Evaluate every form in a file, printing each result");
    println!("  eval <expr>     Evaluate forms given on the command line");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=debug  Enable tracing output on stderr");
    println!("  LLGC_LOG_TREE=1 Show tracing output as an indented span tree");
    println!();
    println!("Examples:");
    println!("  llgc eval '(+ 1 2)'");
    println!("  llgc run program.llgc");
}
