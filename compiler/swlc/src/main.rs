//! Swiftlet compiler CLI.

use swlc::commands::{expr_file, lex_file};
use swlc::{init_tracing, parse_options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" | "expr" => {
            let (options, path) = match parse_options(&args[2..]) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(99);
                }
            };
            let Some(path) = path else {
                eprintln!("error: missing input file");
                eprintln!("Usage: swlc {command} <file | -> [options]");
                std::process::exit(99);
            };

            let code = if command == "lex" {
                lex_file(&path, &options)
            } else {
                expr_file(&path, &options)
            };
            std::process::exit(code);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("swlc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(99);
        }
    }
}

fn print_usage() {
    println!("Swiftlet compiler");
    println!();
    println!("Usage: swlc <command> <file | -> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Tokenize and display tokens");
    println!("  expr <file>    Evaluate one expression per line and print IFJcode23");
    println!("  help           Show this help message");
    println!("  version        Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>      Diagnostic colors: auto, always, never");
    println!("  --error-limit=<n>   Stop reporting after n errors (0 = no limit)");
    println!("  --no-dedup          Report repeated diagnostics on the same line");
    println!();
    println!("Exit status is the code of the first error (0 on success).");
    println!("Set SWL_LOG=debug (or a filter like swl_expr=trace) to enable tracing.");
}
