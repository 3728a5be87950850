//! IDL Compiler CLI

use idlc::commands::{ast_file, check_file, format_file};
use idlc::{init_tracing, parse_options, Options};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let run: fn(&str, &Options) -> bool = match command {
        "check" => check_file,
        "format" => format_file,
        "ast" => ast_file,
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" => {
            println!("idlc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let options = match parse_options(&args[2..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    };
    if options.paths.is_empty() {
        eprintln!("Usage: idlc {command} <file.idl>... [options]");
        std::process::exit(1);
    }

    let mut ok = true;
    for path in &options.paths {
        ok &= run(path, &options);
    }
    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("IDL Compiler");
    println!();
    println!("Usage: idlc <command> <file.idl>... [options]");
    println!();
    println!("Commands:");
    println!("  check <files>     Parse files and report errors and warnings");
    println!("  format <files>    Print files in canonical form");
    println!("  ast <files>       Print parsed declarations");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Options:");
    println!("  --max-field-ordinal=<n>    Largest field and union ordinal (default: 65534)");
    println!("  --max-method-ordinal=<n>   Largest method ordinal (default: 65535)");
    println!("  --color=<mode>             Colored output: auto, always, never");
    println!("  --json                     Emit diagnostics as JSON on stdout");
}
