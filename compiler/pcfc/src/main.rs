//! PCF CLI
//!
//! Runs the built-in demo programs through the interpreter.

use pcfc::commands::{evaluate, RunOptions, DEFAULT_UNFOLD_BUDGET};
use pcfc::demos::{self, Demo, DEMOS};

fn main() {
    pcfc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "list" => {
            for demo in DEMOS {
                match demo.signature() {
                    Ok(signature) => println!("{:<14} {signature}", demo.name),
                    Err(err) => println!("{:<14} <{err}>", demo.name),
                }
                println!("               {}", demo.description);
            }
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: pcf run <demo> [--unfold] [--budget=N]");
                std::process::exit(1);
            }
            let demo = match demos::find(&args[2]) {
                Ok(demo) => demo,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };
            let options = parse_options(&args[3..]);
            if !run(demo, &options) {
                std::process::exit(1);
            }
        }
        "all" => {
            let options = parse_options(&args[2..]);
            let mut failed = 0usize;
            for demo in DEMOS {
                if !run(demo, &options) {
                    failed = failed.saturating_add(1);
                }
            }
            if failed > 0 {
                eprintln!("{failed} demo(s) failed");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_options(args: &[String]) -> RunOptions {
    match RunOptions::parse(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Print one demo run; returns whether it succeeded.
fn run(demo: &Demo, options: &RunOptions) -> bool {
    println!("{}", demo.name);
    let term = match demo.term() {
        Ok(term) => term,
        Err(err) => {
            println!("  error:  {err}");
            return false;
        }
    };
    println!("  term:   {term}");
    match evaluate(&term, options) {
        Ok(evaluation) => {
            println!("  result: {}  ({} steps)", evaluation.result, evaluation.steps);
            true
        }
        Err(err) => {
            println!("  error:  {err}");
            false
        }
    }
}

fn print_usage() {
    println!("PCF interpreter");
    println!();
    println!("Usage: pcf <command> [options]");
    println!();
    println!("Commands:");
    println!("  list                 List the built-in demo programs");
    println!("  run <demo>           Evaluate one demo program");
    println!("  all                  Evaluate every demo program");
    println!("  help                 Show this message");
    println!();
    println!("Options for run and all:");
    println!("  --unfold             Reduce fix and let (default budget {DEFAULT_UNFOLD_BUDGET} steps)");
    println!("  --budget=N           Stop after N reduction steps");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=pcf_eval=trace) to trace reduction.");
}
