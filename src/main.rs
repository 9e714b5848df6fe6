// Type-level Rewrite Engine
//
// A structural pattern-matching rewrite engine for type-level computations
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/
use clap::Parser;
use std::io;
use std::io::Write;
use std::process::ExitCode;
use typelevel_rewrite::{parse_command_str, Engine, EvalError};

/// Evaluate type-level operations on literal values
#[derive(Debug, Parser)]
#[command(name = "typelevel-rewrite", version)]
struct Cli {
    /// Evaluate one command, e.g. `Reverse [1, 2, 3]`, and exit
    #[arg(short, long)]
    eval: Option<String>,

    /// List the registered operations and exit
    #[arg(long)]
    list: bool,

    /// Print the clauses of one operation and exit
    #[arg(long, value_name = "OP")]
    show: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let engine = match Engine::standard() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to load the operation library: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.list {
        list_operations(engine);
        return ExitCode::SUCCESS;
    }
    if let Some(op) = cli.show {
        return if show_operation(engine, &op) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }
    if let Some(line) = cli.eval {
        return match run_command(engine, &line) {
            Ok(()) => ExitCode::SUCCESS,
            Err(()) => ExitCode::FAILURE,
        };
    }

    repl(engine);
    ExitCode::SUCCESS
}

fn repl(engine: &Engine) {
    println!("Type-level rewrite REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type `Op arg...`, `:ops`, `:show Op`, or Ctrl-D to exit");
    println!();

    let mut infile: Box<dyn io::BufRead> = Box::new(io::stdin().lock());

    loop {
        print!("rewrite> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match infile.read_line(&mut line) {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                println!("Error reading input: {}", e);
                break;
            }
            Ok(_) => {
                let trimmed = line.trim();
                match trimmed {
                    "" => continue,
                    ":quit" | ":q" => break,
                    ":ops" => list_operations(engine),
                    _ => {
                        if let Some(op) = trimmed.strip_prefix(":show") {
                            show_operation(engine, op.trim());
                        } else {
                            let _ = run_command(engine, trimmed);
                        }
                    }
                }
            }
        }
    }
}

/// Parse and evaluate one command, printing the result or the failure
fn run_command(engine: &Engine, line: &str) -> Result<(), ()> {
    let command = parse_command_str(line).map_err(|e| println!("{}", e))?;

    match engine.evaluate(&command.op, &command.args) {
        Ok(result) => {
            println!("{}", result);
            Ok(())
        }
        Err(e) => {
            println!("{}: {}", e.kind(), e);
            Err(())
        }
    }
}

fn list_operations(engine: &Engine) {
    for def in engine.operations() {
        println!("{}/{}", def.name, def.arity());
    }
}

fn show_operation(engine: &Engine, op: &str) -> bool {
    match engine.lookup(op) {
        Some(def) => {
            println!("{}", def);
            true
        }
        None => {
            println!("{}", EvalError::UnknownOperation(op.to_string()));
            false
        }
    }
}
