use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use parlance::interpreter::{
    evaluator::core::Interpreter,
    lexer::lex,
    parser::core::parse,
    value::core::Value,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// parlance is a small, natural-language-flavored imperative scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run; omit to start the interactive prompt.
    script: Option<PathBuf>,

    /// Print the token stream before executing.
    #[arg(long)]
    debug: bool,

    /// Announce the parse and execution phases.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path, args.debug, args.trace),
        None => run_repl(),
    }
}

/// Runs a script file against standard input and output. Runtime errors
/// print to stderr and exit with a non-zero status.
fn run_file(path: &Path, debug: bool, trace: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the script '{}'. Perhaps this file does not exist?",
                  path.display());
        process::exit(1);
    });

    let tokens = match lex(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{error}");
            Vec::new()
        },
    };

    if debug {
        println!("Tokens:");
        for (token, pos) in &tokens {
            println!("  {token:?} at {pos}");
        }
        println!("End of tokens");
    }

    let program = parse(&mut tokens.iter().peekable());

    if trace {
        println!("Parsing succeeded, executing program...");
    }

    let mut interpreter = Interpreter::new(io::stdin().lock(), io::stdout().lock());
    if let Err(error) = interpreter.run(&program) {
        eprintln!("{error}");
        process::exit(1);
    }
}

/// The interactive prompt: one persistent interpreter, one line at a time.
/// Errors print and return to the prompt; a non-nil result is echoed.
fn run_repl() {
    println!("parlance - interactive mode");
    println!("Type 'exit' to quit");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("Failed to start the prompt: {error}");
            process::exit(1);
        },
    };

    let mut interpreter = Interpreter::new(io::stdin().lock(), io::stdout());

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                if line == "exit" {
                    break;
                }
                editor.add_history_entry(line.as_str()).ok();

                let tokens = match lex(&line) {
                    Ok(tokens) => tokens,
                    Err(error) => {
                        eprintln!("{error}");
                        continue;
                    },
                };
                let program = parse(&mut tokens.iter().peekable());

                match interpreter.run(&program) {
                    Ok(Value::Nil) => {},
                    Ok(value) => println!("{value}"),
                    Err(error) => eprintln!("{error}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error}");
                break;
            },
        }
    }
}
