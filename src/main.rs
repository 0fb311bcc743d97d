use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use arithfront::process_line;
use clap::Parser;

/// arithfront reads arithmetic expressions and prints them fully
/// parenthesized.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the tokens of each line instead of the parsed expression.
    #[arg(short, long)]
    tokens: bool,

    /// Treat `input` as a file and process every line in it.
    #[arg(short, long)]
    file: bool,

    /// An expression (or a file path with `--file`). Starts an interactive
    /// prompt when omitted.
    input: Option<String>,
}

const PROMPT: &str = ">>> ";

/// How a failing line is pointed at.
#[derive(Clone, Copy)]
enum Echo {
    /// The line is already on screen after the prompt.
    Prompted,
    /// The line has to be printed above the marker.
    Reprint,
}

/// Prints the result of one line. Returns `false` if the line failed.
fn run_line(line: &str, tokens_only: bool, echo: Echo) -> bool {
    match process_line(line, tokens_only) {
        Ok(output) => {
            println!("{output}");
            true
        },
        Err(e) => {
            if let Some(position) = e.position() {
                match echo {
                    Echo::Prompted => eprintln!("{}^", " ".repeat(PROMPT.len() + position)),
                    Echo::Reprint => eprintln!("{line}\n{}^", " ".repeat(position)),
                }
            }
            eprintln!("{e}");
            false
        },
    }
}

fn repl(tokens_only: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let input = line.trim_end_matches(['\n', '\r']);
        if input.is_empty() {
            continue;
        }
        run_line(input, tokens_only, Echo::Prompted);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.input {
        None => {
            if let Err(e) = repl(args.tokens) {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
        Some(path) if args.file => {
            let Ok(contents) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            let mut ok = true;
            for line in contents.lines().filter(|line| !line.is_empty()) {
                ok &= run_line(line, args.tokens, Echo::Reprint);
            }
            if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        },
        Some(expression) => {
            if run_line(&expression, args.tokens, Echo::Reprint) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
    }
}
