//! Command-line interface (CLI) for stackcalc
//!
//! Wraps the [`Calculator`] pipeline in an interactive shell, a one-shot
//! evaluator, and a line-per-expression file mode. Every expression is
//! validated first; failures are reported and never end the shell.

use anyhow::{Context, Result, bail};
use clap::{Parser as ClapParser, Subcommand};
use stackcalc::{Calculation, Calculator, PopStrategy, validate};
use std::io::{self, BufRead, Write};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Release at most one stacked operator per incoming operator
    #[arg(long, global = true)]
    single_pop: bool,

    /// Command (defaults to `repl`)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive calculator
    Repl,
    /// Evaluates a single expression
    Eval {
        /// Infix expression, e.g. "(3 + 4) x 2"
        expr: String,
    },
    /// Evaluates every non-blank line of a file
    File {
        /// Input file with one expression per line
        #[arg(short, long)]
        input: String,
    },
}

fn run(calc: &Calculator, raw: &str) -> Result<Calculation, stackcalc::CalcError> {
    validate(raw)?;
    calc.calculate(raw)
}

fn read_line(stdin: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn repl(calc: &Calculator) -> Result<()> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();

    println!("Stack-Based Calculator");
    println!("**********************");

    loop {
        println!("Please enter a math expression, then press <Enter>");
        stdout.flush()?;
        let Some(raw) = read_line(&mut stdin)? else {
            break;
        };

        if let Err(err) = validate(&raw) {
            println!("Invalid input! {err}");
            continue;
        }

        match calc.calculate(&raw) {
            Ok(calculation) => println!("{calculation}"),
            Err(err) => {
                log::debug!("{raw:?} failed: {err:?}");
                println!("Error: {err}");
            }
        }

        println!();
        println!("Press <Enter> to calculate again or type anything else to quit");
        stdout.flush()?;
        match read_line(&mut stdin)? {
            Some(answer) if answer.is_empty() => continue,
            _ => break,
        }
    }

    Ok(())
}

fn eval_file(calc: &Calculator, path: &str) -> Result<()> {
    let text = std::fs::read_to_string(path).with_context(|| format!("can't open {path:?}"))?;
    let mut total = 0usize;
    let mut failed = 0usize;

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        total += 1;
        match run(calc, line) {
            Ok(calculation) => println!("{} = {}", line.trim(), calculation.value),
            Err(err) => {
                failed += 1;
                println!("{}: error: {err}", line.trim());
            }
        }
    }

    log::info!("Stats: {total} expressions, {failed} failed");
    if failed > 0 {
        bail!("{failed} of {total} expressions failed");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let strategy = if args.single_pop {
        PopStrategy::Single
    } else {
        PopStrategy::Drain
    };
    let calc = Calculator::new(strategy);
    log::debug!("pop strategy: {:?}", calc.strategy());

    match args.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(&calc)?,
        Commands::Eval { expr } => {
            let calculation = run(&calc, &expr).with_context(|| format!("evaluating {expr:?}"))?;
            println!("{}", calculation.value);
        }
        Commands::File { input } => eval_file(&calc, &input)?,
    }

    Ok(())
}
