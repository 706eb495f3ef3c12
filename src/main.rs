use std::{fs, process::ExitCode};

use clap::Parser;
use stackcalc::{DivisionPolicy, Options, evaluate_with};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{filter::Targets, fmt::Layer, prelude::*};

/// Expressions shown when no input is given.
const DEMO_EXPRESSIONS: [&str; 2] =
    ["5 + 2 - ( 2 * 3 ) / ( 1 + 7 * 2 )", "5 + 2 - ( 2 * 3 ) / ( ( 1 + 7 ) * 2 )"];

/// stackcalc evaluates whitespace-separated infix arithmetic expressions such
/// as `2 * ( 5 * ( 1 + 2 ) )`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat every input as a file holding one expression per line. Blank lines
    /// and lines starting with `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Fail on division by zero instead of producing infinity or NaN.
    #[arg(long)]
    strict_division: bool,

    /// Log evaluation steps to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expressions (or files with `--file`). Runs a short demonstration when
    /// empty.
    inputs: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry().with(Layer::new().with_writer(std::io::stderr)
                                                    .with_target(false)
                                                    .with_filter(Targets::new().with_default(LevelFilter::WARN)
                                                                               .with_target("stackcalc", level)))
                                  .init();
}

/// Collects the expressions to evaluate, reading files when asked to.
fn collect_expressions(args: &Args) -> Result<Vec<String>, String> {
    if args.inputs.is_empty() {
        info!("no input given, running the demonstration expressions");
        return Ok(DEMO_EXPRESSIONS.iter().map(ToString::to_string).collect());
    }
    if !args.file {
        return Ok(args.inputs.clone());
    }

    let mut expressions = Vec::new();
    for path in &args.inputs {
        let content = fs::read_to_string(path).map_err(|e| {
                                                   format!("Failed to read the input file '{path}'. Perhaps this file does not exist? ({e})")
                                               })?;
        expressions.extend(content.lines()
                                  .map(str::trim)
                                  .filter(|line| !line.is_empty() && !line.starts_with('#'))
                                  .map(str::to_string));
    }
    Ok(expressions)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = Options { division: if args.strict_division {
                                          DivisionPolicy::Reject
                                      } else {
                                          DivisionPolicy::Ieee
                                      }, };

    let expressions = match collect_expressions(&args) {
        Ok(expressions) => expressions,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let mut failed = 0_usize;
    for expression in &expressions {
        match evaluate_with(expression, options) {
            Ok(value) => println!("{expression} = {value}"),
            Err(e) => {
                failed += 1;
                eprintln!("{expression}: {e}");
            },
        }
    }

    if failed > 0 {
        warn!(failed, total = expressions.len(), "some expressions were rejected");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
