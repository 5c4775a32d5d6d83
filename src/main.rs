use std::{
    fs::read_to_string,
    io::{self, BufRead, Read, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use console::Style;
use fern::Dispatch;
use log::{debug, error, Level, LevelFilter};
use minisem::{
    analyzer::analyzer::analyze,
    errors::errors::Error,
    lexer::lexer::tokenize,
    playback::Playback,
    render_error_snippet,
};

#[derive(Parser)]
#[command(version, about = "Semantic analyzer for a tiny typed language", long_about = None)]
struct Cli {
    /// Source file to analyze, standard input when omitted
    file: Option<PathBuf>,

    /// Reveal the results one line at a time, pressing Enter between lines
    #[arg(long, requires = "file")]
    step: bool,

    /// Do not print the source snippet for lexical errors
    #[arg(long)]
    no_source_snippet: bool,

    /// Log stage timings and summaries
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    if let Err(err) = setup_logger(level) {
        eprintln!("Failed to set up logging: {}", err);
    }

    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!("Failed to read input: {}", err);
            return ExitCode::from(2);
        }
    };

    if cli.step {
        return match step_through(&source) {
            Ok(failed) => exit_code(failed),
            Err(err) => {
                error!("Failed to read from the terminal: {}", err);
                ExitCode::from(2)
            }
        };
    }

    let start = Instant::now();
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            println!("{}", err);
            if !cli.no_source_snippet {
                display_error(&err, &source);
            }
            return exit_code(true);
        }
    };
    debug!("Tokenized in {:?}", start.elapsed());

    let analyze_start = Instant::now();
    let diagnostics = analyze(&tokens);
    debug!("Analyzed in {:?}", analyze_start.elapsed());

    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }

    exit_code(diagnostics.iter().any(|diagnostic| diagnostic.is_error()))
}

fn setup_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            let style = match record.level() {
                Level::Error => Style::new().red().bright(),
                Level::Warn => Style::new().yellow().bright(),
                Level::Info => Style::new().green().bright(),
                Level::Debug => Style::new().cyan().bright(),
                Level::Trace => Style::new().magenta().bright(),
            };
            out.finish(format_args!(
                "{} {}",
                style.apply_to(format!("[{:<5}]", record.level())),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn read_source(file: &Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Prints one result per Enter press. Returns whether any failure was shown.
fn step_through(source: &str) -> io::Result<bool> {
    let mut playback = Playback::new(source);
    let stdin = io::stdin();
    let mut input = String::new();

    while let Some(line) = playback.step() {
        let line = line.to_string();

        let total = playback.total().unwrap_or_default();
        print!("[{}/{}] {}", playback.revealed().len(), total, line);

        if !playback.is_finished() {
            io::stdout().flush()?;
            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                println!();
                break;
            }
        } else {
            println!();
        }
    }

    Ok(playback.has_failures())
}

fn exit_code(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn display_error(error: &Error, source: &str) {
    if let Some(snippet) = render_error_snippet(error, source) {
        eprintln!("{}", snippet);
    }
}
