//! CLI entry point: with no file argument, runs the REPL; with one, runs
//! the file as a single program.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use thiserror::Error;

use gjuha::environment::Environment;
use gjuha::object::Object;

#[derive(Debug, ClapParser)]
#[command(name = "gjuha", about = "A tree-walking interpreter with Albanian keywords")]
struct Args {
    /// Source file to run; omit to start the REPL.
    file: Option<PathBuf>,

    /// Raise the log level for this session.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match args.file {
        Some(path) => run_file(&path),
        None => {
            run_repl();
            ExitCode::SUCCESS
        }
    }
}

fn run_file(path: &PathBuf) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(source) => {
            let error = DriverError::ReadFile {
                path: path.clone(),
                source,
            };
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    log::debug!("running {} ({} bytes)", path.display(), source.len());

    let env = Environment::new();
    match gjuha::interpret_with_env(&source, &env) {
        Ok(result) => {
            if !matches!(result, Object::Null) {
                println!("{result}");
            }
            ExitCode::SUCCESS
        }
        Err(errors) => {
            for err in &errors {
                log::debug!("parse error: {err}");
                eprintln!("\t{err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run_repl() {
    const PROMPT: &str = ">> ";

    let env = Environment::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{PROMPT}");
        let _ = stdout.flush();

        let mut line = String::new();
        let bytes_read = stdin.lock().read_line(&mut line).unwrap_or(0);
        if bytes_read == 0 {
            break;
        }

        log::trace!("repl line received: {line:?}");

        match gjuha::interpret_with_env(&line, &env) {
            Ok(result) => {
                log::trace!("repl line evaluated to {result}");
                if !matches!(result, Object::Null) {
                    println!("{result}");
                }
            }
            Err(errors) => {
                for err in &errors {
                    log::debug!("parse error: {err}");
                    println!("\t{err}");
                }
            }
        }
    }
}
