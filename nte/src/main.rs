use std::{io, path::PathBuf, process::ExitCode};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use nte_frontend::{error::AppError, file, settings::Settings};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
    #[error("Tracing error: {0}")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("Logging disabled: {}", err);
    }

    debug!("starting application");

    let mut settings = Settings::default();
    match map_args_to_settings(&cli().get_matches(), &mut settings) {
        Some(()) => {}
        None => {
            println!("Usage: nte <filename>");
            return ExitCode::FAILURE;
        }
    }

    let lines = match load_lines(&settings) {
        Ok(it) => it,
        Err(code) => return code,
    };

    match nte_frontend::run(settings, lines) {
        Ok(()) => {
            debug!("closing application");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            println!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    Command::new("nte")
        .about("nte - a minimal terminal text editor")
        .arg(
            Arg::new("path")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("file to edit, created when missing"),
        )
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) -> Option<()> {
    settings.path = args.get_one::<PathBuf>("path").cloned()?;
    Some(())
}

/// A missing file is created with a single empty line and then edited.
fn load_lines(settings: &Settings) -> Result<Vec<String>, ExitCode> {
    let path = &settings.path;
    match file::read_lines(path) {
        Ok(lines) => Ok(lines),
        Err(AppError::FileOperationFailed(err)) if err.kind() == io::ErrorKind::NotFound => {
            println!("File {} doesn't exist. Creating a new file.", path.display());

            if let Err(err) = file::write_lines(path, [""]) {
                error!("creating {:?} failed: {:?}", path, err);
                println!("Error creating file: {}", err);
                return Err(ExitCode::FAILURE);
            }

            Ok(vec![String::new()])
        }
        Err(err) => {
            error!("reading {:?} failed: {:?}", path, err);
            println!("Error reading file: {}", err);
            Err(ExitCode::FAILURE)
        }
    }
}

fn init_logging() -> Result<(), Error> {
    let logfile = tracing_appender::rolling::daily(get_logging_path()?, "log");
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/nte/logs"))
}
