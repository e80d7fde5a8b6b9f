mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod rules;
mod sound;
mod speed;
mod util;
use crate::app::App;
use crate::cli::{Arguments, CliAction, USAGE};
use crate::config::{Config, ConfigError};
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match CliAction::from_parser(lexopt::Parser::from_env()) {
        Ok(CliAction::Run(args)) => exit_code(run(args)),
        Ok(CliAction::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(CliAction::Version) => {
            println!("torsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("torsnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(cells) = args.cells {
        config.game = config
            .game
            .with_cells(cells)
            .context("invalid --cells argument")?;
    }
    if let Some(path) = args.log_file.or_else(|| config.files.log_file.clone()) {
        init_logging(&path)?;
    }
    log::info!("Starting torsnake with {:?}", config.game);
    let terminal = ratatui::init();
    let r = App::new(config).run(terminal);
    ratatui::restore();
    r.map_err(Into::into)
}

/// Load the configuration file given on the command line or, failing that,
/// the one at the default location if it exists
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => Config::load(p, false),
        None => match Config::default_path() {
            Ok(p) => Config::load(&p, true),
            Err(ConfigError::NoPath) => Ok(Config::default()),
            Err(e) => Err(e),
        },
    }
}

/// Send log messages to `path`.  The terminal belongs to the game while it
/// runs, so nothing is logged unless a file is given.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("torsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
