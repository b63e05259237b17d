#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::module_name_repetitions)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use mapblock_edit::EditorOptions;

mod commands;

#[derive(Parser)]
#[command(author, version, about = "Creates, inspects and brushes map block files.", long_about = None)]
pub struct Cli {
    #[arg(help = "Options file to use instead of the one in the config directory", long, value_name = "FILE")]
    options: Option<PathBuf>,

    #[arg(help = "Log to stderr only", long, default_value_t = false)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Creates an all free map block")]
    Create {
        path: PathBuf,
        #[arg(long)]
        width: Option<i32>,
        #[arg(long)]
        height: Option<i32>,
    },

    #[command(about = "Prints size and blocked cell count")]
    Info { path: PathBuf },

    #[command(about = "Prints the grid, '#' is blocked and '.' is free")]
    Show { path: PathBuf },

    #[command(about = "Applies one brush stroke and saves the map block")]
    Brush {
        path: PathBuf,
        #[arg(long)]
        x: i32,
        #[arg(long)]
        y: i32,
        #[arg(help = "Brush size, defaults to the stored option", long)]
        size: Option<i32>,
        #[arg(help = "Free the cells instead of blocking them", long, default_value_t = false)]
        erase: bool,
        #[arg(help = "Write to this file instead of overwriting the input", long, short)]
        output: Option<PathBuf>,
    },
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "GitHub", "mapblock_tool")
}

fn options_file() -> Option<PathBuf> {
    project_dirs().map(|proj_dirs| proj_dirs.config_dir().join("options.toml"))
}

fn start_logger(to_file: bool) -> anyhow::Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info")?;
    if to_file {
        if let Some(proj_dirs) = project_dirs() {
            let log_dir = proj_dirs.config_dir();
            if std::fs::create_dir_all(log_dir).is_ok() {
                return Ok(logger
                    .log_to_file(FileSpec::default().directory(log_dir).basename("mapblock_tool").suffix("log").suppress_timestamp())
                    .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                    .duplicate_to_stderr(Duplicate::Warn)
                    .start()?);
            }
        }
    }
    Ok(logger.log_to_stderr().start()?)
}

/// Loads the options file; a missing one is written with the defaults so it can be edited.
fn load_options(path: Option<&Path>) -> EditorOptions {
    let Some(path) = path.map(Path::to_path_buf).or_else(options_file) else {
        return EditorOptions::default();
    };
    if !path.exists() {
        let options = EditorOptions::default();
        if let Err(err) = options.store(&path) {
            log::error!("Error writing options file {}: {err}", path.display());
        }
        return options;
    }
    match EditorOptions::load(&path) {
        Ok(options) => options,
        Err(err) => {
            log::error!("Using default options, {} is unreadable: {err}", path.display());
            EditorOptions::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let _logger = start_logger(!args.no_log_file)?;
    let options = load_options(args.options.as_deref());

    match args.command {
        Commands::Create { path, width, height } => {
            let width = width.unwrap_or(options.default_width);
            let height = height.unwrap_or(options.default_height);
            let saved = commands::create(&options, &path, width, height).with_context(|| format!("creating {}", path.display()))?;
            println!("{}", commands::describe(&saved));
        }
        Commands::Info { path } => {
            let map_block = commands::open(&path)?;
            println!("{}", commands::describe(&map_block));
        }
        Commands::Show { path } => {
            let map_block = commands::open(&path)?;
            print!("{}", commands::render(&map_block));
        }
        Commands::Brush {
            path,
            x,
            y,
            size,
            erase,
            output,
        } => {
            let stroke = commands::Stroke { x, y, size, erase };
            let saved_to = commands::brush(&options, &path, output.as_deref(), stroke)?;
            println!("saved {}", saved_to.display());
        }
    }

    Ok(())
}
