mod view;

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use campmark_config::Config;
use campmark_engine::{RenderOptions, render_with, structure, to_html};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "campmark")]
#[command(about = "Render campmark text to HTML or preview it in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rendered HTML fragment
    Html {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Use the dark palette
        #[arg(long)]
        dark: bool,
    },
    /// Open a scrollable terminal preview
    View {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Use the dark palette
        #[arg(long)]
        dark: bool,
    },
    /// Print the block structure of the input
    Blocks {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Html { file, dark } => {
            let text = read_input(file.as_deref())?;
            let tree = render_with(&text, &options(dark)?);
            print!("{}", to_html(&tree));
        }
        Command::View { file, dark } => {
            let text = read_input(file.as_deref())?;
            let title = file
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdin".to_string());
            let tree = render_with(&text, &options(dark)?);
            view::run(title, &tree)?;
        }
        Command::Blocks { file } => {
            let text = read_input(file.as_deref())?;
            for block in structure(&text) {
                println!("{:?} {}..{}", block.kind, block.span.start, block.span.end);
                for line in &block.lines {
                    println!("  | {line}");
                }
            }
        }
        Command::Init { force } => {
            let path = Config::config_path();
            if init_config(&path, force)? {
                println!("Wrote {}", path.display());
            } else {
                println!("{} already exists (use --force to overwrite)", path.display());
            }
        }
    }

    Ok(())
}

/// Config file defaults, with `--dark` forcing the dark palette.
fn options(dark: bool) -> Result<RenderOptions> {
    let config = match Config::load()? {
        Some(config) => config,
        None => {
            log::debug!(
                "no config at {}, using defaults",
                Config::config_path().display()
            );
            Config::default()
        }
    };
    let mut options = config.render_options();
    options.dark_mode |= dark;
    Ok(options)
}

/// Writes the default config to `path` unless one exists. Returns whether it wrote.
fn init_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    Config::default().save_to_path(path)?;
    Ok(true)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
