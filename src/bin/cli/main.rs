mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glossa::render::Theme;

#[derive(Parser)]
#[command(name = "glossa", about = "Personal glossary CLI and TUI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Color theme for rendered output
    #[arg(long, global = true, default_value = "light")]
    theme: Theme,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all words
    List,

    /// Show a word's explanation
    Show {
        word: String,
        /// Emit the themed HTML document instead of terminal text
        #[arg(long)]
        html: bool,
    },

    /// Add a word (silently replaces an existing entry)
    Add {
        word: String,
        /// Explanation markdown (use "-" to read from stdin)
        #[arg(long)]
        text: Option<String>,
    },

    /// Replace the explanation of an existing word
    Edit {
        word: String,
        /// Explanation markdown (use "-" to read from stdin)
        #[arg(long)]
        text: Option<String>,
    },

    /// Delete a word
    Rm {
        word: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Find words containing a substring (case-insensitive)
    Search {
        pattern: String,
    },

    /// Show per-day add/view statistics
    Stats,

    /// Launch interactive TUI
    #[cfg(feature = "tui")]
    Tui,
}

/// Read content from stdin if piped, or resolve "-" as stdin
fn resolve_content(content: Option<String>) -> Option<String> {
    match content.as_deref() {
        Some("-") => {
            // Explicit stdin read
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
            Some(buf)
        }
        Some(_) => content,
        None => {
            // Auto-detect piped stdin
            if !stdin_is_tty() {
                let mut buf = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
                if buf.is_empty() {
                    None
                } else {
                    Some(buf)
                }
            } else {
                None
            }
        }
    }
}

/// Check if stdin is a terminal (not piped)
fn stdin_is_tty() -> bool {
    unsafe { libc_isatty(0) != 0 }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(cli.data_dir.as_deref(), cli.theme)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::List) => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::list::run(&app, &cli.format)?;
        }
        Some(Command::Show { word, html }) => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::show::run(&app, &word, html, cli.theme, use_color)?;
        }
        Some(Command::Add { word, text }) => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            let text = resolve_content(text);
            commands::add::run(&mut app, &word, text, &cli.format)?;
        }
        Some(Command::Edit { word, text }) => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            let text = resolve_content(text);
            commands::edit::run(&mut app, &word, text)?;
        }
        Some(Command::Rm { word, yes }) => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            commands::remove::run(&mut app, &word, yes)?;
        }
        Some(Command::Search { pattern }) => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::search::run(&app, &pattern, &cli.format)?;
        }
        Some(Command::Stats) => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(cli.data_dir.as_deref(), cli.theme)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
