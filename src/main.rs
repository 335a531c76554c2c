//! Checklist Icons CLI
//!
//! Usage:
//!   checklist-icons [OPTIONS]
//!
//! Options:
//!   -o, --out-dir <DIR>    Directory to write icons into
//!   -p, --prefix <NAME>    File name prefix (default "icon")
//!   -c, --config <FILE>    Settings file (TOML format)
//!   -k, --keep-going       Keep writing other sizes after a failed write
//!   --compact              Write SVG without indentation
//!   --no-comments          Omit XML comments
//!   -v, --verbose          Increase log verbosity (repeatable)
//!   -h, --help             Print help

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use checklist_icons::{FailurePolicy, Generator, GeneratorSettings, REFERENCE_SIZES};

#[derive(Parser)]
#[command(name = "checklist-icons")]
#[command(about = "Generate the checklist app icon as SVG at every app icon size")]
struct Cli {
    /// Directory to write icons into (created if missing)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// File name prefix, icons are named <PREFIX>-<SIZE>.svg
    #[arg(short, long)]
    prefix: Option<String>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep writing the remaining sizes when one write fails
    #[arg(short, long)]
    keep_going: bool,

    /// Write SVG on a single line without indentation
    #[arg(long)]
    compact: bool,

    /// Omit XML comments from the output
    #[arg(long)]
    no_comments: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Load settings
    let mut settings = match &cli.config {
        Some(path) => match GeneratorSettings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GeneratorSettings::default(),
    };

    // Command line flags take precedence over the settings file
    if let Some(dir) = cli.out_dir {
        settings.output_dir = dir;
    }
    if let Some(prefix) = cli.prefix {
        settings.prefix = prefix;
    }
    if cli.keep_going {
        settings.failure_policy = FailurePolicy::Continue;
    }
    if cli.compact {
        settings.svg.pretty_print = false;
    }
    if cli.no_comments {
        settings.svg.comments = false;
    }

    let generator = Generator::new(settings);
    let mut stdout = io::stdout().lock();
    match generator.generate(&REFERENCE_SIZES, &mut stdout) {
        Ok(report) if report.is_complete() => {}
        Ok(report) => {
            for failure in &report.failures {
                eprintln!("Error: {}", failure);
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
