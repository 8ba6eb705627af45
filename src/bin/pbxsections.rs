//! pbxsections CLI — inspect and complete the sections of an Xcode project file.
//!
//! Usage:
//!   pbxsections missing <path> [--json]
//!   pbxsections complete <path> [--dry-run] [--json]
//!   pbxsections check <path>

use clap::{Parser, Subcommand};
use pbxproj_sections::{
    add_missing_sections_to_pbxproj, complete_file, get_missing_sections, CompletionReport,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "pbxsections",
    version,
    about = "Ensure an Xcode project file contains every standard object section"
)]
struct Cli {
    /// Log each inserted section
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog sections missing from a project file
    Missing {
        /// Path to the project.pbxproj file
        path: PathBuf,
        /// Print a JSON object instead of one name per line
        #[arg(long)]
        json: bool,
    },
    /// Insert empty versions of the missing sections in place
    Complete {
        /// Path to the project.pbxproj file
        path: PathBuf,
        /// Print the patched file to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,
        /// Print the completion report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Exit with status 2 when any section is missing
    Check {
        /// Path to the project.pbxproj file
        path: PathBuf,
    },
}

#[derive(Serialize)]
struct MissingReport<'a> {
    path: &'a Path,
    missing: Vec<&'static str>,
}

/// Logs go to stderr; stdout carries command output only.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "pbxproj_sections=debug"
    } else {
        "pbxproj_sections=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{}", s);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_missing(path: &Path, json: bool) -> i32 {
    let missing = match get_missing_sections(path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if json {
        return print_json(&MissingReport { path, missing });
    }
    for section in missing {
        println!("{}", section);
    }
    0
}

fn cmd_complete_dry_run(path: &Path, json: bool) -> i32 {
    match complete_file(path) {
        Ok(completion) if json => print_json(&CompletionReport {
            path: path.to_path_buf(),
            inserted: completion.inserted,
        }),
        Ok(completion) => {
            print!("{}", completion.content);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_complete(path: &Path, json: bool) -> i32 {
    let report = match add_missing_sections_to_pbxproj(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if json {
        return print_json(&report);
    }
    if report.is_unchanged() {
        println!("All sections present in '{}'", path.display());
    } else {
        println!(
            "Added {} section(s) to '{}': {}",
            report.inserted.len(),
            path.display(),
            report.inserted.join(", ")
        );
    }
    0
}

fn cmd_check(path: &Path) -> i32 {
    match get_missing_sections(path) {
        Ok(missing) if missing.is_empty() => 0,
        Ok(missing) => {
            eprintln!("Missing sections in '{}':", path.display());
            for section in missing {
                eprintln!("  {}", section);
            }
            2
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Missing { path, json } => cmd_missing(&path, json),
        Commands::Complete {
            path,
            dry_run: true,
            json,
        } => cmd_complete_dry_run(&path, json),
        Commands::Complete { path, json, .. } => cmd_complete(&path, json),
        Commands::Check { path } => cmd_check(&path),
    };
    std::process::exit(code);
}
