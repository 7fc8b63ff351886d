//! Copa Tournament CLI
//!
//! Inspect tournament snapshots: print group tables, validate candidate
//! scores, check data consistency.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use copa_core::{Group, ScoreValidator};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "copa")]
#[command(about = "Group tables and score validation for tournament snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print the standings table of one group, or of every group
    Table {
        /// Tournament snapshot JSON file
        #[arg(long)]
        file: PathBuf,

        /// Group code (A, B or C); omit for all groups
        #[arg(long)]
        group: Option<Group>,
    },

    /// Validate a candidate score value
    Validate {
        /// Raw score text as an operator would type it
        raw: String,
    },

    /// Recompute every group and report consistency problems
    Check {
        /// Tournament snapshot JSON file
        #[arg(long)]
        file: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Table { file, group } => {
            let snapshot = copa_cli::load_snapshot(&file)?;
            let groups: Vec<Group> = match group {
                Some(group) => vec![group],
                None => Group::ALL.to_vec(),
            };
            for group in groups {
                let rows = copa_cli::group_table(&snapshot, group)?;
                println!("{}", copa_cli::render_table(group, &rows));
            }
        }

        Commands::Validate { raw } => match ScoreValidator::validate(&raw) {
            Ok(value) => println!("valid: {value}"),
            Err(err) => {
                eprintln!("rejected ({}): {}", err.code(), err);
                std::process::exit(1);
            }
        },

        Commands::Check { file } => {
            let snapshot = copa_cli::load_snapshot(&file)?;
            let problems = copa_cli::check_snapshot(&snapshot);
            if problems.is_empty() {
                println!("ok: all groups consistent");
            } else {
                for problem in &problems {
                    eprintln!("{problem}");
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("copa_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
