pub mod check;
pub mod init;
pub mod paths;
pub mod run;
pub mod summary;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::settings::PathOverrides;

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Monthly category totals from a transaction CSV, with rejected rows set aside."
)]
pub struct Cli {
    /// Log debug detail to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub paths: PathArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate, aggregate, and write the summary and rejected-rows files (default).
    Run,
    /// Validate only: show which rows would be rejected. Writes nothing.
    Check,
    /// Save the given path options as defaults in the settings file.
    Init,
    /// Show the settings file and the resolved input/output paths.
    Paths,
}

#[derive(Args, Clone, Default)]
pub struct PathArgs {
    /// Directory relative file names are resolved against
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
    /// Transaction CSV to read (default: expenses.csv)
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,
    /// Monthly summary CSV to write (default: monthly_expenses_summary.csv)
    #[arg(long, global = true)]
    pub summary: Option<PathBuf>,
    /// Rejected rows CSV to write (default: invalid_expenses.csv)
    #[arg(long, global = true)]
    pub rejected: Option<PathBuf>,
}

impl From<PathArgs> for PathOverrides {
    fn from(args: PathArgs) -> Self {
        Self {
            data_dir: args.data_dir,
            input: args.input,
            summary: args.summary,
            rejected: args.rejected,
        }
    }
}
