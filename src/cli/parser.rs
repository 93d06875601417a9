use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work time per project and generate summaries (SQLite backed)",
    long_about = None,
    after_help = "Examples:\n  \
        worklog add --date 2026-01-26 --project Thesis --minutes 45\n  \
        worklog list\n  \
        worklog totals\n  \
        worklog report --start 2026-01-01 --end 2026-01-31 --json january.json"
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Show database information
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add one entry
    Add {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Project name, for example Thesis
        #[arg(long)]
        project: String,

        /// Minutes as a whole number
        #[arg(long, allow_hyphen_values = true)]
        minutes: String,
    },

    /// List entries (newest first)
    List {
        /// Only show entries for this project
        #[arg(long)]
        project: Option<String>,
    },

    /// Show totals by project
    Totals {
        /// Only total one project
        #[arg(long)]
        project: Option<String>,
    },

    /// Totals by project for a date range (default: last 7 days)
    Report {
        /// Start date YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,

        /// End date YYYY-MM-DD
        #[arg(long)]
        end: Option<String>,

        /// Write the report to a JSON file
        #[arg(long, value_name = "FILE")]
        json: Option<String>,

        /// Write the report to a CSV file
        #[arg(long, value_name = "FILE")]
        csv: Option<String>,

        /// Overwrite existing export files without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show overall summary statistics
    Summary,

    /// Delete entry by id
    #[command(alias = "del")]
    Delete {
        /// ID of entry to delete
        #[arg(long)]
        id: i64,
    },

    /// Import entries from a CSV file with a date,project,minutes header
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}

impl Commands {
    /// Export targets requested on a `report` command.
    pub fn report_targets(&self) -> Vec<(ExportFormat, String)> {
        match self {
            Commands::Report { json, csv, .. } => {
                let mut out = Vec::new();
                if let Some(f) = json {
                    out.push((ExportFormat::Json, f.clone()));
                }
                if let Some(f) = csv {
                    out.push((ExportFormat::Csv, f.clone()));
                }
                out
            }
            _ => Vec::new(),
        }
    }
}
