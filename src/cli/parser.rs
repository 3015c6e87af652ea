use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for timekeeper
/// Per-project stopwatches with a daily history stored in SQLite
#[derive(Parser)]
#[command(
    name = "timekeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time per project: one running timer at a time, daily history, heat-mapped reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config_file: Option<String>,

    /// Never write to the database
    #[arg(global = true, long = "read-only")]
    pub read_only: bool,

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

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Run an interactive tracking session for today
    Track,

    /// Show the history of past days
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,

        #[arg(long, value_enum, default_value = "table")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Write the report to a file")]
        output: Option<String>,

        #[arg(
            long,
            short,
            help = "Limit to a day, month, year or START:END range (e.g. 2025-09 or 2025-01:2025-03)"
        )]
        period: Option<String>,

        #[arg(long = "no-color", help = "Disable cell shading")]
        no_color: bool,
    },

    /// View or change the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long, value_name = "20-255", help = "Window opacity")]
        opacity: Option<i64>,

        #[arg(
            long = "update-interval",
            value_name = "INTERVAL",
            help = "Update check interval: STARTUP, DAILY, WEEKLY, MONTHLY, NEVER"
        )]
        update_interval: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List projects in display order
    List {
        #[arg(long, help = "Include hidden projects")]
        all: bool,
    },

    /// Add a project at the end of the list
    Add {
        name: String,

        #[arg(long, help = "Start this project's timer automatically")]
        autostart: bool,

        #[arg(long, help = "Create the project hidden")]
        hidden: bool,
    },

    /// Rename a project
    Rename { id: i64, name: String },

    /// Show a hidden project again
    Show { id: i64 },

    /// Hide a project from tracking sessions
    Hide { id: i64 },

    /// Make a project the (only) autostart project
    Autostart {
        #[arg(required_unless_present = "none")]
        id: Option<i64>,

        #[arg(long, conflicts_with = "id", help = "Clear autostart")]
        none: bool,
    },

    /// Move a project one place up or down
    Move {
        id: i64,

        #[arg(value_enum)]
        direction: MoveDirection,
    },

    /// Delete a project and all its history
    Del {
        id: i64,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Overwrite the time of one project on one past day
    Set {
        /// Day (YYYY-MM-DD)
        date: String,

        /// Project id
        project: i64,

        /// Time (HH:MM:SS); empty clears it
        time: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MoveDirection {
    Up,
    Down,
}
