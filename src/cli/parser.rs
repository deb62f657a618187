use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ovlogger
/// CLI application to track working hours and an overtime balance with SQLite
#[derive(Parser)]
#[command(
    name = "ovlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time logging CLI: track working hours, absences and an overtime balance using SQLite",
    long_about = None
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or update a day entry (one record per date)
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Day status: work, school, vacation, sick, holiday, off, recovery
        #[arg(
            long = "status",
            help = "Day status: work (default), school, vacation, sick, holiday, off, recovery"
        )]
        status: Option<String>,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        /// Start of the lunch break (HH:MM)
        #[arg(long = "lunch-start", help = "Start of the lunch break (HH:MM)")]
        lunch_start: Option<String>,

        /// End of the lunch break (HH:MM)
        #[arg(long = "lunch-end", help = "End of the lunch break (HH:MM)")]
        lunch_end: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,

        /// Free-text note for the day
        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Delete a day entry by date or id
    Del {
        /// Date of the entry to delete (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long = "id", help = "Entry id to delete instead of a date")]
        id: Option<i64>,
    },

    /// List day entries
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, help = "Filter by day status")]
        status: Option<String>,

        #[arg(long = "today", help = "Show only today's entry")]
        now: bool,
    },

    /// Show or change the weekly schedule
    Schedule {
        #[arg(long = "show", help = "Print the active schedule")]
        show: bool,

        #[arg(long = "hours", help = "Weekly target hours (e.g. 37.5)")]
        hours: Option<f64>,

        #[arg(long = "days", help = "Work days per week (1-7)")]
        days: Option<u32>,

        #[arg(long = "mode", help = "Schedule mode: uniform or per-day")]
        mode: Option<String>,

        #[arg(
            long = "weekday",
            help = "Apply the time flags to one weekday (mon..sun) instead of the uniform template"
        )]
        weekday: Option<String>,

        #[arg(long = "enable", help = "Enable the selected weekday")]
        enable: bool,

        #[arg(long = "disable", help = "Disable the selected weekday")]
        disable: bool,

        #[arg(long = "in", help = "Template clock-in time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "lunch-start", help = "Template lunch break start (HH:MM)")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", help = "Template lunch break end (HH:MM)")]
        lunch_end: Option<String>,

        #[arg(long = "out", help = "Template clock-out time (HH:MM)")]
        end: Option<String>,
    },

    /// Show the overtime bank and period statistics
    Status {
        #[arg(long = "date", help = "Anchor date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(
            long = "legacy-target",
            help = "Also print the absence-adjusted cumulative month/year targets"
        )]
        legacy_target: bool,
    },

    /// Consume overtime balance (a time range or a full day)
    Recover {
        /// Date of the recovery (YYYY-MM-DD)
        date: String,

        #[arg(long = "from", help = "Start of the recovered range (HH:MM)")]
        from: Option<String>,

        #[arg(long = "to", help = "End of the recovered range (HH:MM)")]
        to: Option<String>,

        #[arg(
            long = "full-day",
            conflicts_with_all = ["from", "to"],
            help = "Recover a whole day (consumes one daily target)"
        )]
        full_day: bool,

        #[arg(long = "note")]
        note: Option<String>,
    },

    /// Record a manual overtime credit
    Earn {
        /// Date of the credit (YYYY-MM-DD)
        date: String,

        /// Credited minutes (positive)
        minutes: i64,

        #[arg(long = "note")]
        note: Option<String>,
    },

    /// List or remove manual overtime events
    Events {
        #[arg(long = "remove", help = "Remove the event with this id")]
        remove: Option<i64>,
    },

    /// Export day entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import day entries (merge by date, newest updated_at wins)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
