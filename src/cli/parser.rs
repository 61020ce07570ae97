use clap::{Parser, Subcommand, ValueEnum};

use crate::export::ExportFormat;
use crate::models::{DayStatus, Theme};

/// Command-line interface definition for wagelog
/// CLI application to track daily wages, advances and expenses with SQLite
#[derive(Parser)]
#[command(
    name = "wagelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple wage logging CLI: track work days, advances and expenses, and build period pay reports",
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

/// Which collection an id-addressed operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EntryKind {
    Work,
    Advance,
    Expense,
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

    /// Record the status of a work day (one record per date)
    Add {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Day status
        #[arg(long, value_enum, default_value = "worked")]
        status: DayStatus,

        /// Override the daily-rate snapshot for this day
        #[arg(long, help = "Rate for this day (default: the settings daily rate)")]
        rate: Option<String>,

        /// Overtime pay on top of the day
        #[arg(long)]
        overtime: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Record a paid extra service (any number per date)
    Extra {
        /// Date of the service (YYYY-MM-DD)
        date: String,

        /// Price charged for the service
        price: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Record a cash advance taken against future pay
    Advance {
        /// Date of the advance (YYYY-MM-DD)
        date: String,

        /// Amount received
        amount: String,

        #[arg(long)]
        note: Option<String>,
    },

    /// Record an incidental expense (bookkeeping only, never in reports)
    Expense {
        /// Date of the expense (YYYY-MM-DD)
        date: String,

        /// Amount spent
        amount: String,

        #[arg(long)]
        note: Option<String>,
    },

    /// Delete an entry by id
    Del {
        /// Collection the id belongs to
        #[arg(value_enum)]
        kind: EntryKind,

        /// Entry id: the date for day records, the token printed by list
        /// for extras, advances and expenses
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List stored entries
    List {
        #[arg(value_enum, default_value = "work")]
        kind: EntryKind,

        #[arg(long, short, help = "Filter by month (YYYY-MM) or range (START:END)")]
        period: Option<String>,
    },

    /// Period report: days worked, gross pay, advances, final total
    Report {
        /// Calendar month (YYYY-MM)
        #[arg(long, group = "window")]
        month: Option<String>,

        /// Previous calendar month
        #[arg(long, group = "window")]
        last: bool,

        /// Custom inclusive range START:END (YYYY-MM-DD dates)
        #[arg(long, group = "window")]
        range: Option<String>,

        /// Open billing cycle (everything since the last payout)
        #[arg(long, group = "window")]
        cycle: bool,

        /// Also list the entries behind the totals
        #[arg(long)]
        details: bool,

        /// Print the plain-text share message instead of the table
        #[arg(long)]
        share: bool,
    },

    /// Show or close the open billing cycle
    Cycle {
        /// Move the cycle start to today (entries are kept)
        #[arg(long)]
        close: bool,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show or update account settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print_settings: bool,

        #[arg(long, help = "Daily rate used as snapshot for new day records")]
        rate: Option<String>,

        #[arg(long)]
        worker: Option<String>,

        #[arg(long)]
        employer: Option<String>,

        #[arg(long)]
        currency: Option<String>,

        #[arg(long, value_enum)]
        theme: Option<Theme>,

        #[arg(long, help = "Enable or disable the daily reminder (true/false)")]
        notify: Option<bool>,

        #[arg(long = "notify-time", help = "Reminder time (HH:MM)")]
        notify_time: Option<String>,
    },

    /// Store or clear the remote session (externally issued credentials)
    Auth {
        #[arg(long, help = "Remote user id")]
        user: Option<String>,

        #[arg(long, help = "Access token issued by the remote service")]
        token: Option<String>,

        #[arg(long, help = "Show the active session")]
        show: bool,

        #[arg(long, help = "Clear the session and purge local account data")]
        logout: bool,
    },

    /// Mirror collections to the remote store, or fetch them back
    Sync {
        #[arg(long, help = "Push every local collection to the remote")]
        push: bool,

        #[arg(long, help = "Fetch all remote collections and overwrite local data")]
        pull: bool,
    },

    /// Write a backup document with all entries and settings
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Wrap the document in a .zip archive")]
        compress: bool,
    },

    /// Restore a backup document (overwrites local data)
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export a period report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, group = "window", help = "Calendar month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, group = "window", help = "Custom range START:END")]
        range: Option<String>,

        #[arg(long, group = "window", help = "Open billing cycle")]
        cycle: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the daily reminder if one is due
    Remind,

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

    /// Print or manage the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
