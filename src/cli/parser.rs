use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Connectify
#[derive(Parser)]
#[command(
    name = "connectify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep track of your connections and when to check in with them",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of `default_user` from the config
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long = "sample", help = "Seed the database with three sample connections")]
        sample: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a connection
    Add {
        /// Display name of the connection
        name: String,

        #[arg(long = "id", help = "Contact id (a UUID is generated when omitted)")]
        contact_id: Option<String>,

        #[arg(long = "birthday", help = "Birthday (YYYY-MM-DD or M-D-YYYY)")]
        birthday: Option<String>,

        #[arg(
            long = "freq",
            help = "Check-in frequency: 'Twice a Month', Monthly, Quarterly, Semiannually, 'Twice a Year'"
        )]
        frequency: Option<String>,

        #[arg(long = "last", help = "Date of the last check-in (YYYY-MM-DD or M-D-YYYY)")]
        last_check_in: Option<String>,
    },

    /// Show one connection
    Show {
        contact_id: String,

        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Update name, birthday or frequency of a connection
    Edit {
        contact_id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "birthday", help = "Birthday (YYYY-MM-DD or M-D-YYYY)")]
        birthday: Option<String>,

        #[arg(long = "freq", help = "New check-in frequency")]
        frequency: Option<String>,
    },

    /// Delete a connection
    Del {
        contact_id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List all connections
    List {
        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Show the check-in list
    Checkins {
        #[arg(long = "due", help = "Only connections due today or earlier")]
        due: bool,

        #[arg(
            long = "mark",
            value_delimiter = ',',
            help = "Tick rows (1-based, comma separated) and record a check-in for them"
        )]
        mark: Vec<usize>,
    },

    /// Record a check-in and schedule the next one
    Checkin {
        #[arg(required_unless_present = "all_due")]
        contact_ids: Vec<String>,

        #[arg(long = "all-due", help = "Check in with every connection due today")]
        all_due: bool,
    },

    /// Today's check-ins and upcoming birthdays
    Home,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export connections
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "all-users", help = "Export the connections of every user")]
        all_users: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
