use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for carbonlog
#[derive(Parser)]
#[command(
    name = "carbonlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Estimate your monthly carbon footprint and keep a history of your calculations",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// User the calculations belong to (overrides CARBONLOG_USER and the config)
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
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "migrate",
            help = "Add missing fields to the configuration file with their defaults"
        )]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

    /// Estimate a monthly carbon footprint and save it to your history
    Calc {
        /// Electricity usage (kWh)
        #[arg(long, short = 'e', value_name = "KWH", allow_hyphen_values = true)]
        electricity: Option<String>,

        /// Fuel consumption (liters)
        #[arg(long, short = 'f', value_name = "LITERS", allow_hyphen_values = true)]
        fuel: Option<String>,

        /// Travel distance (km)
        #[arg(long, short = 't', value_name = "KM", allow_hyphen_values = true)]
        travel: Option<String>,

        /// Waste produced (kg)
        #[arg(long, short = 'w', value_name = "KG", allow_hyphen_values = true)]
        waste: Option<String>,

        #[arg(long = "no-save", help = "Only show the result, do not store it")]
        no_save: bool,
    },

    /// Show your most recent calculations
    List,

    /// Delete a calculation from your history
    Del {
        /// Calculation id (as shown by `list`)
        #[arg(required_unless_present = "pos", conflicts_with = "pos")]
        id: Option<String>,

        #[arg(long = "pos", help = "Position in the list shown by `list` (1 = newest)")]
        pos: Option<usize>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export your most recent calculations
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
