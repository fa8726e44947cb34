use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rideledger
/// CLI application to track a driver's daily earnings with SQLite
#[derive(Parser)]
#[command(
    name = "rideledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track rideshare revenue, fuel and costs: net profit, km/L and weekly goals",
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
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add today's earnings record
    Add {
        /// Revenue of the day
        #[arg(long = "revenue", short = 'r', help = "Revenue (e.g. 250 or 250,50)")]
        revenue: String,

        /// Money spent on fuel
        #[arg(long = "fuel", short = 'f', default_value = "", help = "Fuel expense")]
        fuel: String,

        /// Fuel type: gasoline, ethanol, cng
        #[arg(long = "fuel-type", short = 't', help = "Fuel type: gasoline, ethanol or cng")]
        fuel_type: Option<String>,

        /// Kilometers driven
        #[arg(long = "km", short = 'k', default_value = "", help = "Kilometers driven")]
        kilometers: String,

        /// Other variable costs (tolls, food, washing, ...)
        #[arg(long = "costs", short = 'c', default_value = "", help = "Variable costs")]
        variable_costs: String,

        /// Back-fill a past day (YYYY-MM-DD)
        #[arg(long = "date", help = "Record date (YYYY-MM-DD), default now")]
        date: Option<String>,
    },

    /// Edit an existing record (unspecified fields keep their value)
    Edit {
        /// Record id or unique prefix (as shown by `list`)
        id: String,

        #[arg(long = "revenue", short = 'r')]
        revenue: Option<String>,

        #[arg(long = "fuel", short = 'f')]
        fuel: Option<String>,

        #[arg(long = "fuel-type", short = 't')]
        fuel_type: Option<String>,

        #[arg(long = "km", short = 'k')]
        kilometers: Option<String>,

        #[arg(long = "costs", short = 'c')]
        variable_costs: Option<String>,
    },

    /// Delete a record by id
    Del {
        /// Record id or unique prefix
        id: String,

        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List records of a period with totals
    List {
        /// Period: day, week, month or all
        #[arg(long, short, default_value = "day", help = "Period: day, week, month or all")]
        period: String,
    },

    /// Dashboard: today's summary and latest records
    Today,

    /// Weekly goal progress and suggested daily target
    Goal,

    /// Daily and weekly evolution tables
    Charts,

    /// Show or change weekly goal and day off
    Settings {
        #[arg(long = "goal", help = "Weekly net profit goal")]
        goal: Option<String>,

        #[arg(
            long = "day-off",
            value_parser = clap::value_parser!(u8).range(0..=6),
            help = "Day off: 0=Sunday ... 6=Saturday"
        )]
        day_off: Option<u8>,

        #[arg(long = "print", help = "Print current settings")]
        print: bool,
    },

    /// Export records in various formats
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day  (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format, or `all`.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long)]
        force: bool,
    },
}
