use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for expenselog
/// CLI application to record monthly expenses and receipts
#[derive(Parser)]
#[command(
    name = "expenselog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple expense logging CLI: record monthly expenses, store receipt photos, export tables and receipt bundles",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or custom layouts)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directories
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

    /// Record one expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        date: String,

        /// Expense category (D=Diesel, G=Gasoline, T=Tolls, M=Meals, O=Other)
        #[arg(
            long = "category",
            short = 'c',
            help = "Category code or name: D=diesel, G=gasoline, T=tolls, M=meals, O=other"
        )]
        category: String,

        /// Counterparty or reason for the expense
        #[arg(long = "reason", help = "Counterparty / reason")]
        reason: String,

        /// Origin - destination of the trip
        #[arg(long = "route", help = "Origin - destination", default_value = "")]
        route: String,

        /// Distance travelled in km
        #[arg(long = "km", help = "Distance (km)", default_value_t = 0.0)]
        km: f64,

        /// Total amount
        #[arg(long = "amount", help = "Total amount")]
        amount: f64,

        /// Receipt photo to attach (jpg, jpeg or png)
        #[arg(long = "photo", value_name = "FILE", help = "Receipt photo to attach")]
        photo: Option<String>,
    },

    /// List one month's expenses
    List {
        #[arg(long, short, help = "Month to list (YYYY-MM), defaults to the current month")]
        period: Option<String>,
    },

    /// Export one month's expense table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            short,
            value_name = "PERIOD",
            help = "Month to export (YYYY-MM), defaults to the current month"
        )]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Bundle one month's receipt photos into a zip archive
    Bundle {
        #[arg(
            long,
            value_name = "FILE",
            help = "Output zip path (defaults to receipts_MM_YYYY.zip in the current directory)"
        )]
        file: Option<String>,

        #[arg(
            long,
            short,
            value_name = "PERIOD",
            help = "Month to bundle (YYYY-MM), defaults to the current month"
        )]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
