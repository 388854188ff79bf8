pub mod add;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod status;
pub mod summary;

use std::path::Path;

use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::summary::GroupBy;

pub const DB_FILE: &str = "balance.db";

/// Open the database under the given data dir, creating dir and schema as
/// needed. Schema init is idempotent, so every command goes through here.
pub(crate) fn open_store(data_dir: &Path) -> Result<Connection> {
    std::fs::create_dir_all(data_dir)?;
    let conn = get_connection(&data_dir.join(DB_FILE))?;
    init_db(&conn)?;
    Ok(conn)
}

#[derive(Parser)]
#[command(name = "balance", about = "Personal cashflow ledger CLI.")]
pub struct Cli {
    /// Data directory (default: from settings, see `balance init`)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up balance: choose a data directory and initialize the database.
    Init,
    /// Record a cashflow entry. Prompts for a missing amount or category.
    Add {
        /// Signed amount: negative for expenses, positive for income
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// Category label, e.g. food
        #[arg(long)]
        category: Option<String>,
        /// Optional free-text description (default: empty)
        #[arg(long)]
        description: Option<String>,
        /// Logical transaction date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show every stored record.
    List,
    /// Grouped totals over a date range, as a table or chart.
    Summary {
        /// Start date: YYYY-MM-DD (default: unbounded)
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD (default: unbounded)
        #[arg(long = "to")]
        to_date: Option<String>,
        /// Group by 'category' or 'date'
        #[arg(long = "group-by", default_value = "category")]
        group_by: GroupBy,
        /// Render a bar chart instead of a table
        #[arg(long)]
        chart: bool,
    },
    /// Import cashflow entries from a CSV file (date,amount,category,description).
    Import {
        /// Path to the CSV file
        file: String,
    },
    /// Export cashflow entries in a date range to a CSV file.
    Export {
        /// Start date: YYYY-MM-DD (default: unbounded)
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD (default: unbounded)
        #[arg(long = "to")]
        to_date: Option<String>,
        /// Output path (default: <data_dir>/exports/cashflow-YYYY-MM-DD.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the current database and summary statistics.
    Status,
}
