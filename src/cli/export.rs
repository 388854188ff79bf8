use std::path::{Path, PathBuf};

use crate::cli::open_store;
use crate::csv_bridge::{export_csv, validate_date};
use crate::error::Result;
use crate::summary::{MAX_DATE, MIN_DATE};

fn default_path(data_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    data_dir.join("exports").join(format!("cashflow-{date}.csv"))
}

pub fn run(
    data_dir: &Path,
    from_date: Option<String>,
    to_date: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let from = from_date.map(|d| validate_date(&d)).transpose()?;
    let to = to_date.map(|d| validate_date(&d)).transpose()?;

    let conn = open_store(data_dir)?;
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path(data_dir));
    let count = export_csv(
        &conn,
        from.as_deref().unwrap_or(MIN_DATE),
        to.as_deref().unwrap_or(MAX_DATE),
        &path,
    )?;
    println!("Exported {count} records to {}", path.display());
    Ok(())
}
