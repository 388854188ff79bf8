use std::path::{Path, PathBuf};

use crate::cli::open_store;
use crate::csv_bridge::import_csv;
use crate::error::Result;
use crate::store;

pub fn run(data_dir: &Path, file: &str) -> Result<()> {
    let outcome = import_csv(&PathBuf::from(file))?;

    for reason in &outcome.skipped {
        println!("Skipped: {reason}");
    }

    if outcome.records.is_empty() {
        println!("No valid cashflow entries found in the file.");
        return Ok(());
    }

    let mut conn = open_store(data_dir)?;
    let imported = store::append(&mut conn, &outcome.records)?;
    println!("Imported {imported} cashflow entries from {file}.");
    Ok(())
}
