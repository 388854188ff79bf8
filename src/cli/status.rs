use std::path::Path;

use crate::cli::{open_store, DB_FILE};
use crate::error::Result;

pub fn run(data_dir: &Path) -> Result<()> {
    let db_path = data_dir.join(DB_FILE);

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `balance init` to set up.");
        return Ok(());
    }

    let conn = open_store(data_dir)?;
    let records: i64 = conn.query_row("SELECT count(*) FROM cashflow", [], |r| r.get(0))?;
    let categories: i64 = conn.query_row(
        "SELECT count(DISTINCT category) FROM cashflow",
        [],
        |r| r.get(0),
    )?;
    let span: (Option<String>, Option<String>) = conn.query_row(
        "SELECT min(date), max(date) FROM cashflow",
        [],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )?;

    println!();
    println!("Records:     {records}");
    println!("Categories:  {categories}");
    if let (Some(first), Some(last)) = span {
        println!("Date span:   {first} .. {last}");
    }
    Ok(())
}
