use std::path::Path;

use comfy_table::{Cell, Table};

use crate::cli::open_store;
use crate::error::Result;
use crate::fmt::money;
use crate::store;

pub fn run(data_dir: &Path) -> Result<()> {
    let conn = open_store(data_dir)?;
    let records = store::list_all(&conn)?;

    if records.is_empty() {
        println!("No cashflow entries recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Category", "Description", "Amount", "Recorded"]);
    for r in &records {
        table.add_row(vec![
            Cell::new(r.id),
            Cell::new(&r.date),
            Cell::new(&r.category),
            Cell::new(&r.description),
            Cell::new(money(r.amount)),
            Cell::new(&r.timestamp),
        ]);
    }
    println!("Cashflow ({} entries)\n{table}", records.len());
    Ok(())
}
