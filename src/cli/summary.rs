use std::path::Path;

use comfy_table::{Cell, Table};

use crate::chart;
use crate::cli::open_store;
use crate::csv_bridge::validate_date;
use crate::error::Result;
use crate::fmt::money;
use crate::summary::{summarize, GroupBy};

pub fn run(
    data_dir: &Path,
    from_date: Option<String>,
    to_date: Option<String>,
    group_by: GroupBy,
    chart: bool,
) -> Result<()> {
    let from = from_date.map(|d| validate_date(&d)).transpose()?;
    let to = to_date.map(|d| validate_date(&d)).transpose()?;

    let conn = open_store(data_dir)?;
    let rows = summarize(&conn, from.as_deref(), to.as_deref(), group_by)?;

    if rows.is_empty() {
        println!("No records in range.");
        return Ok(());
    }

    if chart {
        print!("{}", chart::render(&rows, group_by));
        return Ok(());
    }

    let header = match group_by {
        GroupBy::Category => "Category",
        GroupBy::Date => "Date",
    };
    let mut table = Table::new();
    table.set_header(vec![header, "Total"]);
    for row in &rows {
        table.add_row(vec![Cell::new(&row.key), Cell::new(money(row.total))]);
    }
    let net: f64 = rows.iter().map(|r| r.total).sum();
    table.add_row(vec![Cell::new("Net"), Cell::new(money(net))]);
    println!("Summary by {}\n{table}", group_by.column());
    Ok(())
}
