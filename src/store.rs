use rusqlite::Connection;

use crate::error::Result;
use crate::models::{CashflowRecord, NewRecord};

/// Insert one or more records as a single transaction. Fills in the
/// creation timestamp and, where absent, the logical date. Returns the
/// number of records written; on failure nothing is written.
pub fn append(conn: &mut Connection, records: &[NewRecord]) -> Result<usize> {
    let now = chrono::Local::now();
    let today = now.format("%Y-%m-%d").to_string();
    let now_iso = now.format("%Y-%m-%dT%H:%M:%S").to_string();

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO cashflow (amount, category, description, date, timestamp) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for record in records {
            let date = record.date.as_deref().unwrap_or(&today);
            let timestamp = record.timestamp.as_deref().unwrap_or(&now_iso);
            stmt.execute(rusqlite::params![
                record.amount,
                record.category,
                record.description,
                date,
                timestamp,
            ])?;
        }
    }
    tx.commit()?;
    Ok(records.len())
}

/// All stored records. No ordering guarantee.
pub fn list_all(conn: &Connection) -> Result<Vec<CashflowRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, amount, category, description, date, timestamp FROM cashflow",
    )?;
    let rows: Vec<CashflowRecord> = stmt
        .query_map([], |row| {
            Ok(CashflowRecord {
                id: row.get(0)?,
                amount: row.get(1)?,
                category: row.get(2)?,
                description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                date: row.get(4)?,
                timestamp: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}
