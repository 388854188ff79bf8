use std::str::FromStr;

use rusqlite::Connection;

use crate::error::{BalanceError, Result};

/// Sentinel bounds for an unbounded range.
pub const MIN_DATE: &str = "0001-01-01";
pub const MAX_DATE: &str = "9999-12-31";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Date,
}

impl GroupBy {
    pub fn column(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Date => "date",
        }
    }
}

impl FromStr for GroupBy {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "date" => Ok(Self::Date),
            other => Err(BalanceError::InvalidGroupBy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub key: String,
    pub total: f64,
}

/// Sum amounts per group key over an inclusive date range, ascending by key.
/// Omitted bounds mean unbounded. The range applies to the record's creation
/// timestamp, not its logical date; CSV export filters on the logical date.
pub fn summarize(
    conn: &Connection,
    start: Option<&str>,
    end: Option<&str>,
    group_by: GroupBy,
) -> Result<Vec<SummaryRow>> {
    let start = start.unwrap_or(MIN_DATE);
    let end = end.unwrap_or(MAX_DATE);
    let col = group_by.column();

    // `col` comes from the GroupBy enum, never from user input.
    let sql = format!(
        "SELECT {col}, SUM(amount) FROM cashflow \
         WHERE DATE(timestamp) BETWEEN ?1 AND ?2 \
         GROUP BY {col} ORDER BY {col} ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows: Vec<SummaryRow> = stmt
        .query_map([start, end], |row| {
            Ok(SummaryRow {
                key: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}
