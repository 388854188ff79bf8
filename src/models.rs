/// A cashflow entry as stored: every field filled in by the store.
#[derive(Debug, Clone)]
pub struct CashflowRecord {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub description: String,
    /// Logical transaction date, YYYY-MM-DD.
    pub date: String,
    /// Creation time, ISO 8601. Distinct from `date`.
    pub timestamp: String,
}

/// A cashflow entry as captured from the CLI or a CSV row, before the
/// store fills in server-side fields.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub amount: f64,
    pub category: String,
    pub description: String,
    /// Defaults to the current date at append time when absent.
    pub date: Option<String>,
    /// Defaults to the current time at append time when absent. The CSV
    /// bridge supplies midnight of the row's date here.
    pub timestamp: Option<String>,
}
