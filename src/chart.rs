use colored::Colorize;

use crate::fmt::money;
use crate::summary::{GroupBy, SummaryRow};

const BAR_WIDTH: usize = 40;

/// Render summary rows as a horizontal bar chart. Bars scale to the largest
/// absolute total; outflows render red, inflows green.
pub fn render(rows: &[SummaryRow], group_by: GroupBy) -> String {
    if rows.is_empty() {
        return "No data to plot.".to_string();
    }

    let title = match group_by {
        GroupBy::Category => "Spending by Category",
        GroupBy::Date => "Spending Over Time",
    };
    let max_abs = rows
        .iter()
        .map(|r| r.total.abs())
        .fold(0.0f64, f64::max)
        .max(f64::MIN_POSITIVE);
    let label_width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for row in rows {
        let len = ((row.total.abs() / max_abs) * BAR_WIDTH as f64).round() as usize;
        // A nonzero total always gets at least one cell.
        let len = if row.total != 0.0 { len.max(1) } else { 0 };
        let bar = "█".repeat(len);
        let bar = if row.total < 0.0 {
            bar.red().to_string()
        } else {
            bar.green().to_string()
        };
        out.push_str(&format!(
            "{key:<width$}  {bar} {total}\n",
            key = row.key,
            width = label_width,
            total = money(row.total),
        ));
    }
    out
}
