use std::io::Write;
use std::path::Path;

use crate::cli::open_store;
use crate::csv_bridge::{parse_amount, validate_date};
use crate::error::{BalanceError, Result};
use crate::fmt::money;
use crate::models::NewRecord;
use crate::store;

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut input = String::new();
    let bytes = std::io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(BalanceError::Other("unexpected end of input".to_string()));
    }
    Ok(input.trim().to_string())
}

/// Re-prompt until the input parses. Explicit loop, terminated by EOF.
fn prompt_amount() -> Result<f64> {
    loop {
        let raw = prompt_line("Enter amount: ")?;
        match parse_amount(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{e}. Please enter a number."),
        }
    }
}

fn prompt_category() -> Result<String> {
    loop {
        let raw = prompt_line("Enter category (e.g. food): ")?;
        if raw.is_empty() {
            println!("Category cannot be empty.");
            continue;
        }
        // Interactive entry normalizes categories to lowercase.
        return Ok(raw.to_lowercase());
    }
}

pub fn run(
    data_dir: &Path,
    amount: Option<f64>,
    category: Option<String>,
    description: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let date = date.map(|d| validate_date(&d)).transpose()?;

    let interactive = amount.is_none() || category.is_none();
    let amount = match amount {
        Some(value) => value,
        None => prompt_amount()?,
    };
    let category = match category {
        Some(value) => value,
        None => prompt_category()?,
    };
    let description = match description {
        Some(value) => value,
        None if interactive => prompt_line("Optional description: ")?,
        None => String::new(),
    };

    let mut conn = open_store(data_dir)?;
    store::append(
        &mut conn,
        &[NewRecord {
            amount,
            category: category.clone(),
            description,
            date: date.clone(),
            timestamp: None,
        }],
    )?;

    let shown_date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    println!("Recorded {} {} on {shown_date}", category, money(amount));
    Ok(())
}
