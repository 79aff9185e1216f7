use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::input::parse_decimal;
use crate::models::{Category, Transaction};

/// Column layout of a `date,category,amount` style CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CsvProfile {
    pub(crate) date_column: usize,
    pub(crate) category_column: usize,
    pub(crate) amount_column: usize,
}

impl Default for CsvProfile {
    fn default() -> Self {
        Self {
            date_column: 0,
            category_column: 1,
            amount_column: 2,
        }
    }
}

pub(crate) struct CsvImporter;

impl CsvImporter {
    /// Read a CSV file from disk into transactions.
    pub(crate) fn from_path(path: &Path) -> Result<Vec<Transaction>> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        Self::from_reader(file)
    }

    /// Parse an in-memory CSV blob into transactions.
    pub(crate) fn from_text(text: &str) -> Result<Vec<Transaction>> {
        Self::from_reader(text.as_bytes())
    }

    fn from_reader<R: Read>(reader: R) -> Result<Vec<Transaction>> {
        let (headers, rows) = Self::read_rows(reader)?;
        let profile = crate::import::detect_columns(&headers).unwrap_or_default();
        Self::parse(&rows, &profile)
    }

    /// Return headers (empty when the first row is data) and the data rows.
    pub(crate) fn read_rows<R: Read>(reader: R) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut all_rows: Vec<Vec<String>> = Vec::new();
        for result in rdr.records() {
            let record = result.context("Failed to read CSV record")?;
            all_rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        let Some(first_row) = all_rows.first() else {
            return Ok((Vec::new(), Vec::new()));
        };

        // A header row has no field that reads as a number or a date
        let looks_like_header = first_row.iter().all(|field| {
            let trimmed = field.trim();
            Decimal::from_str(trimmed.replace(['$', ','], "").trim()).is_err()
                && NaiveDate::parse_from_str(trimmed, "%m/%d/%Y").is_err()
                && NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err()
        });

        if looks_like_header {
            let headers = all_rows.remove(0);
            Ok((headers, all_rows))
        } else {
            Ok((Vec::new(), all_rows))
        }
    }

    /// Turn raw rows into transactions using the given column layout.
    ///
    /// Rows without a date are skipped. Unknown categories land in `Other`.
    pub(crate) fn parse(rows: &[Vec<String>], profile: &CsvProfile) -> Result<Vec<Transaction>> {
        let mut transactions = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            let date_str = row
                .get(profile.date_column)
                .map(|s| s.trim())
                .unwrap_or_default();

            if date_str.is_empty() {
                continue;
            }

            let category_str = row
                .get(profile.category_column)
                .map(|s| s.trim())
                .unwrap_or_default();
            let category = Category::parse(category_str).unwrap_or_else(|| {
                tracing::debug!(row = i + 1, label = category_str, "unknown category, using Other");
                Category::Other
            });

            let raw_amount = row
                .get(profile.amount_column)
                .map(|s| s.trim())
                .unwrap_or_default();
            let amount = parse_decimal(raw_amount)
                .with_context(|| format!("Row {}: failed to parse amount '{raw_amount}'", i + 1))?
                .abs();

            transactions.push(Transaction::new(normalize_date(date_str), category, amount));
        }

        Ok(transactions)
    }
}

/// Rewrite recognised date formats as "YYYY-MM-DD"; anything else is kept
/// as-is since dates are only labels.
fn normalize_date(s: &str) -> String {
    for fmt in &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.format("%Y-%m-%d").to_string();
        }
    }
    s.to_string()
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
