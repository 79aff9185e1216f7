use anyhow::{Context, Result};

use super::CsvImporter;
use crate::models::Transaction;

/// Built-in demo feed shown when no file is given.
pub(crate) const SAMPLE_CSV: &str = "\
date,category,amount
2024-01-01,Food,50
2024-01-02,Rent,1000
2024-01-03,Travel,200
2024-01-04,Utilities,150
2024-01-05,Food,60
2024-01-06,Other,300
2024-01-07,Travel,400
2024-01-08,Food,45
2024-02-01,Rent,1000
2024-02-02,Utilities,120
";

pub(crate) fn sample_transactions() -> Result<Vec<Transaction>> {
    CsvImporter::from_text(SAMPLE_CSV).context("Built-in sample data is malformed")
}
