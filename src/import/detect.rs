use super::CsvProfile;

/// Map header names to columns. Returns `None` when any of the three
/// required columns is missing, so callers fall back to positional layout.
pub(crate) fn detect_columns(headers: &[String]) -> Option<CsvProfile> {
    let h: Vec<String> = headers
        .iter()
        .map(|s| s.to_lowercase().trim().to_string())
        .collect();

    let date_column = col_index(&h, &["date", "posted date", "transaction date"])?;
    let category_column = col_index(&h, &["category", "type"])?;
    let amount_column = col_index(&h, &["amount", "value", "debit"])?;

    Some(CsvProfile {
        date_column,
        category_column,
        amount_column,
    })
}

fn col_index(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| names.contains(&h.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_standard_order() {
        let p = detect_columns(&headers(&["Date", "Category", "Amount"]));
        assert_eq!(p, Some(CsvProfile::default()));
    }

    #[test]
    fn test_detect_shuffled_order() {
        let p = detect_columns(&headers(&["Amount", " date ", "Category", "Memo"])).unwrap_or_default();
        assert_eq!(p.amount_column, 0);
        assert_eq!(p.date_column, 1);
        assert_eq!(p.category_column, 2);
    }

    #[test]
    fn test_detect_missing_column() {
        assert_eq!(detect_columns(&headers(&["Date", "Amount"])), None);
    }

    #[test]
    fn test_detect_no_headers() {
        assert_eq!(detect_columns(&[]), None);
    }
}
