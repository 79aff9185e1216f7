mod csv_import;
mod detect;
mod sample;

pub(crate) use csv_import::{CsvImporter, CsvProfile};
pub(crate) use detect::detect_columns;
pub(crate) use sample::sample_transactions;
