// src/services/decoder.rs

//! CSV feed decoding.
//!
//! Decoding sits behind a narrow trait so renders and cache tests can run
//! against canned record sets without a real parser.

use csv::ReaderBuilder;

use crate::error::Result;
use crate::models::Record;

/// Decodes a feed body into an ordered sequence of records.
pub trait RecordDecoder: Send + Sync {
    fn decode(&self, text: &str) -> Result<Vec<Record>>;
}

/// `csv`-backed decoder. The first row is the header; blank rows are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDecoder;

impl RecordDecoder for CsvDecoder {
    fn decode(&self, text: &str) -> Result<Vec<Record>> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();

        for row in reader.records() {
            let row = row?;
            // Rows shorter than the header read as empty for the missing tail;
            // extra trailing values are ignored.
            let record: Record = headers
                .iter()
                .enumerate()
                .map(|(i, name)| (name.to_string(), row.get(i).unwrap_or("").to_string()))
                .collect();
            records.push(record);
        }

        Ok(records)
    }
}
