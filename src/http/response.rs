//! Response body decoding
//!
//! The decoders work on any [`Read`] so they can be fed a live
//! `reqwest::blocking::Response` or an in-memory buffer alike.

use crate::error::Result;
use serde::de::DeserializeOwned;
use std::io::{self, Read, Write};

/// Decode a single JSON value from `reader` into `target`.
///
/// The decoded value replaces `target`; it is not merged field by field.
/// An empty (or whitespace-only) body leaves `target` untouched and is not an error.
/// Anything after the first complete value is ignored.
pub fn decode_json<T, R>(reader: R, target: &mut T) -> Result<()>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut values = serde_json::Deserializer::from_reader(reader).into_iter::<T>();
    match values.next() {
        Some(value) => {
            *target = value?;
            Ok(())
        }
        None => Ok(()),
    }
}

/// Stream comma-separated records from `reader` into `accept_row`, one call per record.
///
/// Stops at the first parser or callback error and returns it. Every record must have
/// the same number of fields as the first one.
pub fn read_csv<R, F>(reader: R, mut accept_row: F) -> Result<()>
where
    R: Read,
    F: FnMut(Vec<String>) -> Result<()>,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    for record in reader.records() {
        let record = record?;
        accept_row(record.iter().map(str::to_string).collect())?;
    }

    Ok(())
}

/// Copy the whole body into `sink`, returning the number of bytes written.
pub fn copy_body<R, W>(mut reader: R, sink: &mut W) -> Result<u64>
where
    R: Read,
    W: Write + ?Sized,
{
    Ok(io::copy(&mut reader, sink)?)
}

/// Collects CSV records in the order they arrive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRows {
    pub rows: Vec<Vec<String>>,
}

impl CsvRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row callback for [`read_csv`] and `Api::get_csv`.
    pub fn add(&mut self, row: Vec<String>) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
