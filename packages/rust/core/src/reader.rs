//! Delimited data file reader.
//!
//! Data files are `;`-separated with `"` quoting and a header row. Rows are
//! read in file order into [`Record`]s keyed by header name.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use tracing::{debug, instrument};

use vitae_shared::{Record, Result, VitaeError};

/// Field delimiter of every data file.
pub const DELIMITER: u8 = b';';

/// Quote character of every data file.
pub const QUOTE: u8 = b'"';

/// Read every row of a data file.
///
/// Short rows leave their trailing columns absent. Columns past the header
/// width have no name and are dropped.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| VitaeError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, &e))?;
        let line = row.position().map_or(0, csv::Position::line);

        if row.len() > headers.len() {
            debug!(
                line,
                extra = row.len() - headers.len(),
                "dropping unnamed trailing columns"
            );
        }

        let fields: BTreeMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        records.push(Record::new(fields, path, line));
    }

    debug!(rows = records.len(), "data file read");
    Ok(records)
}

fn csv_error(path: &Path, err: &csv::Error) -> VitaeError {
    VitaeError::parse(format!("{}: {err}", path.display()))
}
