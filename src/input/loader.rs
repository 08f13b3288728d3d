use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::args::PositiveUsize;
use crate::error::InputError;

use super::TestCase;

const QUERY_FIELD: usize = 0;
const CONCURRENCY_FIELD: usize = 1;
const EXPECTED_FIELDS: usize = 2;

/// Reads every row of a headerless `query,concurrency` CSV file.
///
/// The load is all-or-nothing: the first bad row fails the whole call.
///
/// # Errors
///
/// Returns `InputError` when the file cannot be opened, a record cannot be
/// read, a row does not have exactly two fields, or a concurrency value is
/// not a positive integer.
pub fn load_test_cases(path: &Path) -> Result<Vec<TestCase>, InputError> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|err| InputError::Open {
            path: path.to_path_buf(),
            source: err,
        })?;
    let cases = collect_rows(reader)?;
    tracing::debug!("Loaded {} test cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Parses test cases from any reader, with the same rules as
/// [`load_test_cases`].
///
/// # Errors
///
/// Returns `InputError` for the first malformed row.
pub fn parse_test_cases<R: Read>(input: R) -> Result<Vec<TestCase>, InputError> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<TestCase>, InputError> {
    let mut cases = Vec::new();
    for (id, result) in reader.records().enumerate() {
        let row = id.saturating_add(1);
        let record = result.map_err(|err| InputError::Record { row, source: err })?;
        cases.push(parse_row(id, row, &record)?);
    }
    Ok(cases)
}

fn parse_row(id: usize, row: usize, record: &StringRecord) -> Result<TestCase, InputError> {
    if record.len() != EXPECTED_FIELDS {
        return Err(InputError::FieldCount {
            row,
            found: record.len(),
        });
    }
    let (Some(query), Some(raw_concurrency)) =
        (record.get(QUERY_FIELD), record.get(CONCURRENCY_FIELD))
    else {
        return Err(InputError::FieldCount {
            row,
            found: record.len(),
        });
    };
    let concurrency = raw_concurrency
        .trim()
        .parse::<PositiveUsize>()
        .map_err(|err| InputError::InvalidConcurrency {
            row,
            value: raw_concurrency.to_owned(),
            source: err,
        })?;
    Ok(TestCase::new(id, query.to_owned(), concurrency))
}
