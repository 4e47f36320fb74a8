//! Parsing of semicolon-delimited statement exports into [`Statement`]s.

use crate::error::StatementError;
use crate::raw::RawStatement;
use crate::types::{Record, Statement};
use crate::utils::{parse_date, parse_money_or_zero};

/// Header name of the booking date column.
pub const DATE_COLUMN: &str = "Dato";
/// Header name of the description column.
pub const DESCRIPTION_COLUMN: &str = "Forklaring";
/// Header name of the incoming amount column.
pub const AMOUNT_IN_COLUMN: &str = "Inn på konto";
/// Header name of the outgoing amount column.
pub const AMOUNT_OUT_COLUMN: &str = "Ut fra konto";

/// Parses raw statement text into an ordered, non-empty [`Statement`].
///
/// Columns are located by their Norwegian header names, so column order in
/// the export does not matter. Empty amount cells become zero; row order is
/// preserved and nothing is deduplicated. A statement with a header but no
/// data rows is rejected with [`StatementError::EmptyStatement`].
pub fn parse_statement(raw: &RawStatement) -> Result<Statement, StatementError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(raw.text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| -> Result<usize, StatementError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(StatementError::MissingColumn { column: name })
    };
    let date_idx = column(DATE_COLUMN)?;
    let description_idx = column(DESCRIPTION_COLUMN)?;
    let amount_in_idx = column(AMOUNT_IN_COLUMN)?;
    let amount_out_idx = column(AMOUNT_OUT_COLUMN)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let data_row = idx + 1;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let cell = |col: usize| row.get(col).unwrap_or("").trim();

        records.push(Record {
            date: parse_date(cell(date_idx), data_row)?,
            description: cell(description_idx).to_string(),
            amount_in: parse_money_or_zero(cell(amount_in_idx), AMOUNT_IN_COLUMN, data_row)?,
            amount_out: parse_money_or_zero(cell(amount_out_idx), AMOUNT_OUT_COLUMN, data_row)?,
        });
    }

    if records.is_empty() {
        return Err(StatementError::EmptyStatement);
    }
    Ok(Statement { records })
}
