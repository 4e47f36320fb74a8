//! Number and date parsing helpers.

use crate::error::StatementError;
use crate::types::Money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Normalizes an amount string: strips grouping spaces and a leading plus,
/// and converts Norwegian decimal commas (`1 234,56`) to dot notation.
fn normalize_number(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|ch| !matches!(*ch, ' ' | '\u{a0}' | '\u{202f}' | '+'))
        .collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.contains(',') {
        // Comma is the decimal separator, dots are thousands grouping.
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    }
}

/// Parses an amount cell, treating an empty cell as zero.
///
/// Amounts are non-negative by contract; a negative value is reported as a
/// malformed cell rather than silently flipping the direction of the row.
pub fn parse_money_or_zero(
    value: &str,
    column: &'static str,
    row: usize,
) -> Result<Money, StatementError> {
    let normalized = normalize_number(value);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let amount = Decimal::from_str(&normalized).map_err(|_| StatementError::Number {
        value: value.trim().to_string(),
        column,
        row,
    })?;
    if amount < Decimal::ZERO {
        return Err(StatementError::Number {
            value: value.trim().to_string(),
            column,
            row,
        });
    }
    Ok(amount)
}

/// Parses a `dd.mm.yyyy` date cell.
pub fn parse_date(value: &str, row: usize) -> Result<NaiveDate, StatementError> {
    NaiveDate::parse_from_str(value.trim(), "%d.%m.%Y").map_err(|_| StatementError::Date {
        value: value.trim().to_string(),
        row,
    })
}
