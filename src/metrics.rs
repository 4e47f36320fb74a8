//! Aggregate metrics over a parsed statement.

use crate::error::StatementError;
use crate::types::{Money, Statement};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// How many of the largest expenses the snapshot keeps.
pub const TOP_EXPENSE_COUNT: usize = 5;

/// The single largest expense of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxExpense {
    /// Outgoing amount.
    pub amount: Money,
    /// Description of the transaction.
    pub description: String,
}

/// One expense row surfaced by the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    /// Booking date.
    pub date: NaiveDate,
    /// Description of the transaction.
    pub description: String,
    /// Outgoing amount.
    pub amount: Money,
}

/// Read-only aggregate statistics computed once per statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    /// Sum of all incoming amounts.
    pub total_in: Money,
    /// Sum of all outgoing amounts.
    pub total_out: Money,
    /// `total_in - total_out`, exact.
    pub net: Money,
    /// Number of rows with a strictly positive incoming amount.
    pub count_in: usize,
    /// Number of rows with a strictly positive outgoing amount.
    pub count_out: usize,
    /// Largest expense; ties go to the first occurrence in statement order.
    /// `None` when the statement has no outgoing transactions.
    pub max_expense: Option<MaxExpense>,
    /// The largest expenses, ascending by amount, at most
    /// [`TOP_EXPENSE_COUNT`] rows.
    pub top_expenses: Vec<ExpenseRow>,
    /// Earliest booking date over all rows.
    pub date_start: NaiveDate,
    /// Latest booking date over all rows.
    pub date_end: NaiveDate,
    /// Whole days between `date_start` and `date_end`.
    pub date_range_days: i64,
}

impl Metrics {
    /// Computes the snapshot for a non-empty statement.
    ///
    /// An empty statement has no defined date range or averages and is
    /// rejected with [`StatementError::EmptyStatement`]; the parser already
    /// guarantees statements it produces are non-empty.
    pub fn compute(statement: &Statement) -> Result<Self, StatementError> {
        let records = &statement.records;
        let first = records.first().ok_or(StatementError::EmptyStatement)?;

        let mut total_in = Decimal::ZERO;
        let mut total_out = Decimal::ZERO;
        let mut count_in = 0;
        let mut count_out = 0;
        let mut max_expense: Option<MaxExpense> = None;
        let mut date_start = first.date;
        let mut date_end = first.date;

        for record in records {
            total_in += record.amount_in;
            total_out += record.amount_out;
            if record.amount_in > Decimal::ZERO {
                count_in += 1;
            }
            if record.amount_out > Decimal::ZERO {
                count_out += 1;
                // Ties keep the first occurrence in statement order.
                let is_new_max = max_expense
                    .as_ref()
                    .is_none_or(|current| record.amount_out > current.amount);
                if is_new_max {
                    max_expense = Some(MaxExpense {
                        amount: record.amount_out,
                        description: record.description.clone(),
                    });
                }
            }
            date_start = date_start.min(record.date);
            date_end = date_end.max(record.date);
        }

        let mut expenses: Vec<ExpenseRow> = records
            .iter()
            .filter(|r| r.amount_out != Decimal::ZERO)
            .map(|r| ExpenseRow {
                date: r.date,
                description: r.description.clone(),
                amount: r.amount_out,
            })
            .collect();
        // Stable sort, so equal amounts stay in statement order.
        expenses.sort_by(|a, b| a.amount.cmp(&b.amount));
        let cut = expenses.len().saturating_sub(TOP_EXPENSE_COUNT);
        let top_expenses = expenses.split_off(cut);

        Ok(Self {
            total_in,
            total_out,
            net: total_in - total_out,
            count_in,
            count_out,
            max_expense,
            top_expenses,
            date_start,
            date_end,
            date_range_days: (date_end - date_start).num_days(),
        })
    }

    /// Average outgoing transaction size.
    ///
    /// Undefined when the statement has no outgoing transactions; that is
    /// reported as [`StatementError::DivisionUndefined`] rather than as an
    /// arithmetic error.
    pub fn avg_outgoing(&self) -> Result<Money, StatementError> {
        if self.count_out == 0 {
            return Err(StatementError::DivisionUndefined { what: "outgoing" });
        }
        Ok(self.total_out / Decimal::from(self.count_out))
    }

    /// Average incoming transaction size.
    pub fn avg_incoming(&self) -> Result<Money, StatementError> {
        if self.count_in == 0 {
            return Err(StatementError::DivisionUndefined { what: "incoming" });
        }
        Ok(self.total_in / Decimal::from(self.count_in))
    }

    /// Average spend per calendar day, `total_out / (date_range_days + 1)`.
    ///
    /// A zero or negative day span gives no meaningful rate and is reported
    /// as [`StatementError::DegenerateDateRange`] instead of a number.
    pub fn daily_spend_avg(&self) -> Result<Money, StatementError> {
        if self.date_range_days <= 0 {
            return Err(StatementError::DegenerateDateRange {
                days: self.date_range_days,
            });
        }
        Ok(self.total_out / Decimal::from(self.date_range_days + 1))
    }
}
