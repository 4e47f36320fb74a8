//! Assembly of the final report: metrics plus per-category tables.

use crate::metrics::Metrics;
use crate::types::{CategorizedStatement, Category, Money};
use chrono::NaiveDate;

/// One row of a category table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Booking date.
    pub date: NaiveDate,
    /// Description of the transaction.
    pub description: String,
    /// Signed amount: incoming minus outgoing, so expenses are negative.
    pub amount: Money,
}

/// All rows of one category, statement order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    /// The category the rows belong to.
    pub category: Category,
    /// Matching rows; empty when nothing matched.
    pub rows: Vec<TableRow>,
}

/// Final report over one statement: the metrics snapshot and one table per
/// category. Categories without matching records get an empty table, never a
/// missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Aggregate statistics.
    pub metrics: Metrics,
    /// One table per [`Category::ALL`] entry, in that order.
    pub tables: Vec<CategoryTable>,
}

impl Report {
    /// Groups a categorized statement into per-category tables.
    #[must_use]
    pub fn assemble(metrics: Metrics, statement: &CategorizedStatement) -> Self {
        let tables = Category::ALL
            .iter()
            .map(|&category| CategoryTable {
                category,
                rows: statement
                    .records
                    .iter()
                    .filter(|r| r.category == category)
                    .map(|r| TableRow {
                        date: r.record.date,
                        description: r.record.description.clone(),
                        amount: r.record.amount_in - r.record.amount_out,
                    })
                    .collect(),
            })
            .collect();
        Self { metrics, tables }
    }

    /// Table of a specific category.
    #[must_use]
    pub fn table(&self, category: Category) -> &CategoryTable {
        self.tables
            .iter()
            .find(|t| t.category == category)
            .expect("a table exists for every category")
    }
}
