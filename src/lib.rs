#![warn(missing_docs)]
//! Parsing, analysis and categorization of semicolon-delimited Norwegian
//! bank-statement exports.

mod classifier;
mod error;
mod metrics;
mod parser;
mod raw;
mod report;
mod rules;
mod types;
mod utils;

pub use crate::classifier::{ClassifierConfig, HttpClassifier};
pub use crate::error::StatementError;
pub use crate::metrics::{ExpenseRow, MaxExpense, Metrics, TOP_EXPENSE_COUNT};
pub use crate::parser::{
    AMOUNT_IN_COLUMN, AMOUNT_OUT_COLUMN, DATE_COLUMN, DESCRIPTION_COLUMN, parse_statement,
};
pub use crate::raw::RawStatement;
pub use crate::report::{CategoryTable, Report, TableRow};
pub use crate::rules::{
    CategoryRule, Categorizer, DEFAULT_RULES, DelegatedCategorizer, RuleBasedCategorizer,
    TextClassifier, match_rules,
};
pub use crate::types::*;
