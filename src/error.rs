//! Error kinds for statement parsing, metrics and categorization.

/// Error raised while parsing or analyzing a bank statement.
#[derive(thiserror::Error, Debug)]
pub enum StatementError {
    /// I/O error while reading the source file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Structurally malformed delimited input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The header row is missing a required column.
    #[error("Column '{column}' not found in header")]
    MissingColumn {
        /// Expected column name.
        column: &'static str,
    },
    /// A cell could not be parsed as an amount.
    #[error("Row {row}: invalid amount '{value}' in column '{column}'")]
    Number {
        /// The offending cell contents.
        value: String,
        /// Column the cell belongs to.
        column: &'static str,
        /// 1-based data row number.
        row: usize,
    },
    /// A cell could not be parsed as a `dd.mm.yyyy` date.
    #[error("Row {row}: invalid date '{value}'")]
    Date {
        /// The offending cell contents.
        value: String,
        /// 1-based data row number.
        row: usize,
    },
    /// The statement contains no transaction rows.
    #[error("Statement contains no transactions")]
    EmptyStatement,
    /// An average was requested over zero matching transactions.
    #[error("No {what} transactions, average is undefined")]
    DivisionUndefined {
        /// Which transaction group the average was over.
        what: &'static str,
    },
    /// The statement covers too short a date span for a per-day average.
    #[error("Date span of {days} days is too short for a per-day average")]
    DegenerateDateRange {
        /// Whole days between first and last transaction.
        days: i64,
    },
    /// The classification service returned the wrong number of labels.
    #[error("Classifier returned {got} labels for {expected} descriptions")]
    ClassificationMismatch {
        /// Number of descriptions sent.
        expected: usize,
        /// Number of labels received.
        got: usize,
    },
    /// The classification service call failed or returned garbage.
    #[error("Classification service error: {0}")]
    ClassificationService(String),
}
