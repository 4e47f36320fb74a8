//! Domain types: records, statements and the category taxonomy.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Monetary value, `Decimal` for exact arithmetic.
pub type Money = Decimal;

/// One transaction row from a statement export.
///
/// `amount_in` and `amount_out` are both non-negative; a missing cell is
/// normalized to zero during parsing. Rows where both are non-zero are kept
/// as-is and counted in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Booking date.
    pub date: NaiveDate,
    /// Free-text description ("Forklaring").
    pub description: String,
    /// Amount credited to the account.
    pub amount_in: Money,
    /// Amount debited from the account.
    pub amount_out: Money,
}

/// Full parsed statement, rows in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statement {
    /// Transaction rows, insertion order preserved.
    pub records: Vec<Record>,
}

/// Spending/income category assigned to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Groceries ("mat_dagligvare").
    Groceries,
    /// Housing ("bolig").
    Housing,
    /// Transport.
    Transport,
    /// Health and wellness ("helse_velvære").
    Health,
    /// Shopping and leisure ("shopping_fritid").
    Leisure,
    /// Subscriptions ("abonnementer").
    Subscriptions,
    /// Children and family ("barn_familie").
    Family,
    /// Gifts and social ("gaver_sosialt").
    Gifts,
    /// Finance and investments ("finans").
    Finance,
    /// Salary income ("inntekt_lønn").
    Wage,
    /// Incoming transfer ("inntekt_overføring").
    Transfer,
    /// Anything unmatched ("annet").
    Other,
    /// Label from a classifier that is not part of the taxonomy.
    Unknown,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Self; 13] = [
        Self::Groceries,
        Self::Housing,
        Self::Transport,
        Self::Health,
        Self::Leisure,
        Self::Subscriptions,
        Self::Family,
        Self::Gifts,
        Self::Finance,
        Self::Wage,
        Self::Transfer,
        Self::Other,
        Self::Unknown,
    ];

    /// Labels offered to a delegated classifier for expense rows.
    pub const EXPENSE_LABELS: [&'static str; 10] = [
        "mat_dagligvare",
        "bolig",
        "transport",
        "helse_velvære",
        "shopping_fritid",
        "abonnementer",
        "barn_familie",
        "gaver_sosialt",
        "finans",
        "annet",
    ];

    /// Wire label of the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Groceries => "mat_dagligvare",
            Self::Housing => "bolig",
            Self::Transport => "transport",
            Self::Health => "helse_velvære",
            Self::Leisure => "shopping_fritid",
            Self::Subscriptions => "abonnementer",
            Self::Family => "barn_familie",
            Self::Gifts => "gaver_sosialt",
            Self::Finance => "finans",
            Self::Wage => "inntekt_lønn",
            Self::Transfer => "inntekt_overføring",
            Self::Other => "annet",
            Self::Unknown => "ukjent",
        }
    }

    /// Maps a wire label back to a category.
    ///
    /// Labels outside the taxonomy map to [`Category::Unknown`] instead of
    /// being carried around as loose strings.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "mat_dagligvare" => Self::Groceries,
            "bolig" => Self::Housing,
            "transport" => Self::Transport,
            "helse_velvære" => Self::Health,
            "shopping_fritid" => Self::Leisure,
            "abonnementer" => Self::Subscriptions,
            "barn_familie" => Self::Family,
            "gaver_sosialt" => Self::Gifts,
            "finans" => Self::Finance,
            "inntekt_lønn" => Self::Wage,
            "inntekt_overføring" => Self::Transfer,
            "annet" => Self::Other,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record together with its assigned category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedRecord {
    /// The underlying transaction.
    pub record: Record,
    /// Category assigned by a [`crate::Categorizer`].
    pub category: Category,
}

/// Fully categorized statement, built as a new value by the categorizer.
///
/// Every record carries exactly one category; there is no partially
/// categorized intermediate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedStatement {
    /// Categorized rows, statement order preserved.
    pub records: Vec<CategorizedRecord>,
}
