//! Category assignment: keyword rules and the delegated-classification
//! strategy.

use crate::error::StatementError;
use crate::types::{CategorizedRecord, CategorizedStatement, Category, Record, Statement};
use rust_decimal::Decimal;

/// One keyword rule: any keyword hitting the lowercased description assigns
/// the category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Category assigned on a match.
    pub category: Category,
    /// Lowercase substrings to look for.
    pub keywords: &'static [&'static str],
}

/// Built-in rules, evaluated in order; first match wins.
///
/// Matching is case-insensitive substring search, so a short keyword can hit
/// inside an unrelated word ("spar" also matches e.g. "sparebank"). Known
/// precision limitation.
pub const DEFAULT_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Groceries,
        keywords: &[
            "kiwi",
            "rema 1000",
            "bunnpris",
            "coop extra",
            "coop obs",
            "coop prix",
            "joker",
            "coop marked",
            "coop mega",
            "gigaboks",
            "meny",
            "matkroken",
            "spar",
            "e-varekjøp",
        ],
    },
    CategoryRule {
        category: Category::Wage,
        keywords: &["lønn", "lonn"],
    },
    CategoryRule {
        category: Category::Transport,
        keywords: &[
            "skyss",
            "kolumbus",
            "taxi",
            "uber",
            "sas airline",
            "nor-way",
            "bergen trafikk",
            "statens vegvesen",
            "bussekspress",
        ],
    },
    CategoryRule {
        category: Category::Finance,
        keywords: &["skilling", "nordnet", "krypto", "binance"],
    },
    CategoryRule {
        category: Category::Transfer,
        keywords: &["overføring", "overforing", "øverforing"],
    },
];

/// Rules applied to income rows by the delegated strategy; salary and
/// transfers are trivial to spot locally, so they are never sent to the
/// classifier.
const INCOME_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Wage,
        keywords: &["lønn", "lonn"],
    },
    CategoryRule {
        category: Category::Transfer,
        keywords: &["overføring", "overforing", "øverforing"],
    },
];

/// Evaluates rules in order against a description.
///
/// An empty description matches nothing and falls through to
/// [`Category::Other`].
#[must_use]
pub fn match_rules(rules: &[CategoryRule], description: &str) -> Category {
    let lower = description.to_lowercase();
    for rule in rules {
        if rule.keywords.iter().any(|kw| lower.contains(kw)) {
            return rule.category;
        }
    }
    Category::Other
}

/// Batched external text classification.
///
/// Input is an ordered list of descriptions; output must be one label per
/// description, in the same order, drawn from
/// [`Category::EXPENSE_LABELS`].
pub trait TextClassifier {
    /// Classifies every description in one call.
    fn classify(&self, descriptions: &[&str]) -> Result<Vec<String>, StatementError>;
}

/// Strategy that turns a [`Statement`] into a [`CategorizedStatement`].
///
/// Implementations assign exactly one category to every record and are
/// idempotent: the same statement and configuration always produce the same
/// assignments.
pub trait Categorizer {
    /// Builds a new, fully categorized statement.
    fn categorize(&self, statement: &Statement) -> Result<CategorizedStatement, StatementError>;
}

/// Categorizer that only uses local keyword rules.
#[derive(Debug, Clone)]
pub struct RuleBasedCategorizer {
    rules: Vec<CategoryRule>,
}

impl RuleBasedCategorizer {
    /// Categorizer with the built-in rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }

    /// Categorizer with a custom, ordered rule set.
    #[must_use]
    pub const fn with_rules(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }
}

impl Default for RuleBasedCategorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Categorizer for RuleBasedCategorizer {
    fn categorize(&self, statement: &Statement) -> Result<CategorizedStatement, StatementError> {
        let records = statement
            .records
            .iter()
            .map(|record| CategorizedRecord {
                record: record.clone(),
                category: match_rules(&self.rules, &record.description),
            })
            .collect();
        Ok(CategorizedStatement { records })
    }
}

/// Categorizer that delegates expense rows to an external classifier.
///
/// All expense descriptions go out in a single batched call; income and
/// zero-amount rows are always matched locally with the income rules. If the
/// classification service fails, expenses fall back to the local rule set so
/// the statement still comes back fully categorized, just with coarser
/// labels.
#[derive(Debug, Clone)]
pub struct DelegatedCategorizer<C: TextClassifier> {
    classifier: C,
    fallback: RuleBasedCategorizer,
}

impl<C: TextClassifier> DelegatedCategorizer<C> {
    /// Wraps a classifier, falling back to the built-in rules on service
    /// failure.
    #[must_use]
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            fallback: RuleBasedCategorizer::new(),
        }
    }

    /// The wrapped classifier.
    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    fn is_expense(record: &Record) -> bool {
        record.amount_out > Decimal::ZERO
    }
}

impl<C: TextClassifier> Categorizer for DelegatedCategorizer<C> {
    fn categorize(&self, statement: &Statement) -> Result<CategorizedStatement, StatementError> {
        let descriptions: Vec<&str> = statement
            .records
            .iter()
            .filter(|r| Self::is_expense(r))
            .map(|r| r.description.as_str())
            .collect();

        let labels = match self.classifier.classify(&descriptions) {
            Ok(labels) => {
                if labels.len() != descriptions.len() {
                    // Order can no longer be trusted, drop the whole batch.
                    return Err(StatementError::ClassificationMismatch {
                        expected: descriptions.len(),
                        got: labels.len(),
                    });
                }
                Some(labels)
            }
            Err(StatementError::ClassificationService(_)) => None,
            Err(err) => return Err(err),
        };

        let mut expense_labels = labels.as_deref().map(<[String]>::iter);
        let records = statement
            .records
            .iter()
            .map(|record| {
                let category = if Self::is_expense(record) {
                    match expense_labels.as_mut().and_then(Iterator::next) {
                        Some(label) => Category::from_label(label),
                        None => match_rules(&self.fallback.rules, &record.description),
                    }
                } else {
                    match_rules(INCOME_RULES, &record.description)
                };
                CategorizedRecord {
                    record: record.clone(),
                    category,
                }
            })
            .collect();

        Ok(CategorizedStatement { records })
    }
}
