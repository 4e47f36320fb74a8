use bankutskrift::{
    Categorizer, Category, Metrics, RawStatement, Report, RuleBasedCategorizer, Statement,
    StatementError, parse_statement,
};
use rust_decimal::Decimal;

fn load_fixture(name: &str) -> Statement {
    let raw = load_raw(name);
    parse_statement(&raw).expect("parse fixture")
}

fn load_raw(name: &str) -> RawStatement {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let file = std::fs::File::open(path).expect("open fixture");
    RawStatement::from_reader(file).expect("read fixture")
}

fn money(s: &str) -> Decimal {
    s.parse().expect("valid decimal")
}

#[test]
fn parses_statement_fixture() {
    let statement = load_fixture("statement.csv");
    assert_eq!(statement.records.len(), 7);

    // File order preserved.
    assert_eq!(statement.records[0].description, "KIWI 334 OSLO");
    assert_eq!(statement.records[6].description, "ELKJØP BERGEN");

    // Decimal comma and thousands grouping are normalized.
    assert_eq!(statement.records[0].amount_out, money("249.90"));
    assert_eq!(statement.records[6].amount_out, money("1299.00"));

    // Missing cells become zero, never absent.
    assert_eq!(statement.records[2].amount_out, Decimal::ZERO);
    assert_eq!(statement.records[2].amount_in, money("20000"));
}

#[test]
fn computes_metrics_for_fixture() {
    let statement = load_fixture("statement.csv");
    let metrics = Metrics::compute(&statement).expect("metrics");

    assert_eq!(metrics.total_in, money("20500"));
    assert_eq!(metrics.total_out, money("3574.00"));
    assert_eq!(metrics.net, money("16926.00"));
    assert_eq!(metrics.net, metrics.total_in - metrics.total_out);
    assert_eq!(metrics.count_in, 2);
    assert_eq!(metrics.count_out, 5);
    assert_eq!(metrics.avg_outgoing().expect("avg"), money("714.80"));

    let max = metrics.max_expense.as_ref().expect("max expense");
    assert_eq!(max.amount, money("1500"));
    assert_eq!(max.description, "NORDNET AS");

    assert_eq!(metrics.date_range_days, 14);
    assert_eq!(
        metrics.daily_spend_avg().expect("daily avg"),
        metrics.total_out / Decimal::from(15)
    );
}

#[test]
fn top_expenses_are_ascending_and_capped() {
    let statement = load_fixture("statement.csv");
    let metrics = Metrics::compute(&statement).expect("metrics");

    assert_eq!(metrics.top_expenses.len(), 5);
    let amounts: Vec<Decimal> = metrics.top_expenses.iter().map(|e| e.amount).collect();
    assert!(amounts.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(amounts[0], money("45"));
    assert_eq!(amounts[4], money("1500"));
}

#[test]
fn single_day_statement_scenario() {
    let statement = load_fixture("single_day.csv");
    let metrics = Metrics::compute(&statement).expect("metrics");

    assert_eq!(metrics.total_in, money("20000"));
    assert_eq!(metrics.total_out, money("500"));
    assert_eq!(metrics.net, money("19500"));
    assert_eq!(metrics.count_in, 1);
    assert_eq!(metrics.count_out, 1);
    assert_eq!(metrics.avg_outgoing().expect("avg"), money("500"));

    // A zero-day span has no meaningful per-day rate.
    assert_eq!(metrics.date_range_days, 0);
    assert!(matches!(
        metrics.daily_spend_avg(),
        Err(StatementError::DegenerateDateRange { days: 0 })
    ));

    let categorized = RuleBasedCategorizer::new()
        .categorize(&statement)
        .expect("categorize");
    let report = Report::assemble(metrics, &categorized);

    let groceries = report.table(Category::Groceries);
    assert_eq!(groceries.rows.len(), 1);
    assert_eq!(groceries.rows[0].description, "KIWI OSLO");
    assert_eq!(groceries.rows[0].amount, money("-500"));

    let wage = report.table(Category::Wage);
    assert_eq!(wage.rows.len(), 1);
    assert_eq!(wage.rows[0].description, "LØNN MARS");
    assert_eq!(wage.rows[0].amount, money("20000"));
}

#[test]
fn empty_statement_is_rejected() {
    let raw = load_raw("empty.csv");
    assert!(matches!(
        parse_statement(&raw),
        Err(StatementError::EmptyStatement)
    ));
}

#[test]
fn bad_date_names_the_row() {
    let raw = load_raw("bad_date.csv");
    match parse_statement(&raw) {
        Err(StatementError::Date { value, row }) => {
            assert_eq!(value, "2024-03-02");
            assert_eq!(row, 2);
        }
        other => panic!("expected date error, got {other:?}"),
    }
}

#[test]
fn missing_column_is_rejected() {
    let raw = RawStatement::from_str("Dato;Forklaring;Inn på konto\n01.03.2024;KIWI;100\n");
    assert!(matches!(
        parse_statement(&raw),
        Err(StatementError::MissingColumn {
            column: "Ut fra konto"
        })
    ));
}

#[test]
fn negative_amount_is_rejected() {
    let raw = RawStatement::from_str(
        "Dato;Forklaring;Inn på konto;Ut fra konto\n01.03.2024;KIWI;;-500\n",
    );
    assert!(matches!(
        parse_statement(&raw),
        Err(StatementError::Number { row: 1, .. })
    ));
}

#[test]
fn avg_outgoing_undefined_without_expenses() {
    let raw = RawStatement::from_str(
        "Dato;Forklaring;Inn på konto;Ut fra konto\n01.03.2024;LØNN MARS;20000;\n",
    );
    let statement = parse_statement(&raw).expect("parse");
    let metrics = Metrics::compute(&statement).expect("metrics");

    assert!(metrics.max_expense.is_none());
    assert!(metrics.top_expenses.is_empty());
    assert!(matches!(
        metrics.avg_outgoing(),
        Err(StatementError::DivisionUndefined { what: "outgoing" })
    ));
}

#[test]
fn report_keeps_empty_tables() {
    let statement = load_fixture("statement.csv");
    let metrics = Metrics::compute(&statement).expect("metrics");
    let categorized = RuleBasedCategorizer::new()
        .categorize(&statement)
        .expect("categorize");
    let report = Report::assemble(metrics, &categorized);

    assert_eq!(report.tables.len(), Category::ALL.len());
    assert_eq!(report.table(Category::Groceries).rows.len(), 2);
    assert_eq!(report.table(Category::Transport).rows.len(), 1);
    assert_eq!(report.table(Category::Finance).rows.len(), 1);
    assert_eq!(report.table(Category::Wage).rows.len(), 1);
    assert_eq!(report.table(Category::Transfer).rows.len(), 1);
    assert_eq!(report.table(Category::Other).rows.len(), 1);
    // Untouched categories still yield a (empty) table.
    assert!(report.table(Category::Housing).rows.is_empty());
    assert!(report.table(Category::Unknown).rows.is_empty());
}
