//! Example CLI: reads a statement export, prints metrics and per-category
//! tables. An optional endpoint + model delegates expense categorization to
//! an external classifier.

use std::env;
use std::fs::File;

use bankutskrift::{
    Categorizer, ClassifierConfig, DelegatedCategorizer, HttpClassifier, Metrics, RawStatement,
    Report, RuleBasedCategorizer, parse_statement,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = if let Some(path) = args.next() {
        path
    } else {
        println!("Usage: bankutskrift <statement.csv> [endpoint model [api-key]]");
        return Ok(());
    };

    let raw = RawStatement::from_reader(File::open(&path)?)?;
    let statement = parse_statement(&raw)?;
    let metrics = Metrics::compute(&statement)?;

    let categorized = match (args.next(), args.next()) {
        (Some(endpoint), Some(model)) => {
            let classifier = HttpClassifier::new(ClassifierConfig {
                endpoint,
                model,
                api_key: args.next(),
            })?;
            DelegatedCategorizer::new(classifier).categorize(&statement)?
        }
        _ => RuleBasedCategorizer::new().categorize(&statement)?,
    };
    let report = Report::assemble(metrics, &categorized);
    let metrics = &report.metrics;

    println!(
        "Netto denne perioden: {} (inn {}, ut {})",
        metrics.net, metrics.total_in, metrics.total_out
    );
    println!(
        "{} utgående og {} innkommende transaksjoner",
        metrics.count_out, metrics.count_in
    );
    match metrics.avg_outgoing() {
        Ok(avg) => println!("Gjennomsnittlig utgående beløp: {avg}"),
        Err(err) => println!("{err}"),
    }
    if let Some(max) = &metrics.max_expense {
        println!("Største kostnad: {} ({})", max.amount, max.description);
    }
    println!(
        "Periode {} — {}, {} dager",
        metrics.date_start.format("%d.%m.%Y"),
        metrics.date_end.format("%d.%m.%Y"),
        metrics.date_range_days
    );
    match metrics.daily_spend_avg() {
        Ok(avg) => println!("Gjennomsnittlig forbruk per dag: {avg}"),
        Err(err) => println!("{err}"),
    }

    println!("\nTopp {} utgifter:", metrics.top_expenses.len());
    for expense in &metrics.top_expenses {
        println!(
            "  {}  {}  {}",
            expense.date.format("%d.%m.%Y"),
            expense.amount,
            expense.description
        );
    }

    for table in &report.tables {
        println!("\n{} ({} rader)", table.category, table.rows.len());
        for row in &table.rows {
            println!(
                "  {}  {}  {}",
                row.date.format("%d.%m.%Y"),
                row.amount,
                row.description
            );
        }
    }

    Ok(())
}
