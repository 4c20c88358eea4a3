//! @acp:module "Output Formatting"
//! @acp:summary "Terminal rendering shared by the estimate, export and form commands"
//! @acp:domain cli
//! @acp:layer output

use console::style;

use crate::catalog::Catalog;
use crate::estimate::EstimationResult;
use crate::format::format_amount;
use crate::input::InputIssue;

/// Warn about coerced fields
pub fn print_issues(issues: &[InputIssue]) {
    for issue in issues {
        eprintln!("{} {}", style("⚠").yellow(), issue);
    }
}

/// Lines padded into two right-aligned amount columns
pub fn render_estimate_table(result: &EstimationResult, currency: &str) -> Vec<String> {
    let label_width = result
        .lines
        .iter()
        .map(|l| l.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut rows: Vec<String> = result
        .lines
        .iter()
        .map(|line| {
            format!(
                "{:<width$}  {:>12}  {:>12}",
                line.label,
                format_amount(line.min, currency),
                format_amount(line.max, currency),
                width = label_width
            )
        })
        .collect();

    rows.push(format!(
        "{:<width$}  {:>12}  {:>12}",
        "Total",
        format_amount(result.total_min, currency),
        format_amount(result.total_max, currency),
        width = label_width
    ));
    rows
}

/// Print the itemized estimate and the total range
pub fn print_estimate(catalog: &Catalog, result: &EstimationResult) {
    println!("{}", style(catalog.title()).bold());
    if result.is_empty() {
        println!("  {}", style("No work items selected").dim());
    }

    let rows = render_estimate_table(result, catalog.currency());
    if let Some((total, lines)) = rows.split_last() {
        for row in lines {
            println!("  {}", row);
        }
        println!("  {}", style(total).bold());
    }
}
