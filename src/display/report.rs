//! Report formatting for terminal output
//!
//! Renders totals, the category breakdown, the weekly series and insight
//! cards.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::assistant::{Insight, Severity};
use crate::models::Money;
use crate::reports::{CategoryTotal, DayBucket};
use crate::services::{Reconciliation, Totals};

/// Width of breakdown and weekly bars
const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Balance summary block
pub fn format_totals(totals: &Totals, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Total Balance:  {}\n", totals.balance.format_with_symbol(symbol)));
    output.push_str(&separator(32));
    output.push('\n');
    output.push_str(&format!("Income:         {}\n", totals.income.format_with_symbol(symbol)));
    output.push_str(&format!("Expenses:       {}\n", totals.expense.format_with_symbol(symbol)));
    output.push_str(&format!("Net Flow:       {}\n", totals.net_flow.format_with_symbol(symbol)));

    output
}

pub fn format_reconciliation(result: &Reconciliation, symbol: &str) -> String {
    format!(
        "Balance set to {} (initial balance {} -> {})\n",
        result.target.format_with_symbol(symbol),
        result.previous_offset.format_with_symbol(symbol),
        result.new_offset.format_with_symbol(symbol)
    )
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Largest")]
    largest: String,
}

/// Category breakdown table, largest category first
pub fn format_breakdown(categories: &[CategoryTotal], symbol: &str) -> String {
    if categories.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let overall: Money = categories.iter().map(|c| c.total).sum();
    let max = categories
        .iter()
        .map(|c| c.total.to_f64())
        .fold(0.0_f64, f64::max);

    let mut sorted: Vec<&CategoryTotal> = categories.iter().collect();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));

    let rows: Vec<BreakdownRow> = sorted
        .into_iter()
        .map(|c| BreakdownRow {
            category: c.category.to_string(),
            spent: c.total.format_with_symbol(symbol),
            share: format_percentage(c.percentage_of(overall)),
            bar: format_bar(c.total.to_f64(), max, BAR_WIDTH),
            largest: c
                .top_entries
                .iter()
                .map(|t| format!("{} {}", t.description, t.value().format_with_symbol(symbol)))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!(
        "{}\nTotal spent: {}\n",
        table,
        overall.format_with_symbol(symbol)
    )
}

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Top expenses")]
    top: String,
}

/// Sunday-to-Saturday table with an expense bar per day
pub fn format_week(days: &[DayBucket], symbol: &str) -> String {
    let max = days
        .iter()
        .map(|d| d.expense.to_f64())
        .fold(0.0_f64, f64::max);

    let rows: Vec<WeekRow> = days
        .iter()
        .map(|d| WeekRow {
            day: d.day_label.clone(),
            date: d.date.format("%Y-%m-%d").to_string(),
            income: d.income.format_with_symbol(symbol),
            expense: d.expense.format_with_symbol(symbol),
            bar: format_bar(d.expense.to_f64(), max, BAR_WIDTH),
            top: d
                .top_expenses
                .iter()
                .map(|t| t.description.clone())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let income: Money = days.iter().map(|d| d.income).sum();
    let expense: Money = days.iter().map(|d| d.expense).sum();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!(
        "{}\nWeek income: {}  Week expense: {}\n",
        table,
        income.format_with_symbol(symbol),
        expense.format_with_symbol(symbol)
    )
}

/// One block per insight, marked by tone
pub fn format_insights(insights: &[Insight]) -> String {
    let mut output = String::new();

    for insight in insights {
        let marker = match insight.severity {
            Severity::Warning => "!",
            Severity::Positive => "+",
            Severity::Neutral => "*",
        };
        output.push_str(&format!("[{}] {}\n    {}\n", marker, insight.title, insight.message));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Ledger, NewTransaction, TransactionType};
    use crate::reports::{category_breakdown, weekly_series};
    use chrono::NaiveDate;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.0), "5.0%");
        assert_eq!(format_percentage(45.6), "46%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 10), "█████░░░░░");
        assert_eq!(format_bar(0.0, 10.0, 4), "    ");
    }

    #[test]
    fn test_format_totals() {
        let totals = Totals {
            income: Money::from_cents(100000),
            expense: Money::from_cents(20000),
            net_flow: Money::from_cents(80000),
            balance: Money::from_cents(75000),
        };
        let output = format_totals(&totals, "$");
        assert!(output.contains("Total Balance:  $750.00"));
        assert!(output.contains("Net Flow:       $800.00"));
    }

    #[test]
    fn test_breakdown_and_week() {
        let mut ledger = Ledger::new();
        ledger.add(NewTransaction {
            amount: Money::from_cents(4200),
            category: Category::Entertainment,
            date: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            description: "Concert".into(),
            kind: TransactionType::Expense,
        });

        let breakdown = format_breakdown(&category_breakdown(ledger.list()), "$");
        assert!(breakdown.contains("Entertainment"));
        assert!(breakdown.contains("Concert $42.00"));
        assert!(breakdown.contains("Total spent: $42.00"));

        let reference = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        let week = format_week(&weekly_series(ledger.list(), reference), "$");
        assert!(week.contains("Wed"));
        assert!(week.contains("2024-07-10"));
        assert!(week.contains("Week expense: $42.00"));
    }

    #[test]
    fn test_empty_breakdown() {
        assert_eq!(format_breakdown(&[], "$"), "No expenses recorded.\n");
    }

    #[test]
    fn test_format_insights() {
        let output = format_insights(&[Insight::unavailable()]);
        assert_eq!(
            output,
            "[*] AI Unavailable\n    Could not generate insights at this time.\n"
        );
    }
}
