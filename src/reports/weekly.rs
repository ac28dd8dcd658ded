//! Weekly income/expense series
//!
//! A week runs Sunday through Saturday around a reference date. Each day
//! carries its income and expense totals plus its largest expenses.

use chrono::{Datelike, Duration, NaiveDate};

use super::category_breakdown::top_by_amount;
use crate::models::{Money, Transaction, DATE_FORMAT};

/// Expenses kept per day for drill-down
pub const TOP_EXPENSES_PER_DAY: usize = 3;

/// One day of the weekly series
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    /// Short weekday name, `Sun` through `Sat`
    pub day_label: String,
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
    /// Largest expenses of the day, ties kept in ledger order
    pub top_expenses: Vec<Transaction>,
}

impl DayBucket {
    /// `income - expense` for the day
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Sunday on or before `reference`
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(i64::from(reference.weekday().num_days_from_sunday()))
}

/// Seven buckets, Sunday first, for the week containing `reference`
///
/// Transactions match a bucket by exact date text, so records with
/// malformed dates never land in any bucket.
pub fn weekly_series(transactions: &[Transaction], reference: NaiveDate) -> Vec<DayBucket> {
    let start = week_start(reference);

    (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let key = date.format(DATE_FORMAT).to_string();
            let on_day: Vec<&Transaction> =
                transactions.iter().filter(|t| t.date == key).collect();

            let income: Money = on_day.iter().filter(|t| t.is_income()).map(|t| t.value()).sum();
            let expenses: Vec<&Transaction> =
                on_day.iter().copied().filter(|t| t.is_expense()).collect();
            let expense: Money = expenses.iter().map(|t| t.value()).sum();

            DayBucket {
                day_label: date.format("%a").to_string(),
                date,
                income,
                expense,
                top_expenses: top_by_amount(&expenses, TOP_EXPENSES_PER_DAY),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, Ledger, NewTransaction, TransactionType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(ledger: &mut Ledger, on: NaiveDate, kind: TransactionType, cents: i64, desc: &str) {
        ledger.add(NewTransaction {
            amount: Money::from_cents(cents),
            category: Category::Food,
            date: on,
            description: desc.into(),
            kind,
        });
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2024-05-15 is a Wednesday
        assert_eq!(week_start(date(2024, 5, 15)), date(2024, 5, 12));
        assert_eq!(week_start(date(2024, 5, 12)), date(2024, 5, 12));
        assert_eq!(week_start(date(2024, 5, 18)), date(2024, 5, 12));
    }

    #[test]
    fn test_always_seven_days() {
        let series = weekly_series(&[], date(2024, 5, 15));
        assert_eq!(series.len(), 7);
        let labels: Vec<&str> = series.iter().map(|d| d.day_label.as_str()).collect();
        assert_eq!(labels, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        assert!(series.iter().all(|d| d.income.is_zero() && d.expense.is_zero()));
    }

    #[test]
    fn test_week_crossing_year_boundary() {
        // 2025-01-01 is a Wednesday
        let series = weekly_series(&[], date(2025, 1, 1));
        assert_eq!(series[0].date, date(2024, 12, 29));
        assert_eq!(series[6].date, date(2025, 1, 4));
    }

    #[test]
    fn test_buckets_match_direct_filter() {
        let mut ledger = Ledger::new();
        add(&mut ledger, date(2024, 5, 13), TransactionType::Expense, 1200, "lunch");
        add(&mut ledger, date(2024, 5, 13), TransactionType::Expense, 800, "coffee");
        add(&mut ledger, date(2024, 5, 13), TransactionType::Income, 5000, "refund");
        add(&mut ledger, date(2024, 5, 17), TransactionType::Expense, 300, "snack");
        add(&mut ledger, date(2024, 5, 20), TransactionType::Expense, 9900, "next week");
        add(&mut ledger, date(2024, 5, 11), TransactionType::Expense, 9900, "last week");

        let series = weekly_series(ledger.list(), date(2024, 5, 15));
        let monday = &series[1];
        assert_eq!(monday.date, date(2024, 5, 13));
        assert_eq!(monday.income, Money::from_cents(5000));
        assert_eq!(monday.expense, Money::from_cents(2000));
        assert_eq!(monday.net(), Money::from_cents(3000));
        assert_eq!(monday.top_expenses.len(), 2);
        assert_eq!(monday.top_expenses[0].description, "lunch");

        let week_expense: Money = series.iter().map(|d| d.expense).sum();
        let direct: Money = ledger
            .list()
            .iter()
            .filter(|t| t.is_expense())
            .filter(|t| t.date.as_str() >= "2024-05-12" && t.date.as_str() <= "2024-05-18")
            .map(|t| t.value())
            .sum();
        assert_eq!(week_expense, direct);
    }

    #[test]
    fn test_top_expenses_capped_at_three() {
        let mut ledger = Ledger::new();
        for cents in [100, 200, 300, 400] {
            add(&mut ledger, date(2024, 5, 14), TransactionType::Expense, cents, "x");
        }
        let series = weekly_series(ledger.list(), date(2024, 5, 14));
        let tuesday = &series[2];
        let amounts: Vec<Money> = tuesday.top_expenses.iter().map(|t| t.value()).collect();
        assert_eq!(
            amounts,
            vec![Money::from_cents(400), Money::from_cents(300), Money::from_cents(200)]
        );
    }

    #[test]
    fn test_corrupt_and_malformed_records() {
        let mut ledger = Ledger::new();
        add(&mut ledger, date(2024, 5, 16), TransactionType::Expense, 700, "ok");
        let mut transactions = ledger.list().to_vec();

        let mut corrupt = transactions[0].clone();
        corrupt.amount = Amount::Raw("n/a".into());
        transactions.push(corrupt);

        let mut bad_date = transactions[0].clone();
        bad_date.date = "16/05/2024".into();
        transactions.push(bad_date);

        let series = weekly_series(&transactions, date(2024, 5, 16));
        assert_eq!(series[4].expense, Money::from_cents(700));
        let total: Money = series.iter().map(|d| d.expense).sum();
        assert_eq!(total, Money::from_cents(700));
    }
}
