//! Balance reconciliation
//!
//! The balance is never stored. It is the offset plus the net flow of the
//! ledger, recomputed on every read. Setting a target balance solves for a
//! new offset and leaves every transaction untouched.

use crate::error::{SpendError, SpendResult};
use crate::models::{Ledger, Money, Transaction};

/// Income/expense totals and the resulting balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of income amounts
    pub income: Money,
    /// Sum of expense amounts (positive magnitude)
    pub expense: Money,
    /// `income - expense`
    pub net_flow: Money,
    /// `offset + net_flow`
    pub balance: Money,
}

impl Totals {
    /// Compute totals over a transaction set; corrupt amounts count as zero
    pub fn compute(transactions: &[Transaction], initial_balance_offset: Money) -> Self {
        let income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(Transaction::value)
            .sum();
        let expense: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(Transaction::value)
            .sum();
        let net_flow = income - expense;

        Self {
            income,
            expense,
            net_flow,
            balance: initial_balance_offset + net_flow,
        }
    }

    /// Totals for the whole ledger
    pub fn of(ledger: &Ledger) -> Self {
        Self::compute(ledger.list(), ledger.initial_balance_offset())
    }
}

/// Result of a successful reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub previous_offset: Money,
    pub new_offset: Money,
    /// Target rounded to cents
    pub target: Money,
}

/// Set the offset so the balance equals `target_balance`
///
/// Uses the net flow as it stands before the change. A target that is not
/// finite, or whose offset would not fit in cents, is rejected with
/// `InvalidInput` and the offset is left as it was.
pub fn reconcile_to_target(ledger: &mut Ledger, target_balance: f64) -> SpendResult<Reconciliation> {
    let out_of_range = || {
        SpendError::InvalidInput(format!(
            "target balance must be a finite number within range, got {}",
            target_balance
        ))
    };
    let target = Money::from_f64(target_balance).ok_or_else(out_of_range)?;

    let net_flow = Totals::of(ledger).net_flow;
    let previous_offset = ledger.initial_balance_offset();
    let new_offset = target.checked_sub(net_flow).ok_or_else(out_of_range)?;
    ledger.set_initial_balance_offset(new_offset);

    tracing::info!(%previous_offset, %new_offset, %target, "balance reconciled");

    Ok(Reconciliation {
        previous_offset,
        new_offset,
        target,
    })
}

/// Parse a user-typed target balance
///
/// Accepts plain numbers and currency-formatted text ("$1,250.00").
pub fn parse_target_balance(text: &str) -> SpendResult<f64> {
    let invalid = || SpendError::InvalidInput(format!("'{}' is not a valid balance", text));

    if let Ok(money) = Money::parse(text) {
        return Ok(money.to_f64());
    }
    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, NewTransaction, TransactionType};
    use chrono::NaiveDate;

    fn entry(kind: TransactionType, cents: i64, category: Category, day: u32) -> NewTransaction {
        NewTransaction {
            amount: Money::from_cents(cents),
            category,
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description: "entry".into(),
            kind,
        }
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add(entry(TransactionType::Income, 100000, Category::Salary, 1));
        ledger.add(entry(TransactionType::Expense, 20000, Category::Food, 2));
        ledger
    }

    #[test]
    fn test_totals_scenario() {
        let totals = Totals::of(&sample_ledger());
        assert_eq!(totals.income, Money::from_cents(100000));
        assert_eq!(totals.expense, Money::from_cents(20000));
        assert_eq!(totals.net_flow, Money::from_cents(80000));
        assert_eq!(totals.balance, Money::from_cents(80000));
    }

    #[test]
    fn test_balance_includes_offset() {
        let mut ledger = sample_ledger();
        ledger.set_initial_balance_offset(Money::from_cents(-5050));
        let totals = Totals::of(&ledger);
        assert_eq!(
            totals.balance,
            ledger.initial_balance_offset() + totals.income - totals.expense
        );
    }

    #[test]
    fn test_reconcile_scenario() {
        let mut ledger = sample_ledger();
        let result = reconcile_to_target(&mut ledger, 500.0).unwrap();

        assert_eq!(result.previous_offset, Money::zero());
        assert_eq!(result.new_offset, Money::from_cents(-30000));
        assert_eq!(ledger.initial_balance_offset(), Money::from_cents(-30000));
        assert_eq!(Totals::of(&ledger).balance, Money::from_cents(50000));
    }

    #[test]
    fn test_reconcile_does_not_touch_transactions() {
        let mut ledger = sample_ledger();
        let before = ledger.list().to_vec();
        reconcile_to_target(&mut ledger, -1234.56).unwrap();
        assert_eq!(ledger.list(), before.as_slice());
    }

    #[test]
    fn test_reconcile_reaches_any_target_from_any_offset() {
        for offset in [-99999, 0, 12345] {
            for target in [-1000.0, 0.0, 0.01, 500.0, 1_000_000.49] {
                let mut ledger = sample_ledger();
                ledger.set_initial_balance_offset(Money::from_cents(offset));
                reconcile_to_target(&mut ledger, target).unwrap();
                let balance = Totals::of(&ledger).balance.to_f64();
                assert!((balance - target).abs() < 0.005, "{} vs {}", balance, target);
            }
        }
    }

    #[test]
    fn test_reconcile_rejects_non_finite() {
        let mut ledger = sample_ledger();
        ledger.set_initial_balance_offset(Money::from_cents(777));

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = reconcile_to_target(&mut ledger, bad).unwrap_err();
            assert!(err.is_invalid_input());
        }
        assert_eq!(ledger.initial_balance_offset(), Money::from_cents(777));
    }

    #[test]
    fn test_reconcile_rejects_unrepresentable_target() {
        let mut ledger = sample_ledger();
        ledger.set_initial_balance_offset(Money::from_cents(42));

        let err = reconcile_to_target(&mut ledger, 1e17).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(ledger.initial_balance_offset(), Money::from_cents(42));
    }

    #[test]
    fn test_reconcile_rejects_offset_overflow() {
        let mut ledger = Ledger::new();
        ledger.add(entry(TransactionType::Expense, i64::MAX - 1, Category::Housing, 1));

        let err = reconcile_to_target(&mut ledger, 1e16).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(ledger.initial_balance_offset().is_zero());
    }

    #[test]
    fn test_oversized_stored_amounts_do_not_abort_totals() {
        let stored = |amount: f64| -> Transaction {
            serde_json::from_value(serde_json::json!({
                "id": crate::models::TransactionId::new(),
                "amount": amount,
                "category": "Food",
                "date": "2024-01-05",
                "description": "imported",
                "type": "expense",
            }))
            .unwrap()
        };

        let huge = vec![stored(1e300), stored(1e300)];
        assert!(huge.iter().all(|t| t.checked_value().is_err()));
        let totals = Totals::compute(&huge, Money::zero());
        assert_eq!(totals.expense, Money::zero());
        assert_eq!(totals.balance, Money::zero());

        let large = vec![stored(9e16), stored(9e16)];
        let totals = Totals::compute(&large, Money::from_cents(i64::MIN));
        assert_eq!(totals.expense, Money::from_cents(i64::MAX));
        assert_eq!(totals.balance, Money::from_cents(i64::MIN));
    }

    #[test]
    fn test_corrupt_amount_counts_as_zero() {
        let mut ledger = sample_ledger();
        let mut corrupt = Transaction::create(entry(TransactionType::Expense, 0, Category::Food, 3));
        corrupt.amount = Amount::Raw("twelve".into());
        let mut transactions = ledger.list().to_vec();
        transactions.push(corrupt);
        ledger = Ledger::from_parts(transactions, Money::zero());

        let totals = Totals::of(&ledger);
        assert_eq!(totals.expense, Money::from_cents(20000));
        assert_eq!(totals.balance, Money::from_cents(80000));
    }

    #[test]
    fn test_parse_target_balance() {
        assert_eq!(parse_target_balance("500").unwrap(), 500.0);
        assert_eq!(parse_target_balance("$1,250.50").unwrap(), 1250.5);
        assert_eq!(parse_target_balance("-12").unwrap(), -12.0);
        assert!(parse_target_balance("abc").unwrap_err().is_invalid_input());
        assert!(parse_target_balance("inf").is_err());
        assert!(parse_target_balance("NaN").is_err());
    }
}
