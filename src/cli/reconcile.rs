//! CLI command for setting the current balance

use crate::display::format_reconciliation;
use crate::error::SpendResult;
use crate::services::{parse_target_balance, Session};
use crate::storage::Persistence;

/// Handle `reconcile <target>`
///
/// The target is what the user's real account shows right now. Only the
/// initial balance offset changes; transactions are untouched.
pub fn handle_reconcile_command<P: Persistence>(
    session: &mut Session<P>,
    target: &str,
) -> SpendResult<()> {
    let target = parse_target_balance(target)?;
    let result = session.reconcile_to_target(target)?;
    print!(
        "{}",
        format_reconciliation(&result, session.currency_symbol())
    );
    Ok(())
}
