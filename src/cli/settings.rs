//! CLI commands for display preferences and data reset

use clap::ValueEnum;

use crate::error::{SpendError, SpendResult};
use crate::services::Session;
use crate::storage::Persistence;

/// Theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

/// Handle `currency`: show, set or toggle the symbol
pub fn handle_currency_command<P: Persistence>(
    session: &mut Session<P>,
    symbol: Option<&str>,
    toggle: bool,
) -> SpendResult<()> {
    if toggle {
        let next = session.toggle_currency();
        println!("Currency symbol: {}", next);
        return Ok(());
    }

    if let Some(symbol) = symbol {
        session.set_currency_symbol(symbol)?;
    }
    println!("Currency symbol: {}", session.currency_symbol());
    Ok(())
}

/// Handle `theme`
pub fn handle_theme_command<P: Persistence>(session: &mut Session<P>, theme: Theme) -> SpendResult<()> {
    session.set_dark_theme(theme == Theme::Dark);
    println!(
        "Theme: {}",
        if session.dark_theme() { "dark" } else { "light" }
    );
    Ok(())
}

/// Handle `reset`; refuses to run without explicit confirmation
pub fn handle_reset_command<P: Persistence>(session: &mut Session<P>, confirmed: bool) -> SpendResult<()> {
    if !confirmed {
        return Err(SpendError::InvalidInput(
            "reset deletes all transactions and settings; pass --yes to confirm".into(),
        ));
    }
    session.reset();
    println!("All data cleared.");
    Ok(())
}
