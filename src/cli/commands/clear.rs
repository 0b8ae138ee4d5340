use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Clear { yes } = cmd else {
        return Ok(());
    };

    let mut tracker = open_session(cfg)?;

    // The clear control is disabled while there is nothing to clear.
    if !tracker.clear_enabled() {
        info("Nothing to clear.");
        return Ok(());
    }

    let count = tracker.store().len();
    if !*yes
        && !ask_confirmation(&format!(
            "Delete ALL {count} workouts? This action is irreversible."
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    let removed = tracker.clear_all()?;
    success(format!("Removed {removed} workouts."));

    let conn = tracker.persistence().backend().conn();
    if let Err(e) = ttlog(conn, "clear", "", &format!("{removed} workouts removed")) {
        warning(format!("Failed to write internal log: {e}"));
    }
    Ok(())
}
