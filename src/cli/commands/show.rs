use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, map};

/// Select a sidebar entry: recenter the map on its workout.
/// An unknown id is reported and otherwise ignored.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Show { id } = cmd else {
        return Ok(());
    };

    let mut tracker = open_session(cfg)?;
    match tracker.select_entry(id) {
        Some(at) => match tracker.views().map().view() {
            Some((center, zoom)) => map(format!("Map centered on {center} (zoom {zoom})")),
            None => info(format!("Workout {id} is at {at}; the map is disabled.")),
        },
        None => info("Nothing to show."),
    }
    Ok(())
}
