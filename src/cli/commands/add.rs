use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::SubmitOutcome;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::{Coords, WorkoutKind};
use crate::ui::messages::{map, success, warning};
use crate::ui::terminal::ArgsForm;
use crate::view::FormSurface;

/// Simulate a map click at `--lat/--lng` followed by a form submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Add {
        kind,
        lat,
        lng,
        distance,
        duration,
        cadence,
        elevation,
    } = cmd
    else {
        return Ok(());
    };

    let mut tracker = open_session(cfg)?;

    let mut form = ArgsForm::new(
        kind,
        distance,
        duration,
        cadence.as_deref().unwrap_or(""),
        elevation.as_deref().unwrap_or(""),
    );
    if let Some(k) = WorkoutKind::from_code(kind) {
        form.set_kind(k);
    }

    tracker.map_clicked(Coords { lat: *lat, lng: *lng }, &mut form)?;

    match tracker.submit(&mut form)? {
        SubmitOutcome::Rejected(e) => Err(e),
        SubmitOutcome::Committed(id) => {
            let w = tracker.store().find_by_id(id)?;
            success(format!("Workout {id} saved: {}", w.description()));
            if let Some(m) = tracker.views().map().markers().last() {
                map(format!("Marker placed at {} ({})", m.at, m.popup));
            }

            let conn = tracker.persistence().backend().conn();
            if let Err(e) = ttlog(conn, "add", &id.to_string(), &w.description()) {
                warning(format!("Failed to write internal log: {e}"));
            }
            Ok(())
        }
    }
}
