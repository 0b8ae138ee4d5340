use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::view::MapView;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::List { markers } = cmd else {
        return Ok(());
    };

    let tracker = open_session(cfg)?;
    let views = tracker.views();

    if tracker.store().is_empty() {
        info("No workouts yet.");
        return Ok(());
    }

    header(format!("Workouts ({})", tracker.store().len()));
    print!("{}", views.sidebar().render());

    if *markers {
        println!();
        if views.map().is_ready() {
            print!("{}", views.map().render_markers());
        } else {
            info("Map disabled: no markers to show.");
        }
    }
    Ok(())
}
