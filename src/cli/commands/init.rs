use crate::cli::commands::write_home;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::kv::SqliteStore;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::Coords;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its tables
///  - the home location used to center the map, when given
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { lat, lng } = &cli.command else {
        return Ok(());
    };

    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let mut kv = SqliteStore::open(&cfg.database)?;
    success(format!("Database initialized at {}", cfg.database));

    let mut target = String::new();
    if let (Some(lat), Some(lng)) = (lat, lng) {
        let home = Coords::new(*lat, *lng)?;
        write_home(&mut kv, home)?;
        success(format!("Home location: {home}"));
        target = home.to_string();
    }

    if let Err(e) = log::ttlog(
        kv.conn(),
        "init",
        &target,
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    Ok(())
}
