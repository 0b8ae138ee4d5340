use crate::db::migrate::{SCHEMA_VERSION, run_pending_migrations};
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// All tables come from the migration engine; this only checks that the
/// file is not newer than the binary.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if current > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema v{current} is newer than supported v{SCHEMA_VERSION}"
        )));
    }

    run_pending_migrations(conn, current)?;
    Ok(())
}
