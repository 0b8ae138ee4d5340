use crate::errors::AppResult;
use rusqlite::Connection;

pub const SCHEMA_VERSION: i64 = 2;

/// v1: internal audit log.
fn create_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// v2: key/value table holding the workout snapshot.
fn create_kv_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}

/// Apply every migration above `from`, each in its own transaction
/// together with the `user_version` bump.
pub fn run_pending_migrations(conn: &Connection, from: i64) -> AppResult<()> {
    let steps: [(i64, fn(&Connection) -> rusqlite::Result<()>); 2] =
        [(1, create_log_table), (2, create_kv_table)];

    for (version, step) in steps {
        if version <= from {
            continue;
        }
        conn.execute_batch("BEGIN;")?;
        let applied = step(conn)
            .and_then(|_| conn.execute_batch(&format!("PRAGMA user_version = {version};")));
        match applied {
            Ok(()) => conn.execute_batch("COMMIT;")?,
            Err(e) => {
                conn.execute_batch("ROLLBACK;")?;
                return Err(e.into());
            }
        }
    }
    Ok(())
}
