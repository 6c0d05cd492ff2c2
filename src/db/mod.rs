pub mod community;
pub mod diary;
pub mod expenses;
pub mod models;
pub mod news;
pub mod plants;
pub mod reminders;
pub mod schema;
pub mod supplies;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use crate::state::DbPool;

pub use schema::TABLES;

// Foreign keys are switched off explicitly: the bundled SQLite enables them by
// default, and plant deletion only cascades to diary rows while the other
// children keep their plant_id.
const CONNECTION_PRAGMAS: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA busy_timeout = 5000;
    PRAGMA foreign_keys = OFF;
";

pub fn create_pool(db_path: &Path) -> anyhow::Result<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let manager = SqliteConnectionManager::file(db_path)
        .with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));
    let pool = Pool::builder().max_size(8).build(manager)?;

    Ok(pool)
}

/// Single-connection in-memory pool. Every pooled in-memory connection is
/// its own database, so the size must stay at one.
pub fn create_memory_pool() -> anyhow::Result<DbPool> {
    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));
    let pool = Pool::builder().max_size(1).build(manager)?;
    Ok(pool)
}

pub fn init_schema(pool: &DbPool) -> anyhow::Result<()> {
    let conn = pool.get()?;

    for (name, sql) in TABLES {
        tracing::debug!("Ensuring table: {}", name);
        conn.execute_batch(sql)?;
    }

    tracing::info!("Database schema ready ({} tables)", TABLES.len());
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_pool() -> DbPool {
    let pool = create_memory_pool().unwrap();
    init_schema(&pool).unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    fn table_names(pool: &DbPool) -> Vec<String> {
        let conn = pool.get().unwrap();
        let mut stmt = conn
            .prepare(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
                 ORDER BY rowid",
            )
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    }

    #[test]
    fn create_pool_creates_db_file() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("sub/dir/test.db");
        let pool = create_pool(&db_path).unwrap();
        let conn = pool.get().unwrap();
        assert!(db_path.exists());

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode, "wal");
    }

    #[test]
    fn every_pooled_connection_gets_busy_timeout() {
        let tmp = tempfile::tempdir().unwrap();
        let pool = create_pool(&tmp.path().join("test.db")).unwrap();
        let first = pool.get().unwrap();
        let second = pool.get().unwrap();
        for conn in [&first, &second] {
            let timeout: i64 = conn
                .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
                .unwrap();
            assert_eq!(timeout, 5000);
        }
    }

    #[test]
    fn foreign_keys_are_off_on_every_connection() {
        let tmp = tempfile::tempdir().unwrap();
        let file_pool = create_pool(&tmp.path().join("test.db")).unwrap();
        let memory_pool = create_memory_pool().unwrap();
        let first = file_pool.get().unwrap();
        let second = file_pool.get().unwrap();
        let memory = memory_pool.get().unwrap();
        for conn in [&first, &second, &memory] {
            let enabled: i64 = conn
                .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
                .unwrap();
            assert_eq!(enabled, 0);
        }
    }

    #[test]
    fn parent_row_with_children_can_be_deleted() {
        let tmp = tempfile::tempdir().unwrap();
        let pool = create_pool(&tmp.path().join("test.db")).unwrap();
        init_schema(&pool).unwrap();
        let conn = pool.get().unwrap();
        conn.execute_batch(
            "INSERT INTO plants (name) VALUES ('Basil');
             INSERT INTO growth_logs (plant_id, height) VALUES (1, 2.0);
             INSERT INTO expenses (plant_id, type, amount) VALUES (1, 'seed', 1.0);
             INSERT INTO reminders (plant_id, title, time) VALUES (1, 'Water', '2025-06-01');",
        )
        .unwrap();

        conn.execute("DELETE FROM plants WHERE id = ?1", params![1])
            .unwrap();

        let orphans: i64 = conn
            .query_row("SELECT COUNT(*) FROM growth_logs WHERE plant_id = 1", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(orphans, 1);
    }

    #[test]
    fn schema_creates_all_tables_in_order() {
        let pool = test_pool();
        assert_eq!(
            table_names(&pool),
            vec![
                "plants",
                "growth_logs",
                "supplies",
                "saved_news",
                "diary",
                "community_posts",
                "comments",
                "comment_replies",
                "expenses",
                "reminders",
                "news_bookmarks",
            ]
        );
    }

    #[test]
    fn schema_init_is_idempotent() {
        let pool = test_pool();
        {
            let conn = pool.get().unwrap();
            conn.execute("INSERT INTO plants (name) VALUES (?1)", params!["Fern"])
                .unwrap();
        }
        init_schema(&pool).unwrap();

        let conn = pool.get().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM plants", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        drop(conn);
        assert_eq!(table_names(&pool).len(), 11);
    }

    #[test]
    fn dangling_foreign_keys_are_accepted() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        let result = conn.execute(
            "INSERT INTO growth_logs (plant_id, height) VALUES (?1, ?2)",
            params![999, 1.5],
        );
        assert!(result.is_ok());
    }
}
