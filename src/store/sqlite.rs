use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use rusqlite_migration::{Migrations, M};
use tracing::warn;

use crate::app::{Result, UpliftError};
use crate::domain::{Item, ItemKind};
use crate::store::Store;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| UpliftError::Other(format!("Migration failed: {}", e)))?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| UpliftError::Other(format!("Store lock poisoned: {}", e)))
    }

    fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| s.parse::<DateTime<Utc>>().ok())
    }
}

impl Store for SqliteStore {
    /// Load the collection in insertion order.
    ///
    /// Rows that can't be interpreted are tolerated rather than failing
    /// the load: an unknown kind drops the row with a warning, a score
    /// below 1 is floored, an unparseable timestamp falls back to now.
    fn load(&self) -> Result<Vec<Item>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, kind, content, score, created_at FROM items ORDER BY rowid",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut items = Vec::with_capacity(rows.len());
        for (id, kind, content, score, created_at) in rows {
            let Some(kind) = ItemKind::parse(&kind) else {
                warn!("Skipping item {} with unknown kind {:?}", id, kind);
                continue;
            };
            items.push(Item {
                id,
                kind,
                content,
                score: score.max(1),
                created_at: Self::parse_datetime(&created_at).unwrap_or_else(Utc::now),
            });
        }

        Ok(items)
    }

    /// Replace the persisted collection with `items`, in order, as one
    /// transaction.
    fn save(&self, items: &[Item]) -> Result<()> {
        let mut conn = self.lock()?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM items", [])?;
        for item in items {
            tx.execute(
                "INSERT INTO items (id, kind, content, score, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    item.id,
                    item.kind.as_str(),
                    item.content,
                    item.score,
                    item.created_at.to_rfc3339()
                ],
            )?;
        }
        tx.commit()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(content: &str, score: i64) -> Item {
        Item::new(ItemKind::Quote, content.into(), score)
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = SqliteStore::in_memory().unwrap();
        let items = vec![item("a", 10), item("b", 25)];
        store.save(&items).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, items[0].id);
        assert_eq!(loaded[0].content, "a");
        assert_eq!(loaded[1].score, 25);
        assert_eq!(loaded[0].kind, ItemKind::Quote);
    }

    #[test]
    fn test_save_replaces_previous_collection() {
        let store = SqliteStore::in_memory().unwrap();
        store.save(&[item("a", 10), item("b", 10)]).unwrap();
        store.save(&[item("c", 10)]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].content, "c");
    }

    #[test]
    fn test_load_preserves_insertion_order() {
        let store = SqliteStore::in_memory().unwrap();
        let items: Vec<Item> = (0..10).map(|i| item(&format!("item-{}", i), 10)).collect();
        store.save(&items).unwrap();

        let loaded = store.load().unwrap();
        let ids: Vec<&str> = loaded.iter().map(|i| i.id.as_str()).collect();
        let expected: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_load_floors_corrupted_score() {
        let store = SqliteStore::in_memory().unwrap();
        {
            let conn = store.lock().unwrap();
            conn.execute(
                "INSERT INTO items (id, kind, content, score, created_at)
                 VALUES ('bad-score', 'quote', 'x', -4, ?1)",
                params![Utc::now().to_rfc3339()],
            )
            .unwrap();
        }

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].score, 1);
    }

    #[test]
    fn test_load_skips_unknown_kind() {
        let store = SqliteStore::in_memory().unwrap();
        {
            let conn = store.lock().unwrap();
            conn.execute(
                "INSERT INTO items (id, kind, content, score, created_at)
                 VALUES ('odd-kind', 'meme', 'x', 10, ?1)",
                params![Utc::now().to_rfc3339()],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO items (id, kind, content, score, created_at)
                 VALUES ('fine', 'image', 'https://example.com/a.png', 10, ?1)",
                params![Utc::now().to_rfc3339()],
            )
            .unwrap();
        }

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "fine");
        assert_eq!(loaded[0].kind, ItemKind::Image);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uplift.db");

        {
            let store = SqliteStore::new(&path).unwrap();
            store.save(&[item("durable", 12)]).unwrap();
        }

        let store = SqliteStore::new(&path).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].content, "durable");
        assert_eq!(loaded[0].score, 12);
    }
}
