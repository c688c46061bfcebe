pub mod sqlite;

use crate::app::Result;
use crate::domain::Item;

pub use sqlite::SqliteStore;

/// Persistence boundary for the collection.
///
/// The session treats whichever implementation it is handed as an opaque
/// durable medium: `load` runs once at session start, `save` after every
/// mutation. Implementations persist the whole collection, preserving its
/// order.
pub trait Store {
    fn load(&self) -> Result<Vec<Item>>;
    fn save(&self, items: &[Item]) -> Result<()>;
}
