//! The session object owning the in-memory collection.
//!
//! A [`Session`] loads the collection once from its [`Store`], then serves
//! as the single source of truth for the rest of the run. Every mutation
//! (add, score adjustment, delete) commits to the in-memory collection
//! first, writes the collection back to the store, and immediately runs the
//! selector against the updated collection — one synchronous step, no
//! deferred re-selection.
//!
//! Persistence is fire-and-forget: a failed save is logged and the session
//! keeps going with its in-memory state.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::domain::{Item, ItemKind};
use crate::selector;
use crate::store::Store;

pub struct Session {
    store: Arc<dyn Store + Send + Sync>,
    scoring: ScoringConfig,
    items: Vec<Item>,
    /// Id of the item currently displayed. Session-scoped, never persisted.
    current: Option<String>,
    rng: StdRng,
}

impl Session {
    pub fn new(store: Arc<dyn Store + Send + Sync>, scoring: ScoringConfig) -> Self {
        Self::with_rng(store, scoring, StdRng::from_entropy())
    }

    /// Like [`Session::new`] but with a caller-supplied random source, so
    /// tests can run against a seeded generator.
    pub fn with_rng(
        store: Arc<dyn Store + Send + Sync>,
        scoring: ScoringConfig,
        rng: StdRng,
    ) -> Self {
        let items = match store.load() {
            Ok(items) => items,
            Err(e) => {
                warn!("Failed to load collection, starting empty: {}", e);
                Vec::new()
            }
        };

        let mut session = Self {
            store,
            scoring,
            items,
            current: None,
            rng,
        };
        session.ensure_selection();
        session
    }

    /// Add a new item and show it immediately.
    ///
    /// Content that is empty after trimming is rejected and no item is
    /// created. The starting score is the highest existing score, floored
    /// at the configured initial floor, so a new item gets a fair chance
    /// against long-standing favorites.
    pub fn add(&mut self, kind: ItemKind, content: &str) -> Option<&Item> {
        let content = content.trim();
        if content.is_empty() {
            debug!("Rejected add with empty content");
            return None;
        }

        let max_score = self.items.iter().map(|i| i.score).max().unwrap_or(0);
        let initial_score = max_score.max(self.scoring.initial_floor);

        let item = Item::new(kind, content.to_string(), initial_score);
        self.current = Some(item.id.clone());
        self.items.push(item);
        self.persist();

        self.items.last()
    }

    /// Apply a signed score delta to the item with the given id, flooring
    /// the result at 1, then select what to show next with the adjusted
    /// item as the previous selection. Unknown ids are a no-op.
    pub fn adjust_score(&mut self, id: &str, delta: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            debug!("Score adjustment for unknown item {} ignored", id);
            return false;
        };

        item.score = (item.score + delta).max(1);
        self.persist();
        self.current = selector::select_next(&self.items, Some(id), &mut self.rng)
            .map(|i| i.id.clone());
        true
    }

    pub fn like(&mut self, id: &str) -> bool {
        let delta = self.scoring.like_delta;
        self.adjust_score(id, delta)
    }

    pub fn dislike(&mut self, id: &str) -> bool {
        let delta = self.scoring.dislike_delta;
        self.adjust_score(id, delta)
    }

    /// Remove the item with the given id. Unknown ids are a no-op. When the
    /// removed item was the current selection, a replacement is selected
    /// from what remains (or the selection is cleared if nothing remains).
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            debug!("Delete of unknown item {} ignored", id);
            return false;
        }

        self.persist();
        if self.current.as_deref() == Some(id) {
            self.current = selector::select_next(&self.items, Some(id), &mut self.rng)
                .map(|i| i.id.clone());
        }
        true
    }

    /// Select something to show when nothing is selected yet, e.g. right
    /// after loading a non-empty collection.
    pub fn ensure_selection(&mut self) {
        if self.current.is_none() && !self.items.is_empty() {
            self.current =
                selector::select_next(&self.items, None, &mut self.rng).map(|i| i.id.clone());
        }
    }

    /// The item currently displayed, if any.
    pub fn current(&self) -> Option<&Item> {
        let id = self.current.as_deref()?;
        self.items.iter().find(|i| i.id == id)
    }

    /// All items, newest first. Creation time orders the listing only; it
    /// never influences selection.
    pub fn items_by_newest(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge items from an export, skipping ids already present. Scores
    /// are floored at 1 so tampered exports can't violate the invariant.
    /// Returns (added, skipped).
    pub fn import(&mut self, incoming: Vec<Item>) -> (usize, usize) {
        let mut added = 0;
        let mut skipped = 0;

        for mut item in incoming {
            if self.items.iter().any(|i| i.id == item.id) {
                skipped += 1;
                continue;
            }
            item.score = item.score.max(1);
            self.items.push(item);
            added += 1;
        }

        if added > 0 {
            self.persist();
            self.ensure_selection();
        }
        (added, skipped)
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            warn!("Failed to persist collection: {}", e);
        }
    }
}
