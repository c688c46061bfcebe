//! # Uplift
//!
//! A local-first rotation of motivational items (quotes, images, videos)
//! with adaptive weighted selection.
//!
//! ## Architecture
//!
//! ```text
//! Store → Session → Selector
//!           ↑
//!          CLI
//! ```
//!
//! - [`store`]: SQLite persistence of the collection
//! - [`session`]: owns the in-memory collection and the current selection,
//!   exposes the add / like / dislike / remove operations
//! - [`selector`]: weighted random sampling with a bounded no-repeat rule
//! - [`cli`]: thin command layer over the session
//!
//! Scores drive everything: each item's score (always >= 1) is its weight
//! in the next draw, raised on like and lowered (floored at 1) on dislike.
//! New items start at the highest existing score so they aren't drowned
//! out by long-standing favorites.

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the store and
/// the configuration, and opens a [`Session`](session::Session).
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `add <kind> <content>` - Add a new item (shown immediately)
/// - `like <id>` / `dislike <id>` - Adjust an item's score
/// - `remove <id>` - Remove an item
/// - `show` - Show the current item
/// - `list` - List all items, newest first
/// - `export` / `import` - JSON export/import of the collection
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/uplift/config.toml`: scoring deltas and the
/// starting-score floor for new items.
pub mod config;

/// Core domain models.
///
/// - [`Item`](domain::Item): one unit of motivational content with a
///   mutable score and a SHA256 id
/// - [`ItemKind`](domain::ItemKind): quote, image or video
pub mod domain;

/// Weighted random item selection.
///
/// [`select_next`](selector::select_next) draws proportionally to score,
/// avoids an immediate repeat when alternatives exist, and bounds its
/// retries so it always terminates.
pub mod selector;

/// The session object owning the collection and the current selection.
///
/// All mutations commit in memory, persist fire-and-forget, and re-select
/// synchronously against the updated collection.
pub mod session;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): trait defining the load/save boundary
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
