pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::ItemKind;

#[derive(Parser)]
#[command(name = "uplift")]
#[command(about = "A weighted rotation of motivational quotes, images and videos", long_about = None)]
pub struct Cli {
    /// Path to the database file (default: platform data directory)
    #[arg(long, global = true)]
    pub db: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new item; it is shown immediately
    Add {
        /// What kind of content this is
        #[arg(value_enum)]
        kind: KindArg,
        /// Quote text, image URL or video URL
        content: String,
    },
    /// Like an item (+5 by default), then show the next pick
    Like {
        /// Id of the item, as printed by `show` or `list`
        id: String,
    },
    /// Dislike an item (-5 by default, floored at 1), then show the next pick
    Dislike {
        /// Id of the item, as printed by `show` or `list`
        id: String,
    },
    /// Remove an item
    Remove {
        /// Id of the item to remove
        id: String,
    },
    /// Show the current item
    Show,
    /// List all items, newest first
    List,
    /// Write the collection as JSON
    Export {
        /// File to write to (default: stdout)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Merge items from a JSON export
    Import {
        /// Path to the JSON file
        path: std::path::PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Quote,
    Image,
    Video,
}

impl From<KindArg> for ItemKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Quote => ItemKind::Quote,
            KindArg::Image => ItemKind::Image,
            KindArg::Video => ItemKind::Video,
        }
    }
}
