use std::path::Path;

use crate::app::Result;
use crate::domain::{Item, ItemKind};
use crate::session::Session;

pub fn add_item(session: &mut Session, kind: ItemKind, content: &str) -> Result<()> {
    match session.add(kind, content) {
        Some(item) => {
            println!("Added {} {}", item.kind.as_str(), short_id(&item.id));
            print_item(item);
        }
        None => {
            println!("Nothing to add: content is empty");
        }
    }
    Ok(())
}

pub fn like_item(session: &mut Session, id: &str) -> Result<()> {
    let Some(id) = resolve_id(session, id) else {
        println!("No item matching {}", id);
        return Ok(());
    };

    session.like(&id);
    let score = session.get(&id).map(|i| i.score).unwrap_or(1);
    println!("Liked {} (score now {})", short_id(&id), score);
    show_current(session, "Up next:");
    Ok(())
}

pub fn dislike_item(session: &mut Session, id: &str) -> Result<()> {
    let Some(id) = resolve_id(session, id) else {
        println!("No item matching {}", id);
        return Ok(());
    };

    session.dislike(&id);
    let score = session.get(&id).map(|i| i.score).unwrap_or(1);
    println!("Disliked {} (score now {})", short_id(&id), score);
    show_current(session, "Up next:");
    Ok(())
}

pub fn remove_item(session: &mut Session, id: &str) -> Result<()> {
    let Some(id) = resolve_id(session, id) else {
        println!("No item matching {}", id);
        return Ok(());
    };

    session.remove(&id);
    println!("Removed {}", short_id(&id));
    Ok(())
}

pub fn show(session: &mut Session) -> Result<()> {
    show_current(session, "Current item:");
    Ok(())
}

pub fn list_items(session: &Session) -> Result<()> {
    let items = session.items_by_newest();

    if items.is_empty() {
        println!("No items");
        return Ok(());
    }

    for item in items {
        println!(
            "{}  {:>5}  {:<5}  {}  {}",
            short_id(&item.id),
            item.score,
            item.kind.as_str(),
            item.created_at.format("%Y-%m-%d"),
            item.display_content(60)
        );
    }

    Ok(())
}

pub fn export_items(session: &Session, output: Option<&Path>) -> Result<()> {
    let items: Vec<&Item> = session.items_by_newest();
    let json = serde_json::to_string_pretty(&items)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("Exported {} items to {}", items.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

pub fn import_items(session: &mut Session, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let incoming: Vec<Item> = serde_json::from_str(&content)?;

    if incoming.is_empty() {
        println!("No items found in {}", path.display());
        return Ok(());
    }

    let (added, skipped) = session.import(incoming);
    println!(
        "Import complete: {} added, {} skipped (already exist)",
        added, skipped
    );

    Ok(())
}

fn show_current(session: &mut Session, heading: &str) {
    session.ensure_selection();
    match session.current() {
        Some(item) => {
            println!("{}", heading);
            print_item(item);
        }
        None => println!("No items yet. Add a quote, image, or video to get started."),
    }
}

fn print_item(item: &Item) {
    println!("  [{}] {}", item.kind.as_str(), item.content);
    println!("  id: {}  score: {}", short_id(&item.id), item.score);
}

/// Accept either a full id or a unique prefix of one.
fn resolve_id(session: &Session, id: &str) -> Option<String> {
    if session.get(id).is_some() {
        return Some(id.to_string());
    }

    let mut matches = session
        .items_by_newest()
        .into_iter()
        .filter(|item| item.id.starts_with(id));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None; // ambiguous prefix
    }
    Some(first.id.clone())
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}
