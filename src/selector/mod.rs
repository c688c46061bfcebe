//! Weighted random item selection.
//!
//! Each item's score acts as its relative weight: an item with score 30 is
//! three times as likely to come up as one with score 10. A draw walks the
//! collection in its stored order, so a given random value always lands on
//! the same item. When the draw lands on the item shown last time and there
//! is any alternative, the draw is repeated a bounded number of times before
//! falling back to a deterministic different pick.

use rand::Rng;

use crate::domain::Item;

/// How many times a draw that hit `previous_id` is repeated before giving
/// up and picking a different item deterministically.
pub const MAX_REDRAWS: usize = 8;

/// Floor for the weight used in sampling. Scores are kept >= 1 by every
/// store mutation, but a corrupted or externally supplied value must not
/// break the draw.
fn effective_weight(item: &Item) -> u64 {
    item.score.max(1) as u64
}

/// Pick the next item to display.
///
/// Returns `None` only for an empty collection. For a single-item
/// collection the sole item is returned even when it matches
/// `previous_id`. Never mutates the collection.
pub fn select_next<'a, R: Rng>(
    items: &'a [Item],
    previous_id: Option<&str>,
    rng: &mut R,
) -> Option<&'a Item> {
    if items.is_empty() {
        return None;
    }
    if items.len() == 1 {
        return items.first();
    }

    for _ in 0..MAX_REDRAWS {
        let candidate = weighted_pick(items, rng);
        if previous_id != Some(candidate.id.as_str()) {
            return Some(candidate);
        }
    }

    // Redraw budget spent: take the first item that differs from the one
    // shown last. With unique ids and len > 1 this always finds one.
    items
        .iter()
        .find(|item| previous_id != Some(item.id.as_str()))
        .or_else(|| items.first())
}

/// One weighted draw over the collection, in collection order.
///
/// Item `i` is picked when the draw falls in
/// `[prefix_weight(i), prefix_weight(i) + weight(i))`, giving each item a
/// probability of exactly `weight / total`.
fn weighted_pick<'a, R: Rng>(items: &'a [Item], rng: &mut R) -> &'a Item {
    let total: u64 = items.iter().map(effective_weight).sum();
    let mut point = rng.gen_range(0..total);

    for item in items {
        let weight = effective_weight(item);
        if point < weight {
            return item;
        }
        point -= weight;
    }

    // Unreachable for total > 0, kept as a guard against a bad Rng impl.
    &items[0]
}
