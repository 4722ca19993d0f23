use std::collections::HashSet;

use crate::domain::purchase_history::model::{PurchaseHistoryEntry, TopItemStat};

use super::model::{ItemSuggestion, RankedTopItem};

const PODIUM_SIZE: usize = 3;

/// Key used to compare item names: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Merges recent and weekly history (recent first) into a deduplicated
/// suggestion list.
///
/// The first occurrence of a normalized name wins, so the category of the
/// most recent purchase is kept. Blank names are skipped.
pub fn recent_suggestions(
    history: &[PurchaseHistoryEntry],
    weekly_history: &[PurchaseHistoryEntry],
    limit: usize,
) -> Vec<ItemSuggestion> {
    let mut seen = HashSet::new();
    history
        .iter()
        .chain(weekly_history)
        .filter(|entry| !entry.item_name.trim().is_empty())
        .filter(|entry| seen.insert(normalize_name(&entry.item_name)))
        .take(limit)
        .map(|entry| ItemSuggestion {
            name: entry.item_name.trim().to_string(),
            category: entry.category.clone(),
        })
        .collect()
}

/// Autocomplete filter: case-insensitive substring match on the name.
/// A blank query matches nothing.
pub fn filter_suggestions(
    suggestions: &[ItemSuggestion],
    query: &str,
    limit: usize,
) -> Vec<ItemSuggestion> {
    let needle = normalize_name(query);
    if needle.is_empty() {
        return vec![];
    }

    suggestions
        .iter()
        .filter(|suggestion| suggestion.name.to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

/// Ranks backend-supplied stats for display. Order is kept as received.
pub fn top_items_view(stats: &[TopItemStat]) -> Vec<RankedTopItem> {
    stats
        .iter()
        .enumerate()
        .map(|(index, stat)| RankedTopItem {
            rank: index + 1,
            item_name: stat.item_name.clone(),
            count: stat.count,
            podium: index < PODIUM_SIZE,
        })
        .collect()
}
