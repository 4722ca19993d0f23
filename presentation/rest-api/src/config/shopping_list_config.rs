use std::env;
use std::str::FromStr;

use anyhow::anyhow;
use business::domain::shopping_list::settings::{RollbackPolicy, ShoppingListSettings};

/// Load list limits and rollback behaviour from environment variables
///
/// Environment variables:
/// - RECENT_PURCHASES_LIMIT (default: 30)
/// - TOP_ITEMS_LIMIT (default: 20)
/// - SUGGESTIONS_LIMIT (default: 30)
/// - AUTOCOMPLETE_LIMIT (default: 5)
/// - TOGGLE_ROLLBACK: "keep" or "revert" (default: "keep")
pub fn from_env() -> anyhow::Result<ShoppingListSettings> {
    settings_from(|key| env::var(key).ok())
}

fn settings_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<ShoppingListSettings> {
    let defaults = ShoppingListSettings::default();
    Ok(ShoppingListSettings {
        recent_purchases_limit: read(
            &lookup,
            "RECENT_PURCHASES_LIMIT",
            defaults.recent_purchases_limit,
        )?,
        top_items_limit: read(&lookup, "TOP_ITEMS_LIMIT", defaults.top_items_limit)?,
        suggestions_limit: read(&lookup, "SUGGESTIONS_LIMIT", defaults.suggestions_limit)?,
        autocomplete_limit: read(&lookup, "AUTOCOMPLETE_LIMIT", defaults.autocomplete_limit)?,
        rollback_policy: read::<RollbackPolicy>(
            &lookup,
            "TOGGLE_ROLLBACK",
            defaults.rollback_policy,
        )?,
    })
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err| anyhow!("{} has an invalid value {:?}: {}", key, raw, err)),
    }
}
