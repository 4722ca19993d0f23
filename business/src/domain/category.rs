/// Display metadata attached to a category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

/// Category assigned when none is given, and used to render unknown ones.
pub const DEFAULT_CATEGORY: &str = "Other";

const CATEGORIES: [CategoryInfo; 10] = [
    CategoryInfo {
        name: "Fruits & Vegetables",
        emoji: "🥬",
        color: "green",
    },
    CategoryInfo {
        name: "Meat & Fish",
        emoji: "🥩",
        color: "red",
    },
    CategoryInfo {
        name: "Dairy",
        emoji: "🧀",
        color: "yellow",
    },
    CategoryInfo {
        name: "Bakery",
        emoji: "🥖",
        color: "amber",
    },
    CategoryInfo {
        name: "Drinks",
        emoji: "🥤",
        color: "blue",
    },
    CategoryInfo {
        name: "Pantry",
        emoji: "🫙",
        color: "orange",
    },
    CategoryInfo {
        name: "Frozen",
        emoji: "🧊",
        color: "cyan",
    },
    CategoryInfo {
        name: "Hygiene",
        emoji: "🧴",
        color: "purple",
    },
    CategoryInfo {
        name: "Household",
        emoji: "🏠",
        color: "pink",
    },
    CategoryInfo {
        name: DEFAULT_CATEGORY,
        emoji: "📦",
        color: "gray",
    },
];

/// All known categories in display order. The fallback is always last.
pub fn all_categories() -> &'static [CategoryInfo] {
    &CATEGORIES
}

/// Looks up a category by exact name, falling back to [`DEFAULT_CATEGORY`].
///
/// History rows keep whatever category text they were recorded with, so an
/// unknown name is expected here and never an error.
pub fn category_info(name: &str) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|category| category.name == name)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.iter().any(|category| category.name == name)
}

/// Normalizes an optional category input: blank or missing becomes the default.
pub fn resolve_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}
