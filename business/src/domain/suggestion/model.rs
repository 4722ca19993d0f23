/// An autocomplete candidate taken from purchase history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSuggestion {
    pub name: String,
    pub category: String,
}

/// A top item as displayed, with its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTopItem {
    pub rank: usize,
    pub item_name: String,
    pub count: i64,
    /// First three ranks are highlighted.
    pub podium: bool,
}
