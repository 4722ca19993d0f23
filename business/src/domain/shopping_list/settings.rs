/// What happens to the local snapshot when an optimistic mutation is
/// rejected by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollbackPolicy {
    /// Keep the optimistic change and surface the error. The next resync
    /// reconciles the snapshot.
    #[default]
    KeepOptimistic,
    /// Undo the local change before surfacing the error.
    Revert,
}

impl std::fmt::Display for RollbackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollbackPolicy::KeepOptimistic => write!(f, "keep"),
            RollbackPolicy::Revert => write!(f, "revert"),
        }
    }
}

impl std::str::FromStr for RollbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(RollbackPolicy::KeepOptimistic),
            "revert" => Ok(RollbackPolicy::Revert),
            _ => Err(format!("Invalid rollback policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListSettings {
    pub recent_purchases_limit: usize,
    pub top_items_limit: usize,
    pub suggestions_limit: usize,
    pub autocomplete_limit: usize,
    pub rollback_policy: RollbackPolicy,
}

impl Default for ShoppingListSettings {
    fn default() -> Self {
        Self {
            recent_purchases_limit: 30,
            top_items_limit: 20,
            suggestions_limit: 30,
            autocomplete_limit: 5,
            rollback_policy: RollbackPolicy::default(),
        }
    }
}
