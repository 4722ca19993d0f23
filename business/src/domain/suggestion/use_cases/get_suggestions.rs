use crate::domain::suggestion::model::ItemSuggestion;

pub struct GetSuggestionsParams {
    /// Autocomplete input. `None` returns the full deduplicated list.
    pub query: Option<String>,
}

pub trait GetSuggestionsUseCase: Send + Sync {
    fn execute(&self, params: GetSuggestionsParams) -> Vec<ItemSuggestion>;
}
