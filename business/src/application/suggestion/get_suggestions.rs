use std::sync::Arc;

use crate::domain::shopping_list::settings::ShoppingListSettings;
use crate::domain::shopping_list::store::ShoppingListStore;
use crate::domain::suggestion::aggregator::{filter_suggestions, recent_suggestions};
use crate::domain::suggestion::model::ItemSuggestion;
use crate::domain::suggestion::use_cases::get_suggestions::{
    GetSuggestionsParams, GetSuggestionsUseCase,
};

pub struct GetSuggestionsUseCaseImpl {
    pub store: Arc<ShoppingListStore>,
    pub settings: ShoppingListSettings,
}

impl GetSuggestionsUseCase for GetSuggestionsUseCaseImpl {
    fn execute(&self, params: GetSuggestionsParams) -> Vec<ItemSuggestion> {
        let suggestions = recent_suggestions(
            &self.store.history(),
            &self.store.weekly_history(),
            self.settings.suggestions_limit,
        );

        match params.query {
            Some(query) => {
                filter_suggestions(&suggestions, &query, self.settings.autocomplete_limit)
            }
            None => suggestions,
        }
    }
}
