use crate::domain::shopping_item::model::ShoppingItem;

/// The active list split the way it is displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingListView {
    pub unchecked: Vec<ShoppingItem>,
    pub checked: Vec<ShoppingItem>,
}

impl ShoppingListView {
    pub fn total(&self) -> usize {
        self.unchecked.len() + self.checked.len()
    }
}

pub trait GetShoppingListUseCase: Send + Sync {
    fn execute(&self) -> ShoppingListView;
}
