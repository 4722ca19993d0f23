use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    ShoppingItems,
    ShoppingList,
    Purchases,
    Suggestions,
    Categories,
}
