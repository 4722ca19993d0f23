pub mod change_feed;
pub mod db;
pub mod purchase_history {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_item {
    pub mod entity;
    pub mod repository;
}
