pub mod error;
pub mod tags;
pub mod category {
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod purchase {
    pub mod dto;
    pub mod routes;
}
pub mod shopping_item {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod shopping_list {
    pub mod error_mapper;
    pub mod routes;
}
pub mod suggestion {
    pub mod dto;
    pub mod routes;
}
