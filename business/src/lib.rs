pub mod application {
    pub mod purchase_history {
        pub mod get_recent;
        pub mod get_weekly_stats;
    }
    pub mod shopping_item {
        pub mod add;
        pub mod delete;
        pub mod get_list;
        pub mod quick_add;
        pub mod toggle_checked;
    }
    pub mod shopping_list {
        pub mod refresh;
        pub mod sync;
        pub mod validate_purchases;
    }
    pub mod suggestion {
        pub mod get_suggestions;
        pub mod get_top_items;
    }
}

pub mod domain {
    pub mod category;
    pub mod errors;
    pub mod logger;
    pub mod sync;
    pub mod purchase_history {
        pub mod model;
        pub mod repository;
        pub mod stats;
        pub mod use_cases {
            pub mod get_recent;
            pub mod get_weekly_stats;
        }
    }
    pub mod shopping_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod delete;
            pub mod get_list;
            pub mod quick_add;
            pub mod toggle_checked;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod settings;
        pub mod store;
        pub mod use_cases {
            pub mod refresh;
            pub mod validate_purchases;
        }
    }
    pub mod suggestion {
        pub mod aggregator;
        pub mod model;
        pub mod use_cases {
            pub mod get_suggestions;
            pub mod get_top_items;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
