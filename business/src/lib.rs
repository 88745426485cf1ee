pub mod application {
    pub mod catalog {
        pub mod filter;
        pub mod get_by_id;
        pub mod get_categories;
        pub mod get_filter_options;
        pub mod get_products;
        pub mod refresh;
        pub mod search;
        pub mod set_favorite;
        pub mod set_stock;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod document;
        pub mod fallback;
        pub mod loader;
        pub mod model;
        pub mod query;
        pub mod source;
        pub mod store;
        pub mod value_objects;
        pub mod use_cases {
            pub mod filter;
            pub mod get_by_id;
            pub mod get_categories;
            pub mod get_filter_options;
            pub mod get_products;
            pub mod refresh;
            pub mod search;
            pub mod set_favorite;
            pub mod set_stock;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
