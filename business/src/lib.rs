pub mod application {
    #[cfg(test)]
    pub(crate) mod test_support;
    pub mod auth {
        pub mod admin_login;
        pub mod federated_login;
        pub mod logout;
        pub mod resolve_caller;
    }
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
    }
    pub mod order {
        pub mod create;
        pub mod get_all;
        pub mod my_history;
        pub mod update_status;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod seed {
        pub mod run;
    }
    pub mod settings {
        pub mod get;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod allowlist;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod admin_login;
            pub mod federated_login;
            pub mod logout;
            pub mod resolve_caller;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod my_history;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod seed {
        pub mod fixture;
        pub mod use_cases {
            pub mod run;
        }
    }
    pub mod settings {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
