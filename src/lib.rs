pub mod data {
    pub mod datasources {
        pub mod play_billing_client_datasource;
    }
    pub mod models {
        pub mod play_billing {
            pub mod billing_flow_params_model;
            pub mod purchase_model;
            pub mod sku_details_model;
        }
    }
    pub mod repositories {
        pub mod billing_bridge_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod billing_event;
        pub mod billing_feature;
        pub mod billing_flow_params;
        pub mod billing_response;
        pub mod purchase;
        pub mod sku_details;
    }
    pub mod repositories {
        pub mod billing_bridge;
    }
}

pub mod errors;
pub mod util;
