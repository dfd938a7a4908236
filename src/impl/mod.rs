// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod engine_config_datasource;
        pub(crate) mod movements_csv_datasource;
        pub(crate) mod orders_csv_datasource;
        pub(crate) mod snapshot_json_datasource;
        pub(crate) mod sub_orders_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod billing_mode_model;
        pub(crate) mod engine_config_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod movement_scope_model;
        pub(crate) mod order_number_model;
        pub(crate) mod snapshot_doc_model;
        pub(crate) mod task_status_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod snapshot_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod attribution;
        pub(crate) mod engine_config;
        pub(crate) mod ledger;
        pub(crate) mod movement;
        pub(crate) mod mutation;
        pub(crate) mod order;
        pub(crate) mod sub_order;
        pub(crate) mod totals;
        pub(crate) mod warning;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod allocator;
        pub(crate) mod diff;
        pub(crate) mod reconcile;
        pub(crate) mod status;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod snapshot_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod derive_usecase;
        pub(crate) mod plan_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod status_fmt;
    pub(crate) mod summary_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::attribution::*;
        pub use crate::domain::entities::engine_config::*;
        pub use crate::domain::entities::ledger::*;
        pub use crate::domain::entities::movement::*;
        pub use crate::domain::entities::mutation::*;
        pub use crate::domain::entities::order::*;
        pub use crate::domain::entities::sub_order::*;
        pub use crate::domain::entities::totals::*;
        pub use crate::domain::entities::warning::*;
    }

    pub mod engine {
        pub use crate::domain::logic::aggregator::aggregate;
        pub use crate::domain::logic::allocator::{allocate, AttributionOutcome};
        pub use crate::domain::logic::diff::{plan_movements, PlanOutcome};
        pub use crate::domain::logic::reconcile::{effective_budget, reconcile, BUDGET_TOLERANCE};
        pub use crate::domain::logic::status::derive_status;
    }
}
