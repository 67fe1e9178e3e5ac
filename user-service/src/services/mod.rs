pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoUserStore;
pub use memory::InMemoryUserStore;
pub use self::metrics::{get_metrics, init_metrics, record_lookup, LookupOutcome};
pub use store::UserStore;
