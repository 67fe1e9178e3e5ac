pub mod health;
pub mod users;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use users::{get_user, handle, LookupRequest, LookupResponse};
