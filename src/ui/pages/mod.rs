//! Application pages
//!
//! - Home (the scroll site)
//! - Custom plan builder
//! - Not found

mod custom_plan;
mod home;
mod not_found;

pub use custom_plan::CustomPlanPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
