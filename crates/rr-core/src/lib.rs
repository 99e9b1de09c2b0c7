//! recipe-radar/crates/rr-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Recipe Radar.

pub mod analytics;
pub mod community;
pub mod cooking;
pub mod discovery;
pub mod error;
pub mod models;
pub mod recipes;
pub mod store;
pub mod traits;
pub mod users;
pub mod validation;

// Re-exporting for easier access in other crates
pub use analytics::AnalyticsReport;
pub use cooking::CookingFlow;
pub use error::*;
pub use models::*;
pub use store::Store;
pub use traits::*;
