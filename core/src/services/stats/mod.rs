//! Storefront statistics, served through an expiring cache

mod cache;
mod service;


pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use service::StatsService;
