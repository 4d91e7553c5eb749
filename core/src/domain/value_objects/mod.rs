//! Value objects representing immutable domain concepts.

pub mod caller;
pub mod password;
pub mod quote;
pub mod shipping;
pub mod stats;

// Re-export commonly used types
pub use caller::{Caller, CallerRole};
pub use password::{PasswordRequirements, PasswordStrengthResult, StrengthLevel};
pub use quote::{BuildQuote, CompatibilityIssue, IssueSeverity, QuoteLine};
pub use shipping::{DeliveryWindow, ShippingAddress, ShippingMethod, ShippingRate};
pub use stats::CatalogStats;
