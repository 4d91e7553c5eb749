//! Business services containing domain logic and use cases.

pub mod configuration;
pub mod configurator;
pub mod password;
pub mod shipping;
pub mod specs;
pub mod stats;

// Re-export commonly used types
pub use configuration::{ConfigurationService, NewConfiguration};
pub use configurator::{
    check_compatibility, estimate_power_draw, recommended_psu_wattage, ConfiguratorService,
    PsuTier, SelectedComponent,
};
pub use password::evaluate_password_strength;
pub use shipping::{calculate_shipping_rates, ShippingCalculator, ShippingRateTable};
pub use specs::{normalize_spec_key, normalize_specifications};
pub use stats::{Clock, ManualClock, StatsService, SystemClock, TtlCache};
