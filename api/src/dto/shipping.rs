use serde::{Deserialize, Serialize};
use validator::Validate;

use hw_core::domain::value_objects::ShippingAddress;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ShippingRatesRequest {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub city: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub street: String,

    #[serde(default)]
    #[validate(length(max = 20))]
    pub postal_code: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub country: String,
}

impl From<ShippingRatesRequest> for ShippingAddress {
    fn from(request: ShippingRatesRequest) -> Self {
        ShippingAddress::new(
            request.city,
            request.street,
            request.postal_code,
            request.country,
        )
    }
}
