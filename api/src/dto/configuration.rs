use serde::{Deserialize, Serialize};
use validator::Validate;

use hw_core::services::NewConfiguration;

use super::configurator::{to_items, ItemRequest};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateConfigurationRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 32), nested)]
    pub items: Vec<ItemRequest>,

    #[serde(default)]
    pub is_public: bool,
}

impl From<CreateConfigurationRequest> for NewConfiguration {
    fn from(request: CreateConfigurationRequest) -> Self {
        NewConfiguration {
            items: to_items(&request.items),
            name: request.name,
            description: request.description,
            is_public: request.is_public,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviseConfigurationRequest {
    #[validate(length(min = 1, max = 32), nested)]
    pub items: Vec<ItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RejectConfigurationRequest {
    #[validate(length(min = 1, max = 1000))]
    pub note: String,
}

/// Query string of paginated listings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
