use serde::{Deserialize, Serialize};

/// Query string of `GET /specs/normalize`
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeQuery {
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub key: String,
    pub canonical: String,
}
