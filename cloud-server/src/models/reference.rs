//! Reference lookup models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceResponse {
    pub query: String,
    pub answer: String,
}
