//! Request/response bodies of the HTTP API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/generate-name`.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateNameRequest {
    /// A missing field is treated like an empty one.
    #[serde(default)]
    #[validate(length(min = 1, message = "名前が入力されていません。"))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateNameResponse {
    pub new_name: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}
