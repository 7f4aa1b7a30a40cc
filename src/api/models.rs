use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PlayerParams {
    pub name: Option<String>,
    pub game: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
