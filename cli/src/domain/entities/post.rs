//! Post domain entity
//!
//! A single timeline item. Only the text is rendered; everything else the
//! API sends is ignored apart from the id, which shows up in logs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_str: Option<String>,
    pub text: String,
}

impl Post {
    #[cfg(test)]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id_str: None,
            text: text.into(),
        }
    }
}
