use serde::{Deserialize, Serialize};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend. Empty means same-origin relative paths,
    /// which is how the client is normally served.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Join an endpoint path onto the configured base, avoiding a double
    /// slash when a base is set.
    pub fn endpoint(&self, path: &str) -> String {
        if self.api_base.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", self.api_base.trim_end_matches('/'), path)
        }
    }
}
