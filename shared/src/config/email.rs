//! Outbound email configuration

use serde::{Deserialize, Serialize};

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Provider name ("http" or "mock")
    pub provider: String,

    /// Endpoint of the transactional mail API
    pub api_url: String,

    /// API key sent as a bearer token
    pub api_key: Option<String>,

    /// Sender address
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::from("https://api.resend.com/emails"),
            api_key: None,
            from_address: String::from("no-reply@campusboard.local"),
            from_name: String::from("CampusBoard"),
            request_timeout_secs: 10,
        }
    }
}

impl EmailConfig {
    /// Override fields from the well-known environment variables
    pub fn apply_env(&mut self) {
        if let Ok(provider) = std::env::var("EMAIL_PROVIDER") {
            self.provider = provider;
        }
        if let Ok(url) = std::env::var("EMAIL_API_URL") {
            self.api_url = url;
        }
        if let Ok(key) = std::env::var("EMAIL_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(from) = std::env::var("EMAIL_FROM_ADDRESS") {
            self.from_address = from;
        }
        if let Ok(name) = std::env::var("EMAIL_FROM_NAME") {
            self.from_name = name;
        }
    }

    /// API key, if one is set and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Formatted `Name <address>` sender
    pub fn sender(&self) -> String {
        if self.from_name.is_empty() {
            self.from_address.clone()
        } else {
            format!("{} <{}>", self.from_name, self.from_address)
        }
    }
}
