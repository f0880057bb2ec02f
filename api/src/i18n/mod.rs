use actix_web::{http::header, HttpRequest};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_MESSAGES: &str = include_str!("../../i18n/messages.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    pub en: String,
    pub ko: String,
    pub code: String,
    pub http_status: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ko: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub errors: HashMap<String, ErrorMessage>,
    #[serde(default)]
    pub messages: HashMap<String, LocalizedText>,
}

pub static MESSAGES: Lazy<Messages> = Lazy::new(|| {
    toml::from_str(DEFAULT_MESSAGES).unwrap_or_else(|e| {
        log::error!("Failed to parse embedded messages: {}", e);
        Messages::default()
    })
});

/// Language preference for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Korean,
}

impl Language {
    /// Detect language preference from the Accept-Language header
    pub fn from_request(req: &HttpRequest) -> Self {
        Self::from_header(
            req.headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok()),
        )
    }

    /// Pick the highest-weighted supported language, e.g. "ko-KR,ko;q=0.9,en;q=0.8"
    pub fn from_header(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Language::English;
        };

        let mut preferred = Language::English;
        let mut max_quality = 0.0_f32;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim().to_lowercase();
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let candidate = if tag.starts_with("ko") {
                Language::Korean
            } else if tag.starts_with("en") {
                Language::English
            } else {
                continue;
            };

            if quality > max_quality {
                preferred = candidate;
                max_quality = quality;
            }
        }

        preferred
    }
}

/// Look up an error message: (code, localized text, http status)
pub fn get_error_message(key: &str, lang: Language) -> Option<(String, String, u16)> {
    MESSAGES.errors.get(key).map(|msg| {
        let text = match lang {
            Language::English => msg.en.clone(),
            Language::Korean => msg.ko.clone(),
        };
        (msg.code.clone(), text, msg.http_status)
    })
}

/// Look up a success message, falling back to the key itself
pub fn get_message(key: &str, lang: Language) -> String {
    MESSAGES
        .messages
        .get(key)
        .map(|msg| match lang {
            Language::English => msg.en.clone(),
            Language::Korean => msg.ko.clone(),
        })
        .unwrap_or_else(|| key.to_string())
}

pub fn format_message(template: &str, params: &[(&str, String)]) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
