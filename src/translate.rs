//! Translator adapter
//!
//! City names are entered in the source language and the geocoding endpoint
//! expects the target language. The adapter is a pass-through to an external
//! translation service with no logic of its own; the service is treated as
//! potentially unavailable and every failure maps to a connectivity error.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::RoutecastConfig;
use crate::error::RoutecastError;

/// Seam for city-name translation
pub trait Translate {
    /// Translate free text into the geocoding endpoint's language
    fn translate(&self, text: &str) -> Result<String, RoutecastError>;
}

/// Client for the public Google translate endpoint
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
    source_lang: String,
    target_lang: String,
}

impl GoogleTranslator {
    /// Create a translator from configuration
    pub fn new(config: &RoutecastConfig) -> Result<Self, RoutecastError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("Routecast/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.translate_base_url.clone(),
            source_lang: config.source_lang.clone(),
            target_lang: config.target_lang.clone(),
        })
    }
}

impl Translate for GoogleTranslator {
    fn translate(&self, text: &str) -> Result<String, RoutecastError> {
        let url = format!(
            "{}/translate_a/single?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.base_url,
            self.source_lang,
            self.target_lang,
            urlencoding::encode(text)
        );

        debug!("Translating '{}' via {}", text, self.base_url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RoutecastError::connectivity(format!(
                "translation service returned HTTP {status}"
            )));
        }

        let body: Value = response.json().map_err(|e| {
            RoutecastError::connectivity(format!("invalid translation response: {e}"))
        })?;

        // The gtx response is a nested array; the first element holds one
        // [translated, original, ...] entry per segment.
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| RoutecastError::connectivity("empty translation response"))?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translated.is_empty() {
            return Err(RoutecastError::connectivity(
                "translation response carried no text",
            ));
        }

        debug!("Translated '{}' -> '{}'", text, translated);
        Ok(translated)
    }
}

/// Pass-through translator for input already in the target language
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTranslator;

impl Translate for IdentityTranslator {
    fn translate(&self, text: &str) -> Result<String, RoutecastError> {
        Ok(text.to_string())
    }
}
