//! Dictionary definitions for finished games
//!
//! Looking up a definition is best effort: every failure is logged and
//! reported to the caller as "no definition".

use log::debug;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Free dictionary API, queried with the lowercase word appended
pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Something that may know what a word means
pub trait DefinitionLookup {
    /// Definition of `word`, or `None` if there is none to show
    fn definition(&self, word: &str) -> Option<String>;
}

/// Lookup that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl DefinitionLookup for NoDefinitions {
    fn definition(&self, _word: &str) -> Option<String> {
        None
    }
}

/// Reasons a lookup comes back empty
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no definition found")]
    NotFound,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meaning {
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    definition: String,
}

/// Lookup backed by the free dictionary web API
#[derive(Debug, Clone)]
pub struct DictionaryApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl DictionaryApi {
    /// Client for the public dictionary API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    /// Client for a dictionary API served from another address
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn fetch(&self, word: &str) -> Result<String, LookupError> {
        let url = format!("{}{}", self.base_url, word.to_lowercase());
        let body = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .text()?;

        parse_definition(&body)
    }
}

impl DefinitionLookup for DictionaryApi {
    fn definition(&self, word: &str) -> Option<String> {
        match self.fetch(word) {
            Ok(definition) => Some(definition),
            Err(e) => {
                debug!("No definition for {word}: {e}");
                None
            }
        }
    }
}

/// First definition in a dictionary API response, tagged with its part of speech
///
/// # Errors
///
/// Returns `LookupError::Parse` for malformed JSON and
/// `LookupError::NotFound` when the response holds no definition.
pub fn parse_definition(body: &str) -> Result<String, LookupError> {
    let entries: Vec<Entry> = serde_json::from_str(body)?;

    entries
        .iter()
        .flat_map(|entry| &entry.meanings)
        .find_map(|meaning| {
            let sense = meaning.definitions.first()?;
            let text = sense.definition.trim();
            if text.is_empty() {
                return None;
            }
            Some(match &meaning.part_of_speech {
                Some(part) => format!("({part}) {text}"),
                None => text.to_string(),
            })
        })
        .ok_or(LookupError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"[
        {
            "word": "zebra",
            "phonetics": [],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        {"definition": "An African animal with black and white stripes.", "synonyms": []},
                        {"definition": "A zebra crossing."}
                    ]
                },
                {
                    "partOfSpeech": "verb",
                    "definitions": [{"definition": "To mark with stripes."}]
                }
            ]
        }
    ]"#;

    #[test]
    fn parse_takes_first_definition() {
        assert_eq!(
            parse_definition(RESPONSE).unwrap(),
            "(noun) An African animal with black and white stripes."
        );
    }

    #[test]
    fn parse_skips_meanings_without_definitions() {
        let body = r#"[{"meanings": [
            {"partOfSpeech": "noun", "definitions": []},
            {"definitions": [{"definition": "Something else."}]}
        ]}]"#;
        assert_eq!(parse_definition(body).unwrap(), "Something else.");
    }

    #[test]
    fn parse_not_found_response() {
        let body = r#"{"title": "No Definitions Found", "message": "Sorry pal"}"#;
        assert!(matches!(parse_definition(body), Err(LookupError::Parse(_))));
        assert!(matches!(parse_definition("[]"), Err(LookupError::NotFound)));
    }

    #[test]
    fn no_definitions_is_always_absent() {
        assert_eq!(NoDefinitions.definition("ZEBRA"), None);
    }

    #[test]
    fn unreachable_api_is_absent() {
        let api = DictionaryApi::with_base_url("http://127.0.0.1:9/").unwrap();
        assert_eq!(api.definition("ZEBRA"), None);
    }
}
