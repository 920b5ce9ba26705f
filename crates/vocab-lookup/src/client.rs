//! Blocking client for the free dictionary API.
//!
//! The API returns an array of entries per word, each holding meanings
//! grouped by part of speech. Definition lines are flattened to the
//! `<part of speech> - <text>` format the dictionary codec stores; synonyms
//! and antonyms from both the meaning and definition levels are merged,
//! deduplicated in first-seen order.

use std::time::Duration;

use serde::Deserialize;

use vocab_dict::{DefinitionProvider, Lookup, LookupError};

/// Public endpoint; a word is looked up at `{base}/{word}`.
const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the free dictionary API (dictionaryapi.dev).
pub struct DictApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl DictApiClient {
    /// Build a client against the public endpoint.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Build a client against a custom endpoint (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LookupError(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

impl DefinitionProvider for DictApiClient {
    fn lookup(&self, word: &str) -> Result<Lookup, LookupError> {
        let url = format!("{}/{word}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| LookupError(e.to_string()))?;

        // The API answers 404 for unknown words; the caller treats any
        // lookup failure as a missing definition.
        if !response.status().is_success() {
            return Err(LookupError(format!("{word}: HTTP {}", response.status())));
        }

        let entries: Vec<ApiEntry> = response.json().map_err(|e| LookupError(e.to_string()))?;
        Ok(collect_lookup(&entries))
    }
}

/// One entry in the API response; a word can have several.
#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

fn collect_lookup(entries: &[ApiEntry]) -> Lookup {
    let mut lookup = Lookup::default();
    for meaning in entries.iter().flat_map(|entry| entry.meanings.iter()) {
        for definition in &meaning.definitions {
            lookup.definitions.push(format!(
                "{} - {}",
                meaning.part_of_speech, definition.definition
            ));
            push_unique(&mut lookup.synonyms, &definition.synonyms);
            push_unique(&mut lookup.antonyms, &definition.antonyms);
        }
        push_unique(&mut lookup.synonyms, &meaning.synonyms);
        push_unique(&mut lookup.antonyms, &meaning.antonyms);
    }
    lookup
}

fn push_unique(target: &mut Vec<String>, values: &[String]) {
    for value in values {
        if !target.iter().any(|existing| existing == value) {
            target.push(value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "word": "concede",
            "meanings": [
                {
                    "partOfSpeech": "verb",
                    "definitions": [
                        {
                            "definition": "admit that something is true",
                            "synonyms": ["grant"],
                            "antonyms": ["deny"]
                        },
                        {
                            "definition": "surrender or yield",
                            "synonyms": ["yield"],
                            "antonyms": []
                        }
                    ],
                    "synonyms": ["grant", "acquiesce"],
                    "antonyms": ["deny"]
                },
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "an act of conceding" }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn response_flattens_to_formatted_definition_lines() {
        let entries: Vec<ApiEntry> = serde_json::from_str(SAMPLE).unwrap();
        let lookup = collect_lookup(&entries);
        assert_eq!(
            lookup.definitions,
            [
                "verb - admit that something is true",
                "verb - surrender or yield",
                "noun - an act of conceding",
            ]
        );
    }

    #[test]
    fn synonyms_and_antonyms_merge_without_duplicates() {
        let entries: Vec<ApiEntry> = serde_json::from_str(SAMPLE).unwrap();
        let lookup = collect_lookup(&entries);
        assert_eq!(lookup.synonyms, ["grant", "yield", "acquiesce"]);
        assert_eq!(lookup.antonyms, ["deny"]);
    }

    #[test]
    fn empty_response_is_an_empty_lookup() {
        let lookup = collect_lookup(&[]);
        assert!(lookup.definitions.is_empty());
        assert!(lookup.synonyms.is_empty());
        assert!(lookup.antonyms.is_empty());
    }

    #[test]
    fn client_builds_against_a_custom_endpoint() {
        assert!(DictApiClient::with_base_url("http://localhost:9").is_ok());
    }
}
