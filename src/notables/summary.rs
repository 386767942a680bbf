//! # AI biography summaries
//!
//! Summaries come from an external text generator behind [`SummaryGenerator`].
//! Any failure (transport, HTTP status, API error, empty answer) collapses to
//! [`NotablesError::SummaryUnavailable`]; the detail goes to the log and the
//! user only ever sees the localized `ai_summary_error` label.
//!
//! Requests are asynchronous and may finish after the user has moved on.
//! [`SummaryTracker`] is the presentation cache: it hands out a ticket per
//! request and only applies a result whose ticket is still current **and**
//! whose person is still the active selection. Everything else is discarded.

use crate::error::{NotablesError, Result};
use crate::i18n::resolve;
use crate::model::{Language, Personality};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("{0} not set")]
    MissingApiKey(&'static str),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("empty response")]
    EmptyResponse,
}

impl From<SummaryError> for NotablesError {
    fn from(_: SummaryError) -> Self {
        NotablesError::SummaryUnavailable
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub person_id: u32,
    pub name: String,
    pub bio: String,
    pub language: Language,
}

impl SummaryRequest {
    pub fn for_person(person: &Personality, language: Language) -> Self {
        Self {
            person_id: person.id,
            name: resolve(&person.name, language).to_string(),
            bio: resolve(&person.bio, language).to_string(),
            language,
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Provide a concise, engaging summary (around 100 words) in {} for the biography of {}. Biography: \"{}\"",
            self.language.code(),
            self.name,
            self.bio
        )
    }
}

#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate(&self, request: &SummaryRequest) -> std::result::Result<String, SummaryError>;
}

/// Runs `generator`, logging the failure detail and returning only `SummaryUnavailable`.
pub async fn summarize<G: SummaryGenerator + ?Sized>(
    generator: &G,
    request: &SummaryRequest,
) -> Result<String> {
    match generator.generate(request).await {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(person = request.person_id, error = %e, "summary generation failed");
            Err(e.into())
        }
    }
}

// ============================================================================
// Gemini
// ============================================================================

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

pub struct GeminiSummarizer {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiSummarizer {
    pub fn new(api_key: String, model: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn from_env(model: impl Into<String>, timeout_secs: u64) -> std::result::Result<Self, SummaryError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(SummaryError::MissingApiKey(API_KEY_VAR))?;
        Ok(Self::new(api_key, model, timeout_secs))
    }
}

fn extract_text(response: GenerateResponse) -> std::result::Result<String, SummaryError> {
    if let Some(error) = response.error {
        return Err(SummaryError::Api(error.message));
    }

    let text: String = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(SummaryError::EmptyResponse)
    } else {
        Ok(text)
    }
}

#[async_trait]
impl SummaryGenerator for GeminiSummarizer {
    async fn generate(&self, request: &SummaryRequest) -> std::result::Result<String, SummaryError> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: request.prompt(),
                }],
            }],
        };
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        debug!(person = request.person_id, model = %self.model, "requesting summary");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(SummaryError::Api(format!("{} - {}", status, detail)));
        }

        let parsed: GenerateResponse = response.json().await?;
        extract_text(parsed)
    }
}

// ============================================================================
// Presentation cache
// ============================================================================

/// Identifies one summary request for one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SummaryTicket {
    pub person_id: u32,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryState {
    Pending(SummaryTicket),
    Ready(String),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Discarded,
}

#[derive(Debug, Default)]
pub struct SummaryTracker {
    entries: HashMap<u32, SummaryState>,
    next_seq: u64,
}

impl SummaryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, person_id: u32) -> Option<&SummaryState> {
        self.entries.get(&person_id)
    }

    pub fn is_pending(&self, person_id: u32) -> bool {
        matches!(self.entries.get(&person_id), Some(SummaryState::Pending(_)))
    }

    /// Starts a request for `person_id`, superseding any earlier one.
    pub fn begin(&mut self, person_id: u32) -> SummaryTicket {
        self.next_seq += 1;
        let ticket = SummaryTicket {
            person_id,
            seq: self.next_seq,
        };
        self.entries.insert(person_id, SummaryState::Pending(ticket));
        ticket
    }

    /// Applies `result` if `ticket` is still the live request and its person is
    /// still `active`. A stale or unselected result is dropped.
    pub fn complete(
        &mut self,
        ticket: SummaryTicket,
        result: Result<String>,
        active: Option<u32>,
    ) -> Completion {
        let is_live = matches!(
            self.entries.get(&ticket.person_id),
            Some(SummaryState::Pending(t)) if *t == ticket
        );
        if !is_live {
            debug!(person = ticket.person_id, "discarding superseded summary");
            return Completion::Discarded;
        }

        if active != Some(ticket.person_id) {
            self.entries.remove(&ticket.person_id);
            debug!(person = ticket.person_id, "discarding summary for deselected person");
            return Completion::Discarded;
        }

        let state = match result {
            Ok(text) => SummaryState::Ready(text),
            Err(_) => SummaryState::Failed,
        };
        self.entries.insert(ticket.person_id, state);
        Completion::Applied
    }

    /// Drops a pending request. Returns whether there was one.
    pub fn cancel(&mut self, person_id: u32) -> bool {
        if self.is_pending(person_id) {
            self.entries.remove(&person_id);
            true
        } else {
            false
        }
    }

    /// Forgets a finished result so it can be generated again.
    pub fn clear(&mut self, person_id: u32) {
        self.entries.remove(&person_id);
    }
}
