//! Character fetching.
//!
//! One GET per page mount, no retry, no pagination. Failures are absorbed by
//! [`load_characters`] and surface only as an empty list plus a log line.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ExplorerError, ExplorerResult};
use crate::types::{Character, CharacterPage};

/// Public character endpoint; only its first page is ever shown.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// Something that can produce one batch of characters.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn fetch_characters(&self) -> ExplorerResult<Vec<Character>>;
}

/// Fetches the character page over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCharacterSource {
    client: Client,
    endpoint: String,
}

impl HttpCharacterSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpCharacterSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    async fn fetch_characters(&self) -> ExplorerResult<Vec<Character>> {
        let resp = self.client.get(&self.endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExplorerError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = resp.bytes().await?;
        let page: CharacterPage = serde_json::from_slice(&body)?;

        tracing::debug!(
            total = page.info.count,
            pages = page.info.pages,
            received = page.results.len(),
            "Character page decoded"
        );

        Ok(page.results)
    }
}

/// Fetch once, turning any failure into an empty list.
pub async fn load_characters(source: &dyn CharacterSource) -> Vec<Character> {
    match source.fetch_characters().await {
        Ok(characters) => {
            tracing::info!(count = characters.len(), "Loaded characters");
            characters
        }
        Err(e) => {
            tracing::error!(error = %e, "Error al cargar personajes");
            Vec::new()
        }
    }
}

/// Loading flag plus the records of the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterFeed {
    loading: bool,
    characters: Vec<Character>,
}

impl Default for CharacterFeed {
    /// A fresh page starts out loading.
    fn default() -> Self {
        Self {
            loading: true,
            characters: Vec::new(),
        }
    }
}

impl CharacterFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as in flight; the grid shows only the spinner until [`finish`](Self::finish).
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Store the outcome of a fetch and clear the loading flag.
    pub fn finish(&mut self, characters: Vec<Character>) {
        self.characters = characters;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }
}
