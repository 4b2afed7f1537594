use dictionary_api::{get_entries, get_first_entry, DICTIONARY_API_URL};

mod dictionary;
mod dictionary_api;
pub mod page;
pub mod presentation;
mod transport;

pub use dictionary::{Phonetic, Word, WordDefinition, WordMeaning, WordQuery};
pub use presentation::{present, DefinitionItem, Directive, MeaningSection, RenderPlan};
pub use transport::{HttpResponse, Transport};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the dictionary response")]
    Deserialize(#[from] serde_json::Error),
    #[error("{0}")]
    NotFound(NotFoundError),
    #[error("malformed dictionary entry")]
    MalformedEntry(#[source] MalformedEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no definition for {word:?} (status {status})")]
pub struct NotFoundError {
    pub word: String,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedEntry {
    #[error("the response contained no entries")]
    NoEntries,
    #[error("missing `{0}` field")]
    MissingField(&'static str),
    #[error("entry has no meanings")]
    NoMeanings,
    #[error("first meaning has no definitions")]
    NoDefinitions,
}

pub struct Dictionary<T = reqwest::Client> {
    client: T,
    base_url: String,
}

impl Dictionary {
    /// Builds a dictionary backed by reqwest with an optional request timeout.
    pub fn with_timeout(
        base_url: &str,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, DictionaryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(DictionaryError::Fetch)?;
        Ok(Self::with_client(client, base_url))
    }
}

impl<T: Transport> Dictionary<T> {
    pub fn with_client(client: T, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_owned(),
        }
    }

    /// All entries the service returned for `word`, in service order.
    pub async fn lookup(&self, word: &str) -> Result<Vec<Word>, DictionaryError> {
        get_entries(&self.client, &self.base_url, word).await
    }

    /// The first entry for `word`; later entries are never inspected.
    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_first_entry(&self.client, &self.base_url, word).await
    }
}

/// Default endpoint of the dictionary service.
pub fn default_api_url() -> &'static str {
    DICTIONARY_API_URL
}
