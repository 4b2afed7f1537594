// https://dictionaryapi.dev/ - free, no key, english only
// responds with an array of entries for the word, or a non-200 status with a
// "No Definitions Found" object

use serde::Deserialize;

use crate::dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
use crate::transport::Transport;
use crate::{DictionaryError, MalformedEntry, NotFoundError};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub(crate) fn entry_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    )
}

pub(crate) async fn get_entries<T: Transport + ?Sized>(
    transport: &T,
    base_url: &str,
    word: &str,
) -> Result<Vec<Word>, DictionaryError> {
    fetch_entries(transport, base_url, word)
        .await?
        .into_iter()
        .map(convert_entry)
        .collect()
}

/// Converts only the first entry; the rest of the array may be anything.
pub(crate) async fn get_first_entry<T: Transport + ?Sized>(
    transport: &T,
    base_url: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    let first = fetch_entries(transport, base_url, word)
        .await?
        .into_iter()
        .next()
        .ok_or(DictionaryError::MalformedEntry(MalformedEntry::NoEntries))?;
    convert_entry(first)
}

async fn fetch_entries<T: Transport + ?Sized>(
    transport: &T,
    base_url: &str,
    word: &str,
) -> Result<Vec<serde_json::Value>, DictionaryError> {
    let url = entry_url(base_url, word);
    tracing::debug!(%url, "requesting dictionary entry");
    let res = transport.get(&url).await?;
    if res.status != 200 {
        tracing::debug!(status = res.status, word, "dictionary lookup missed");
        return Err(DictionaryError::NotFound(NotFoundError {
            word: word.to_owned(),
            status: res.status,
        }));
    }
    let entries: Vec<serde_json::Value> = serde_json::from_str(&res.body)?;
    if entries.is_empty() {
        return Err(DictionaryError::MalformedEntry(MalformedEntry::NoEntries));
    }
    Ok(entries)
}

fn convert_entry(value: serde_json::Value) -> Result<Word, DictionaryError> {
    let entry: ApiWord = serde_json::from_value(value)?;
    Word::try_from(entry).map_err(DictionaryError::MalformedEntry)
}

#[derive(Debug, Deserialize)]
struct ApiWord {
    word: Option<String>,
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    meanings: Option<Vec<ApiMeaning>>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    text: Option<String>,
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: Option<String>,
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

impl TryFrom<ApiWord> for Word {
    type Error = MalformedEntry;

    fn try_from(value: ApiWord) -> Result<Self, Self::Error> {
        let word = value.word.ok_or(MalformedEntry::MissingField("word"))?;
        let meanings = value
            .meanings
            .ok_or(MalformedEntry::MissingField("meanings"))?
            .into_iter()
            .map(WordMeaning::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Word {
            word,
            phonetic: value.phonetic,
            phonetics: value
                .phonetics
                .into_iter()
                .map(|phonetic| Phonetic {
                    text: phonetic.text,
                    audio: phonetic.audio,
                })
                .collect(),
            meanings,
        })
    }
}

impl TryFrom<ApiMeaning> for WordMeaning {
    type Error = MalformedEntry;

    fn try_from(value: ApiMeaning) -> Result<Self, Self::Error> {
        let part_of_speech = value
            .part_of_speech
            .ok_or(MalformedEntry::MissingField("partOfSpeech"))?;
        let definitions = value
            .definitions
            .into_iter()
            .map(|definition| -> Result<WordDefinition, MalformedEntry> {
                Ok(WordDefinition {
                    definition: definition
                        .definition
                        .ok_or(MalformedEntry::MissingField("definition"))?,
                    example: definition.example,
                    synonyms: definition.synonyms,
                    antonyms: definition.antonyms,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WordMeaning {
            part_of_speech,
            definitions,
            synonyms: value.synonyms,
            antonyms: value.antonyms,
        })
    }
}
