use crate::dictionary::WordQuery;
use crate::presentation::{present, Directive};
use crate::transport::Transport;
use crate::{Dictionary, DictionaryError};

pub const NOT_FOUND_MESSAGE: &str = "Word not found. Try another one.";
pub const MALFORMED_MESSAGE: &str = "The dictionary returned an incomplete entry for this word.";

/// Runs one interaction: lookup, then presentation.
///
/// Returns `None` for an empty query without touching the network. Every
/// failure is reduced to a single error banner.
pub async fn look_up<T: Transport>(
    dictionary: &Dictionary<T>,
    query: &WordQuery,
) -> Option<Vec<Directive>> {
    if query.is_empty() {
        return None;
    }
    let result = dictionary
        .get_definition(query.term())
        .await
        .and_then(|word| present(&word));
    Some(match result {
        Ok(plan) => plan.directives(),
        Err(error) => {
            let cause = std::error::Error::source(&error).map(ToString::to_string);
            tracing::warn!(term = query.term(), %error, ?cause, "lookup failed");
            vec![Directive::Error(banner_for(&error).to_owned())]
        }
    })
}

fn banner_for(error: &DictionaryError) -> &'static str {
    match error {
        DictionaryError::NotFound(_) | DictionaryError::Fetch(_) => NOT_FOUND_MESSAGE,
        DictionaryError::Deserialize(_) | DictionaryError::MalformedEntry(_) => MALFORMED_MESSAGE,
    }
}
