#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<WordMeaning>,
}

impl Word {
    /// The definition shown first: the first definition of the first meaning.
    pub fn primary_definition(&self) -> Option<&WordDefinition> {
        self.meanings.first()?.definitions.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMeaning {
    /// Free-form label as sent by the service ("noun", "verb", "abbreviation", ...).
    pub part_of_speech: String,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// A single user query, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordQuery {
    term: String,
}

impl WordQuery {
    pub fn new(input: &str) -> Self {
        Self {
            term: input.trim().to_owned(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}
