use crate::dictionary::{Phonetic, Word, WordMeaning};
use crate::{DictionaryError, MalformedEntry};

pub const NO_PRONUNCIATION: &str = "N/A";
pub const NO_EXAMPLE_MESSAGE: &str = "No example available for this word.";
pub const MORE_MEANINGS_LABEL: &str = "Show more meanings";
pub const AUDIO_FORMAT: &str = "audio/mp3";

/// Definitions shown per part of speech in the secondary meanings block.
const DEFINITIONS_PER_MEANING: usize = 3;

/// One display instruction for a render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Heading(String),
    /// Pronunciation text, or [`NO_PRONUNCIATION`].
    Pronunciation(String),
    Info(String),
    Success(String),
    Error(String),
    Audio { url: String, format: String },
    Example(String),
    /// A collapsed region; the surface decides when to open it.
    Expander {
        label: String,
        sections: Vec<MeaningSection>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningSection {
    pub part_of_speech: String,
    pub items: Vec<DefinitionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionItem {
    /// 1-based position within its meaning.
    pub index: usize,
    pub definition: String,
    pub example: Option<String>,
}

/// Everything selected from an entry for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub word_text: String,
    pub pronunciation: String,
    pub audio_link: Option<String>,
    pub main_def: String,
    pub example: Option<String>,
    pub meanings: Vec<MeaningSection>,
}

impl RenderPlan {
    pub fn directives(&self) -> Vec<Directive> {
        let mut directives = vec![
            Directive::Heading(self.word_text.clone()),
            Directive::Pronunciation(self.pronunciation.clone()),
        ];
        if let Some(url) = &self.audio_link {
            directives.push(Directive::Audio {
                url: url.clone(),
                format: AUDIO_FORMAT.to_owned(),
            });
        }
        directives.push(Directive::Success(self.main_def.clone()));
        directives.push(match &self.example {
            Some(example) => Directive::Example(example.clone()),
            None => Directive::Info(NO_EXAMPLE_MESSAGE.to_owned()),
        });
        directives.push(Directive::Expander {
            label: MORE_MEANINGS_LABEL.to_owned(),
            sections: self.meanings.clone(),
        });
        directives
    }
}

/// Selects what to show for a dictionary entry.
///
/// Fails with [`MalformedEntry`] when the entry has no meanings or its first
/// meaning has no definitions, since there is then nothing to headline.
pub fn present(entry: &Word) -> Result<RenderPlan, DictionaryError> {
    let main = entry.primary_definition().ok_or_else(|| {
        DictionaryError::MalformedEntry(if entry.meanings.is_empty() {
            MalformedEntry::NoMeanings
        } else {
            MalformedEntry::NoDefinitions
        })
    })?;

    let (pronunciation, audio_link) = resolve_phonetics(&entry.phonetics);

    Ok(RenderPlan {
        word_text: capitalize(&entry.word),
        pronunciation: pronunciation.unwrap_or(NO_PRONUNCIATION).to_owned(),
        audio_link: audio_link.map(str::to_owned),
        main_def: main.definition.clone(),
        example: main.example.clone().filter(|example| !example.is_empty()),
        meanings: entry.meanings.iter().map(meaning_section).collect(),
    })
}

/// Single pass over the variants: the first non-empty text seen is the
/// pronunciation, and the scan ends at the first non-empty audio link.
fn resolve_phonetics(phonetics: &[Phonetic]) -> (Option<&str>, Option<&str>) {
    let mut pronunciation = None;
    for phonetic in phonetics {
        if pronunciation.is_none() {
            pronunciation = non_empty(&phonetic.text);
        }
        if let Some(audio) = non_empty(&phonetic.audio) {
            return (pronunciation, Some(audio));
        }
    }
    (pronunciation, None)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn meaning_section(meaning: &WordMeaning) -> MeaningSection {
    MeaningSection {
        part_of_speech: capitalize(&meaning.part_of_speech),
        items: meaning
            .definitions
            .iter()
            .take(DEFINITIONS_PER_MEANING)
            .enumerate()
            .map(|(index, definition)| DefinitionItem {
                index: index + 1,
                definition: definition.definition.clone(),
                example: definition.example.clone(),
            })
            .collect(),
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dictionary::WordDefinition;

    fn phonetic(text: Option<&str>, audio: Option<&str>) -> Phonetic {
        Phonetic {
            text: text.map(str::to_owned),
            audio: audio.map(str::to_owned),
        }
    }

    fn definition(text: &str, example: Option<&str>) -> WordDefinition {
        WordDefinition {
            definition: text.to_owned(),
            example: example.map(str::to_owned),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    fn meaning(part_of_speech: &str, definitions: Vec<WordDefinition>) -> WordMeaning {
        WordMeaning {
            part_of_speech: part_of_speech.to_owned(),
            definitions,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    fn entry(phonetics: Vec<Phonetic>, meanings: Vec<WordMeaning>) -> Word {
        Word {
            word: "apple".to_owned(),
            phonetic: None,
            phonetics,
            meanings,
        }
    }

    fn simple_meanings() -> Vec<WordMeaning> {
        vec![meaning("noun", vec![definition("A fruit.", None)])]
    }

    #[test]
    fn pronunciation_and_audio_come_from_different_variants() {
        let word = entry(
            vec![
                phonetic(None, None),
                phonetic(Some("/ˈæp.əl/"), None),
                phonetic(None, Some("a.mp3")),
            ],
            simple_meanings(),
        );
        let plan = present(&word).unwrap();
        assert_eq!(plan.pronunciation, "/ˈæp.əl/");
        assert_eq!(plan.audio_link.as_deref(), Some("a.mp3"));
    }

    #[test]
    fn no_phonetics_falls_back() {
        let plan = present(&entry(Vec::new(), simple_meanings())).unwrap();
        assert_eq!(plan.pronunciation, NO_PRONUNCIATION);
        assert_eq!(plan.audio_link, None);
    }

    #[test]
    fn scan_stops_at_first_audio() {
        let word = entry(
            vec![
                phonetic(None, Some("first.mp3")),
                phonetic(Some("/late/"), Some("second.mp3")),
            ],
            simple_meanings(),
        );
        let plan = present(&word).unwrap();
        assert_eq!(plan.pronunciation, NO_PRONUNCIATION);
        assert_eq!(plan.audio_link.as_deref(), Some("first.mp3"));
    }

    #[test]
    fn first_text_wins_and_empty_values_are_skipped() {
        let word = entry(
            vec![
                phonetic(Some(""), Some("")),
                phonetic(Some("/one/"), None),
                phonetic(Some("/two/"), Some("b.mp3")),
            ],
            simple_meanings(),
        );
        let plan = present(&word).unwrap();
        assert_eq!(plan.pronunciation, "/one/");
        assert_eq!(plan.audio_link.as_deref(), Some("b.mp3"));
    }

    #[test]
    fn text_and_audio_on_the_same_variant() {
        let word = entry(vec![phonetic(Some("/x/"), Some("x.mp3"))], simple_meanings());
        let plan = present(&word).unwrap();
        assert_eq!(plan.pronunciation, "/x/");
        assert_eq!(plan.audio_link.as_deref(), Some("x.mp3"));
    }

    #[test]
    fn secondary_meanings_are_capped_at_three() {
        let definitions = (1..=5)
            .map(|n| definition(&format!("sense {n}"), None))
            .collect();
        let plan = present(&entry(Vec::new(), vec![meaning("verb", definitions)])).unwrap();

        let items = &plan.meanings[0].items;
        assert_eq!(items.len(), 3);
        assert_eq!(
            items.iter().map(|item| item.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(items[2].definition, "sense 3");
    }

    #[test]
    fn meaning_groups_keep_order_and_labels() {
        let plan = present(&entry(
            Vec::new(),
            vec![
                meaning("noun", vec![definition("A fruit.", Some("An apple a day."))]),
                meaning("verb", Vec::new()),
            ],
        ))
        .unwrap();

        assert_eq!(
            plan.meanings,
            vec![
                MeaningSection {
                    part_of_speech: "Noun".to_owned(),
                    items: vec![DefinitionItem {
                        index: 1,
                        definition: "A fruit.".to_owned(),
                        example: Some("An apple a day.".to_owned()),
                    }],
                },
                MeaningSection {
                    part_of_speech: "Verb".to_owned(),
                    items: Vec::new(),
                },
            ]
        );
    }

    #[test]
    fn directives_without_example() {
        let plan = present(&entry(Vec::new(), simple_meanings())).unwrap();
        assert_eq!(
            plan.directives(),
            vec![
                Directive::Heading("Apple".to_owned()),
                Directive::Pronunciation(NO_PRONUNCIATION.to_owned()),
                Directive::Success("A fruit.".to_owned()),
                Directive::Info(NO_EXAMPLE_MESSAGE.to_owned()),
                Directive::Expander {
                    label: MORE_MEANINGS_LABEL.to_owned(),
                    sections: plan.meanings.clone(),
                },
            ]
        );
    }

    #[test]
    fn directives_with_audio_and_example() {
        let word = entry(
            vec![phonetic(Some("/x/"), Some("x.mp3"))],
            vec![meaning("noun", vec![definition("A fruit.", Some("Eat it."))])],
        );
        let directives = present(&word).unwrap().directives();
        assert_eq!(
            directives[2],
            Directive::Audio {
                url: "x.mp3".to_owned(),
                format: AUDIO_FORMAT.to_owned(),
            }
        );
        assert_eq!(directives[4], Directive::Example("Eat it.".to_owned()));
    }

    #[test]
    fn empty_main_example_uses_fallback() {
        let word = entry(Vec::new(), vec![meaning("noun", vec![definition("d", Some(""))])]);
        let plan = present(&word).unwrap();
        assert_eq!(plan.example, None);
        // the secondary block keeps whatever the service sent
        assert_eq!(plan.meanings[0].items[0].example.as_deref(), Some(""));
    }

    #[test]
    fn empty_meanings_or_definitions_are_malformed() {
        let err = present(&entry(Vec::new(), Vec::new())).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::MalformedEntry(MalformedEntry::NoMeanings)
        ));

        let err = present(&entry(Vec::new(), vec![meaning("noun", Vec::new())])).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::MalformedEntry(MalformedEntry::NoDefinitions)
        ));
    }

    #[test]
    fn present_is_repeatable() {
        let word = entry(
            vec![phonetic(Some("/x/"), Some("x.mp3"))],
            vec![
                meaning("noun", vec![definition("a", Some("b")), definition("c", None)]),
                meaning("verb", vec![definition("e", None)]),
            ],
        );
        assert_eq!(present(&word).unwrap(), present(&word).unwrap());
    }

    #[test]
    fn capitalize_only_touches_the_first_character() {
        assert_eq!(capitalize("apple"), "Apple");
        assert_eq!(capitalize("mcDonald"), "McDonald");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }
}
