//! Projects unkeyed corpora through a radical to key index.

use crate::error::CorpusError;
use std::{
    collections::{BTreeSet, HashMap},
    io::Read,
};

/// Character to key assignments produced by projecting a corpus of
/// `character<TAB>radical` lines through a radical to key index.
#[derive(Debug, PartialEq, Eq)]
pub struct Projection {
    pub char_to_key: HashMap<char, String>,
    pub char_to_radical: HashMap<char, String>,
    pub key_to_chars: HashMap<String, Vec<char>>,
    pub counts: RemapCounts,
}

/// Per-line accounting for a projected corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemapCounts {
    /// All lines, blank ones included.
    pub lines: u32,
    /// Lines whose radical resolved to a key.
    pub mapped: u32,
    /// Lines whose radical was missing from the index.
    pub unmapped: u32,
    /// Lines without a tab separator.
    pub malformed: u32,
    /// Lines with a separator but an empty character or radical.
    pub incomplete: u32,
}

impl Projection {
    /// Decodes and projects a corpus from the reader.
    pub fn from_reader<R: Read>(
        reader: R,
        radical_to_keys: &HashMap<String, BTreeSet<String>>,
    ) -> Result<Self, CorpusError> {
        let text = crate::decode_corpus(reader)?;
        Ok(Self::project(&text, radical_to_keys))
    }

    /// Assigns a key to each `character<TAB>radical` line of the corpus.
    /// A radical with several keys resolves to the lexicographically smallest one.
    pub fn project(text: &str, radical_to_keys: &HashMap<String, BTreeSet<String>>) -> Self {
        let mut char_to_key: HashMap<char, String> = HashMap::new();
        let mut char_to_radical: HashMap<char, String> = HashMap::new();
        let mut key_to_chars: HashMap<String, Vec<char>> = HashMap::new();
        let mut counts = RemapCounts::default();

        for (idx, line) in text.lines().enumerate() {
            let line_num = idx + 1;
            counts.lines += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((character_field, radical)) = line.split_once('\t') else {
                tracing::warn!("line {line_num}: no tab separator: {line:?}");
                counts.malformed += 1;
                continue;
            };
            let radical = radical.trim();
            let Some(character) = character_field.trim().chars().next() else {
                tracing::warn!("line {line_num}: empty character: {line:?}");
                counts.incomplete += 1;
                continue;
            };
            if radical.is_empty() {
                tracing::warn!("line {line_num}: empty radical: {line:?}");
                counts.incomplete += 1;
                continue;
            }

            let key = match radical_to_keys.get(radical) {
                // an empty key sorts first, so it also leaves the radical unmapped
                Some(keys) => match keys.iter().next() {
                    Some(key) if !key.is_empty() => key.clone(),
                    _ => {
                        tracing::warn!("radical '{radical}' has no usable key");
                        counts.unmapped += 1;
                        continue;
                    }
                },
                None => {
                    tracing::warn!("radical '{radical}' is not in the index");
                    counts.unmapped += 1;
                    continue;
                }
            };

            // a later line overwrites an earlier assignment for the same character,
            // so drop the character from the superseded key's list
            if let Some(old_key) = char_to_key.insert(character, key.clone()) {
                remove_char(&mut key_to_chars, &old_key, character);
            }
            char_to_radical.insert(character, radical.to_string());
            key_to_chars
                .entry(key.clone())
                .or_default()
                .push(character);
            counts.mapped += 1;
            tracing::trace!("'{character}': radical '{radical}' -> key '{key}'");
        }

        tracing::info!(
            "mapped {} of {} lines ({} unmapped, {} malformed, {} incomplete)",
            counts.mapped,
            counts.lines,
            counts.unmapped,
            counts.malformed,
            counts.incomplete
        );
        Self {
            char_to_key,
            char_to_radical,
            key_to_chars,
            counts,
        }
    }
}

fn remove_char(key_to_chars: &mut HashMap<String, Vec<char>>, key: &str, character: char) {
    if let Some(chars) = key_to_chars.get_mut(key) {
        if let Some(pos) = chars.iter().position(|c| *c == character) {
            chars.remove(pos);
        }
        if chars.is_empty() {
            key_to_chars.remove(key);
        }
    }
}
