//! Parses annotated assembly tables into radical/key indexes.

use crate::error::CorpusError;
use std::{
    collections::{BTreeSet, HashMap},
    io::Read,
};

/// Indexes built out of an annotated assembly table,
/// where each line maps a character to a radical and a key.
#[derive(Debug, PartialEq, Eq)]
pub struct Assembly {
    pub radical_to_keys: HashMap<String, BTreeSet<String>>,
    pub key_to_radicals: HashMap<String, BTreeSet<String>>,
    pub radical_to_chars: HashMap<String, Vec<char>>,
    pub key_to_chars: HashMap<String, Vec<char>>,
    pub counts: LineCounts,
}

/// Per-line accounting for a parsed assembly table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    /// All lines, blank ones included.
    pub lines: u32,
    /// Lines that contributed to the indexes.
    pub parsed: u32,
    /// Lines without a tab separator.
    pub malformed: u32,
    /// Lines with a separator but an empty character, radical or key.
    pub incomplete: u32,
}

impl Assembly {
    /// Decodes and parses an assembly table from the reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let text = crate::decode_corpus(reader)?;
        Ok(Self::parse(&text))
    }

    /// Parses an assembly table where each line has the form
    /// `character<TAB>radical | key`.
    pub fn parse(text: &str) -> Self {
        let mut radical_to_keys: HashMap<String, BTreeSet<String>> = HashMap::new();
        let mut key_to_radicals: HashMap<String, BTreeSet<String>> = HashMap::new();
        let mut radical_to_chars: HashMap<String, Vec<char>> = HashMap::new();
        let mut key_to_chars: HashMap<String, Vec<char>> = HashMap::new();
        let mut counts = LineCounts::default();

        for (idx, line) in text.lines().enumerate() {
            let line_num = idx + 1;
            counts.lines += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((character_field, annotation)) = line.split_once('\t') else {
                tracing::warn!("line {line_num}: no tab separator: {line:?}");
                counts.malformed += 1;
                continue;
            };
            let (radical, key) = split_annotation(annotation);
            let character = match character_field.trim().chars().next() {
                Some(c) if !radical.is_empty() && !key.is_empty() => c,
                _ => {
                    tracing::warn!("line {line_num}: empty character, radical or key: {line:?}");
                    counts.incomplete += 1;
                    continue;
                }
            };

            radical_to_keys
                .entry(radical.to_string())
                .or_default()
                .insert(key.to_string());
            key_to_radicals
                .entry(key.to_string())
                .or_default()
                .insert(radical.to_string());
            radical_to_chars
                .entry(radical.to_string())
                .or_default()
                .push(character);
            key_to_chars
                .entry(key.to_string())
                .or_default()
                .push(character);
            counts.parsed += 1;
            tracing::trace!("'{character}': radical '{radical}', key '{key}'");
        }

        tracing::info!(
            "parsed {} of {} lines ({} malformed, {} incomplete)",
            counts.parsed,
            counts.lines,
            counts.malformed,
            counts.incomplete
        );
        Self {
            radical_to_keys,
            key_to_radicals,
            radical_to_chars,
            key_to_chars,
            counts,
        }
    }
}

// the radical is everything before the first '|' and the key everything after
// the last one; an annotation without any '|' is both at once
fn split_annotation(annotation: &str) -> (&str, &str) {
    match (annotation.split_once('|'), annotation.rsplit_once('|')) {
        (Some((radical, _)), Some((_, key))) => (radical.trim(), key.trim()),
        _ => (annotation.trim(), annotation.trim()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tracing::Level;

    #[test]
    fn parses_well_formed_lines() {
        let assembly = Assembly::parse("爻\t乛  |  E\n攻\t工  |  QR\n");

        assert_eq!(
            assembly.radical_to_keys["乛"],
            BTreeSet::from(["E".to_string()])
        );
        assert_eq!(
            assembly.radical_to_keys["工"],
            BTreeSet::from(["QR".to_string()])
        );
        assert_eq!(
            assembly.key_to_radicals["QR"],
            BTreeSet::from(["工".to_string()])
        );
        assert_eq!(assembly.radical_to_chars["工"], vec!['攻']);
        assert_eq!(assembly.key_to_chars["E"], vec!['爻']);
        assert_eq!(
            assembly.counts,
            LineCounts {
                lines: 2,
                parsed: 2,
                malformed: 0,
                incomplete: 0,
            }
        );
    }

    #[test]
    fn reads_a_corpus_with_a_bom() {
        let assembly = Assembly::from_reader("\u{feff}爻\t乛  |  E\n".as_bytes()).unwrap();

        assert_eq!(assembly.radical_to_chars["乛"], vec!['爻']);
        assert_eq!(
            assembly.radical_to_keys["乛"],
            BTreeSet::from(["E".to_string()])
        );
        assert_eq!(assembly.counts.parsed, 1);
    }

    #[test]
    fn parsing_twice_gives_equal_indexes() {
        let text = "受\t乛  |  E\n攻\t工  |  QR\n江\t工  |  Q\n";
        assert_eq!(Assembly::parse(text), Assembly::parse(text));
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let assembly = Assembly::parse("爻\t乛  |  E\r\n攻\t工  |  QR\r\n");
        assert_eq!(assembly, Assembly::parse("爻\t乛  |  E\n攻\t工  |  QR\n"));
    }

    #[test]
    fn keeps_characters_in_corpus_order() {
        let assembly = Assembly::parse("江\t工  |  Q\n攻\t工  |  QR\n贡\t工  |  Q\n");
        assert_eq!(assembly.radical_to_chars["工"], vec!['江', '攻', '贡']);
        assert_eq!(assembly.key_to_chars["Q"], vec!['江', '贡']);
    }

    #[test]
    fn collects_every_key_of_a_radical() {
        let assembly = Assembly::parse("仁\t亻  |  F\n们\t亻  |  S\n仁\t亻  |  F\n");
        assert_eq!(
            assembly.radical_to_keys["亻"],
            BTreeSet::from(["F".to_string(), "S".to_string()])
        );
    }

    #[test]
    fn skips_malformed_lines() {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();

        let assembly = Assembly::parse("爻\t乛  |  E\nno separator here\n攻\t工  |  QR\n???\n\n");
        assert_eq!(
            assembly.counts,
            LineCounts {
                lines: 5,
                parsed: 2,
                malformed: 2,
                incomplete: 0,
            }
        );
        assert!(!assembly.radical_to_keys.contains_key("no separator here"));
    }

    #[test]
    fn skips_incomplete_lines() {
        let assembly = Assembly::parse("攻\t  |  QR\n江\t工  |\n爻\t乛  |  E\n");
        assert_eq!(
            assembly.counts,
            LineCounts {
                lines: 3,
                parsed: 1,
                malformed: 0,
                incomplete: 2,
            }
        );
        assert!(!assembly.key_to_radicals.contains_key("QR"));
        assert!(!assembly.radical_to_keys.contains_key("工"));
    }

    #[test]
    fn treats_an_annotation_without_a_pipe_as_radical_and_key() {
        let assembly = Assembly::parse("吅\t口口\n");
        assert_eq!(
            assembly.radical_to_keys["口口"],
            BTreeSet::from(["口口".to_string()])
        );
        assert_eq!(assembly.key_to_chars["口口"], vec!['吅']);
    }
}
