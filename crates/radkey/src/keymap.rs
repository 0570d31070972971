//! Keymap file format: a versioned radical to key index.

use crate::assembly::Assembly;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeymapFile {
    pub header: Header,
    pub radicals: Vec<RadicalKeys>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Header {
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadicalKeys {
    pub radical: String,
    pub keys: Vec<String>,
}

impl KeymapFile {
    /// Derives a keymap from a parsed assembly table,
    /// with the radicals and their keys in codepoint order.
    pub fn derive(assembly: &Assembly, version: String) -> Self {
        let mut radicals = assembly
            .radical_to_keys
            .iter()
            .map(|(radical, keys)| RadicalKeys {
                radical: radical.clone(),
                keys: keys.iter().cloned().collect(),
            })
            .collect::<Vec<_>>();
        radicals.sort_by(|l, r| l.radical.cmp(&r.radical));
        Self {
            header: Header { version },
            radicals,
        }
    }

    /// Turns the keymap into the index form used for projecting corpora.
    /// Keys of repeated radical entries are unioned.
    pub fn into_index(self) -> HashMap<String, BTreeSet<String>> {
        let mut index: HashMap<String, BTreeSet<String>> = HashMap::new();
        for radical_keys in self.radicals {
            index
                .entry(radical_keys.radical)
                .or_default()
                .extend(radical_keys.keys);
        }
        index
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::projection::Projection;

    #[test]
    fn derives_a_sorted_keymap() {
        let assembly = Assembly::parse("攻\t工  |  QR\n们\t亻  |  I\n仁\t亻  |  F\n");
        let keymap = KeymapFile::derive(&assembly, "250412".to_string());

        assert_eq!(keymap.header.version, "250412");
        assert_eq!(keymap.radicals[0].radical, "亻");
        assert_eq!(keymap.radicals[0].keys, vec!["F", "I"]);
        assert_eq!(keymap.radicals[1].radical, "工");
        assert_eq!(keymap.radicals[1].keys, vec!["QR"]);
    }

    #[test]
    fn loads_a_keymap_into_an_index() {
        let keymap: KeymapFile = serde_json::from_str(
            r#"{
                "header": { "version": "250412" },
                "radicals": [
                    { "radical": "工", "keys": ["QR"] },
                    { "radical": "工", "keys": ["Q"] },
                    { "radical": "乛", "keys": ["E"] }
                ]
            }"#,
        )
        .unwrap();
        let index = keymap.into_index();

        assert_eq!(
            index["工"],
            BTreeSet::from(["Q".to_string(), "QR".to_string()])
        );
        assert_eq!(index["乛"], BTreeSet::from(["E".to_string()]));
    }

    #[test]
    fn projects_through_a_loaded_keymap() {
        let keymap: KeymapFile = serde_json::from_str(
            r#"{
                "header": { "version": "250412" },
                "radicals": [
                    { "radical": "匕", "keys": ["QF/QS"] }
                ]
            }"#,
        )
        .unwrap();
        let index = keymap.into_index();
        let projection = Projection::project("比\t匕\n", &index);
        assert_eq!(projection.char_to_key[&'比'], "QF/QS");
    }
}
