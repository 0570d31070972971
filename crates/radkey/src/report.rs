//! Renders assemblies and projections into the plain text reports
//! used to proofread the scheme's data.

use crate::{assembly::Assembly, projection::Projection};
use itertools::Itertools;

/// Renders the statistics report: every radical with its keys and characters,
/// then every key with its radicals and characters.
pub fn statistics(assembly: &Assembly) -> String {
    let mut out = String::new();

    section(&mut out, "by radical");
    for (radical, keys) in assembly
        .radical_to_keys
        .iter()
        .sorted_by(|l, r| l.0.cmp(r.0))
    {
        let keys = keys.iter().collect::<Vec<_>>();
        let chars = assembly
            .radical_to_chars
            .get(radical)
            .map(Vec::as_slice)
            .unwrap_or_default();
        out.push_str(&format!("radical '{radical}' -> keys {keys:?}\n"));
        out.push_str(&format!(
            "  characters ({}): {}\n\n",
            chars.len(),
            chars.iter().join(" ")
        ));
    }

    section(&mut out, "by key");
    for (key, radicals) in assembly
        .key_to_radicals
        .iter()
        .sorted_by(|l, r| l.0.cmp(r.0))
    {
        let radicals = radicals.iter().collect::<Vec<_>>();
        let chars = assembly
            .key_to_chars
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default();
        out.push_str(&format!("key '{key}' -> radicals {radicals:?}\n"));
        out.push_str(&format!(
            "  characters ({}): {}\n\n",
            chars.len(),
            chars.iter().join(" ")
        ));
    }

    out
}

fn section(out: &mut String, title: &str) {
    let rule = "=".repeat(70);
    out.push_str(&format!("{rule}\n{title}\n{rule}\n"));
}

/// Renders a projected corpus back into annotated lines, grouped by key.
pub fn mapping(projection: &Projection) -> String {
    let mut out = String::new();
    out.push_str("character\tradical || key\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');
    for (key, chars) in projection
        .key_to_chars
        .iter()
        .sorted_by(|l, r| l.0.cmp(r.0))
    {
        for character in chars {
            let radical = projection
                .char_to_radical
                .get(character)
                .map(String::as_str)
                .unwrap_or_default();
            out.push_str(&format!("{character}\t{radical}  |  {key}\n"));
        }
    }
    out
}
