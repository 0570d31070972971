//! Provides the core functionality of radkey: parsing the annotated assembly
//! tables of a chord-style Chinese input method scheme into radical/key
//! indexes, and projecting unkeyed corpora through a radical to key index.

pub mod assembly;
pub mod error;
pub mod keymap;
pub mod projection;
pub mod report;

use encoding_rs::UTF_8;
use error::CorpusError;
use std::io::Read;

// the corpus files are produced by a toolchain that writes UTF-8 with a BOM
pub(crate) fn decode_corpus<R: Read>(mut r: R) -> Result<String, CorpusError> {
    let mut buf = vec![];
    r.read_to_end(&mut buf)?;
    let (text, had_errors) = UTF_8.decode_with_bom_removal(&buf);
    if had_errors {
        return Err(CorpusError::Encoding);
    }
    Ok(text.into_owned())
}
