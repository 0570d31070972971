//! Error type for reading corpus files.

use thiserror::Error;

/// Failures that abort reading a corpus file outright.
///
/// Problems with individual lines, such as a missing separator or an empty
/// radical, are not errors: the line is skipped and counted instead.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corpus is not valid UTF-8")]
    Encoding,
}
