use thiserror::Error;

/// Errors that abort a conversion.
///
/// The converter recovers nothing locally: it either returns a complete,
/// self-consistent request list or one of these. Partial results are never
/// emitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The token walk ended with an open construct, or a close arrived for a
    /// construct that was never opened.
    #[error("markdown structure left unbalanced: {0}")]
    MalformedMarkdown(String),

    /// A table row is so much narrower than the widest row that padding it
    /// with empty cells would exceed the configured cap.
    #[error("table row {row} has {have} cells but the widest row has {want}; refusing to pad more than {cap} cells")]
    TableShape {
        row: usize,
        have: usize,
        want: usize,
        cap: usize,
    },
}
