use std::path::PathBuf;

/// Failures at the edges of the crate: reading text and loading options.
/// The extraction pipeline itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot read input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read standard input: {0}")]
    ReadStdin(#[source] std::io::Error),

    #[error("cannot read options file {}: {source}", path.display())]
    ReadOptions {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse options file {}: {source}", path.display())]
    ParseOptions {
        path: PathBuf,
        source: serde_json::Error,
    },
}
