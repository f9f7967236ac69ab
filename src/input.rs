use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;

/// Read the text to analyse from a file, or from stdin when `path` is
/// `None` or `-`. Invalid UTF-8 is replaced rather than rejected.
pub fn read_text(path: Option<&Path>) -> Result<String, ExtractError> {
    match path {
        Some(p) if p != Path::new("-") => {
            let bytes = std::fs::read(p).map_err(|source| ExtractError::ReadInput {
                path: p.to_path_buf(),
                source,
            })?;
            debug!(path = %p.display(), bytes = bytes.len(), "read input file");
            Ok(decode(bytes))
        }
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(ExtractError::ReadStdin)?;
            debug!(bytes = bytes.len(), "read standard input");
            Ok(decode(bytes))
        }
    }
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
