use std::path::PathBuf;

/// Why a conversion could not produce key text
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read MIDI file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse MIDI file: {0}")]
    Malformed(#[from] midly::Error),

    #[error("Unsupported MIDI timing: {0}")]
    InvalidTiming(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
