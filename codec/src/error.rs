//! Codec error type.

/// Errors raised by the codec.
///
/// Parsing fails as a whole: there is one coarse variant for malformed input
/// and no partial state is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be read as a Turtle document of this system.
    #[error("Failed to parse TTL file: line {line}: {reason}")]
    Parse {
        /// 1-based line number where reading stopped.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The document has no prefix directive and no recognized entity.
    #[error("Failed to parse TTL file: no recognized Turtle content")]
    NoRecognizedContent,
    /// The codec configuration could not be read.
    #[error("invalid codec configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias for codec results.
pub type Result<T> = std::result::Result<T, Error>;
