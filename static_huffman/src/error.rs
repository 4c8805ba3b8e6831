//! Error types for compression and decompression.

/// Error type for all codec operations.
///
/// Every variant is fatal to the operation in progress; nothing is
/// retried or recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum CodingError {
    /// The frequency table holds no symbols, so no prefix tree exists.
    #[error("empty input: the frequency table holds no symbols")]
    EmptyInput,

    /// The input does not fit the container's 32-bit frequency fields.
    #[error("input of {len} bytes exceeds the 32-bit frequency range of the container")]
    InputTooLong { len: usize },

    /// Asked to encode a byte the codebook has no codeword for.
    #[error("byte {byte:#04x} has no codeword in this codebook")]
    MissingCodeword { byte: u8 },

    /// The buffer ends before the structure its header declares.
    #[error("malformed container: {what} needs {expected} bytes, buffer holds {actual}")]
    TruncatedContainer {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The header declares more distinct symbols than byte values exist.
    #[error("malformed container: {count} distinct symbols declared, at most 256 possible")]
    TooManySymbols { count: usize },

    /// Frequency table entries must be unique and in ascending byte order.
    #[error("malformed container: table entry for byte {byte:#04x} is out of order or repeated")]
    UnorderedTable { byte: u8 },

    /// A frequency of zero would describe a byte absent from the input.
    #[error("malformed container: zero frequency recorded for byte {byte:#04x}")]
    ZeroFrequency { byte: u8 },

    /// Payload or padding present although the table declares no symbols.
    #[error("malformed container: empty symbol table but non-empty payload")]
    UnexpectedPayload,

    /// The padding count cannot be honored by the payload.
    #[error("malformed container: padding of {padding} bits is invalid for a {payload_len}-byte payload")]
    InvalidPadding { padding: u8, payload_len: usize },

    /// The packed bits end in the middle of a codeword, or decode to the
    /// wrong number of symbols.
    #[error("truncated stream: decoded {decoded} of {expected} symbols")]
    TruncatedStream { decoded: u64, expected: u64 },

    /// Underlying I/O failure, surfaced to the caller as-is.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl CodingError {
    /// Returns true if this error indicates a structurally invalid container.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            CodingError::TruncatedContainer { .. }
                | CodingError::TooManySymbols { .. }
                | CodingError::UnorderedTable { .. }
                | CodingError::ZeroFrequency { .. }
                | CodingError::UnexpectedPayload
                | CodingError::InvalidPadding { .. }
        )
    }
}
