use thiserror::Error;

/// Failures while removing transport padding.
///
/// Both variants mean the buffer was not produced by this padding scheme
/// (corruption, tampering, or a peer speaking a different format). The
/// caller decides whether to drop the message or raise a protocol error;
/// neither is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaddingError {
    /// The buffer is empty or contains no non-zero byte, so there is no
    /// terminator to find and no message to recover.
    #[error("Padded buffer is empty or all zeroes — no terminator present")]
    EmptyOrAllZero,

    /// The right-most non-zero byte is not the `0x80` terminator.
    #[error("Expected 0x80 terminator, found {found:#04x} as last non-zero byte")]
    MissingTerminator {
        /// The byte value actually found where the terminator was expected.
        found: u8,
    },
}

/// Result type for padding operations.
pub type Result<T> = std::result::Result<T, PaddingError>;
