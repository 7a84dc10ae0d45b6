//! Transport padding — quantizes message length to fixed buckets.
//!
//! Every outgoing message body is padded to the smallest bucket that fits
//! it, so a network observer watching ciphertext sizes sees only the
//! ladder values and learns nothing finer about the plaintext length.
//!
//! Bucket ladder: `n * 160 - 1` bytes (159, 319, 479, …).
//!
//! Padded wire format:
//!   [ message bytes | 0x80 terminator | 0x00 fill to bucket boundary ]
//!
//! The fill MUST be zeroes: the decoder recovers the message boundary by
//! scanning from the end for the last non-zero byte and requiring it to be
//! the terminator. Trailing zero bytes of the message itself are absorbed
//! into the fill region harmlessly — the terminator is always the
//! right-most non-zero byte by construction. Do not replace the terminator
//! with a length prefix or random fill; the format is a wire contract and
//! both peers must agree on it.

use crate::error::{PaddingError, Result};

/// Padding quantization unit. A wire constant: sender and receiver must
/// use the same value, so it is fixed per build, not configurable at
/// runtime. Bucket sizes are `n * PADDING_BLOCK_SIZE - 1`.
pub const PADDING_BLOCK_SIZE: usize = 160;

/// Sentinel marking the end of the real message inside a padded buffer.
/// Non-zero, so the decoder's right-to-left scan can never confuse it
/// with the zero fill.
pub const TERMINATOR: u8 = 0x80;

/// Length of the padded buffer for a message of `message_len` bytes:
/// the smallest `n * 160 - 1` with room for the message plus terminator.
///
/// A message of exactly 159 bytes does NOT fit the 159-byte bucket (the
/// terminator needs its own byte) and promotes to 319.
pub fn padded_message_length(message_len: usize) -> usize {
    // Smallest n with n * B - 1 >= message_len + 1.
    let blocks = (message_len + 2).div_ceil(PADDING_BLOCK_SIZE);
    blocks * PADDING_BLOCK_SIZE - 1
}

/// Pad a message body to the next bucket boundary.
///
/// Total over all inputs, including the empty message (which pads to the
/// first bucket: a lone terminator plus fill). Pure — identical input
/// yields byte-identical output.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = vec![0u8; padded_message_length(message.len())];
    padded[..message.len()].copy_from_slice(message);
    padded[message.len()] = TERMINATOR;
    // Remaining bytes are already zero
    padded
}

/// Recover the original message from a padded buffer.
///
/// Scans from the end for the last non-zero byte; that byte must be the
/// `0x80` terminator, and everything before it is the message.
///
/// Tolerates any input length — a buffer that is not a bucket size still
/// takes the malformed-padding path rather than being assumed valid.
pub fn unpad(padded: &[u8]) -> Result<Vec<u8>> {
    let end = padded
        .iter()
        .rposition(|&b| b != 0)
        .ok_or(PaddingError::EmptyOrAllZero)?;

    if padded[end] != TERMINATOR {
        return Err(PaddingError::MissingTerminator { found: padded[end] });
    }

    Ok(padded[..end].to_vec())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip(msg: Vec<u8>) {
            prop_assert_eq!(unpad(&pad(&msg)).unwrap(), msg);
        }

        #[test]
        fn padded_length_is_minimal_ladder_value(msg in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let padded = pad(&msg);
            // On the ladder…
            prop_assert_eq!((padded.len() + 1) % PADDING_BLOCK_SIZE, 0);
            // …fits message + terminator…
            prop_assert!(padded.len() >= msg.len() + 1);
            // …and the next bucket down would not.
            if padded.len() > PADDING_BLOCK_SIZE - 1 {
                prop_assert!(padded.len() - PADDING_BLOCK_SIZE < msg.len() + 1);
            }
        }

        #[test]
        fn padded_length_is_monotonic(a: Vec<u8>, b: Vec<u8>) {
            let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
            prop_assert!(pad(&short).len() <= pad(&long).len());
        }

        #[test]
        fn terminator_placement(msg in proptest::collection::vec(any::<u8>(), 0..512)) {
            let padded = pad(&msg);
            prop_assert_eq!(padded[msg.len()], TERMINATOR);
            prop_assert!(padded[msg.len() + 1..].iter().all(|&b| b == 0));
        }
    }
}
