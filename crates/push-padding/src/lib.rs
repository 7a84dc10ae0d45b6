//! push-padding — fixed-bucket message padding for the push transport
//!
//! Pads a plaintext message body to one of a fixed ladder of bucket sizes
//! before it is handed to the encryption layer, so the relay sees only a
//! small set of ciphertext lengths and cannot infer message type or content
//! from the exact byte count.
//!
//! The padding sits INSIDE the plaintext: pad → encrypt on send,
//! decrypt → unpad on receive. This crate does neither the encryption nor
//! any interpretation of the message bytes.
//!
//! # Module layout
//! - `padding` — bucket ladder, `pad` / `unpad`, terminator format
//! - `error`   — unified error type

pub mod error;
pub mod padding;

pub use error::PaddingError;
pub use padding::{pad, padded_message_length, unpad, PADDING_BLOCK_SIZE, TERMINATOR};
