//! Short client-side keys for unsaved items
//!
//! Tokens are drawn from a thread-local, non-cryptographic RNG. They are fine
//! for list keys and draft ids that never leave the page; anything persisted
//! should use the document store's own ids.

use rand::Rng;

/// Default token length
pub const DEFAULT_ID_LENGTH: usize = 9;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a 9-character base-36 token
pub fn generate_id() -> String {
    generate_id_with_len(DEFAULT_ID_LENGTH)
}

/// Generate a base-36 token of `len` characters
pub fn generate_id_with_len(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect()
}
