//! Short random todo ids.

use rand::Rng;

/// Number of characters in a generated id.
pub const ID_LEN: usize = 7;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short base-36 id such as `k3x9q0a`.
///
/// Uniqueness is not guaranteed here; callers that need it check against
/// the live ids.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
