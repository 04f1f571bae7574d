//! Short identifier generation.
//!
//! Produces compact, URL-safe random identifiers. Uniqueness is not
//! guaranteed here; it is enforced by the mapping store's conditional insert.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 4 bytes of entropy encode to a 6-character identifier.
const ID_LENGTH_BYTES: usize = 4;

/// Generates a cryptographically secure random short identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 6-character identifier.
///
/// # Panics
///
/// Panics if the system random number generator fails. A platform that cannot
/// supply randomness is a fatal configuration error, not a recoverable state.
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
