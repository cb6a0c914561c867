// PKCE helper for the S256 challenge method (RFC 7636)
use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};

/// Challenge method identifier sent alongside the challenge.
pub const CODE_CHALLENGE_METHOD: &str = "S256";

/// Derive the code challenge from a verifier:
/// base64url-encode(SHA-256(verifier)) without padding, 43 chars for a
/// 256-bit digest.
pub fn code_challenge_s256(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    general_purpose::URL_SAFE_NO_PAD.encode(hash)
}
