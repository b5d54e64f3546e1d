// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const SESSION_TOKEN_BYTES: usize = 32;
const REQUEST_ID_BYTES: usize = 6;

/// Short id attached to each request's tracing span.
pub fn request_id() -> String {
    generate_token(&mut OsRng, REQUEST_ID_BYTES)
}

/// Generate a URL-safe token from random bytes.
/// - Uses Base64 URL-safe, no padding.
/// - 32 bytes -> 43 chars, 6 bytes -> 8 chars.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}
