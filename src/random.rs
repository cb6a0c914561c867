use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Mutex;
use thiserror::Error;

/// Raised when the secure random source cannot produce output. There is no
/// recoverable variant: callers must abort whatever secret they were building.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("entropy source failure: {0}")]
    SourceFailure(String),

    #[error("fixed random sequence exhausted (requested {requested} bytes, {available} left)")]
    SequenceExhausted { requested: usize, available: usize },
}

/// Source of cryptographically secure random bytes.
///
/// Abstracted as a stateless service rather than a process-wide singleton so
/// tests can inject a deterministic implementation and assert exact output.
pub trait SecureRandom: Send + Sync {
    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, EntropyError>;

    /// Draw `byte_len` random bytes and return them as a lowercase hex string
    /// of `2 * byte_len` characters.
    fn hex_string(&self, byte_len: usize) -> Result<String, EntropyError> {
        Ok(hex::encode(self.random_bytes(byte_len)?))
    }
}

/// Production randomness: the operating system CSPRNG via `OsRng`.
/// If the OS source fails there is no fallback; the error propagates.
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, EntropyError> {
        let mut buf = vec![0u8; n];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| EntropyError::SourceFailure(e.to_string()))?;
        Ok(buf)
    }
}

/// A deterministic generator that replays a fixed byte sequence, used in tests
/// to pin down expected state/verifier/challenge values. Once the sequence is
/// exhausted it fails like a dead entropy source.
pub struct FixedRandom {
    bytes: Mutex<Vec<u8>>,
}

impl FixedRandom {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Mutex::new(bytes),
        }
    }
}

impl SecureRandom for FixedRandom {
    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, EntropyError> {
        let mut remaining = self
            .bytes
            .lock()
            .map_err(|_| EntropyError::SourceFailure("poisoned fixed sequence".into()))?;
        if remaining.len() < n {
            return Err(EntropyError::SequenceExhausted {
                requested: n,
                available: remaining.len(),
            });
        }
        let rest = remaining.split_off(n);
        let out = std::mem::replace(&mut *remaining, rest);
        Ok(out)
    }
}
