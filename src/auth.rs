use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::config::AppConfig;

/// Verifies submitted admin keys against the configured secret. The secret
/// is decoded once at construction; a missing or undecodable configuration
/// leaves the verifier in a state where every attempt fails.
#[derive(Clone)]
pub struct AdminAuth {
    secret: Option<Vec<u8>>,
}

impl AdminAuth {
    pub fn from_config(config: &AppConfig) -> Self {
        let secret = match config.admin_key_base64.as_deref() {
            Some(encoded) => match STANDARD.decode(encoded.trim()) {
                Ok(bytes) if !bytes.is_empty() => Some(bytes),
                Ok(_) => {
                    tracing::error!("ADMIN_KEY_BASE64 decodes to an empty key");
                    None
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to decode ADMIN_KEY_BASE64");
                    None
                }
            },
            None => {
                tracing::warn!("ADMIN_KEY_BASE64 is not set, admin login is disabled");
                None
            }
        };

        Self { secret }
    }

    /// Accepts the candidate when its raw bytes equal the stored secret, or
    /// when the SHA-256 digest of those bytes does. Both forms are valid
    /// against the same stored value — the deployment may configure either
    /// the plaintext key or its digest.
    pub fn verify(&self, candidate: &str) -> bool {
        if candidate.trim().is_empty() {
            return false;
        }
        let Some(stored) = self.secret.as_deref() else {
            return false;
        };

        let candidate_bytes = candidate.as_bytes();
        if eq_bytes(candidate_bytes, stored) {
            return true;
        }

        let digest = Sha256::digest(candidate_bytes);
        eq_bytes(digest.as_slice(), stored)
    }
}

/// Full-length byte comparison after the length check; does not short-circuit
/// on the first mismatching byte.
fn eq_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
