use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{TryRngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

use crate::OAuthError;

const VERIFIER_BYTES: usize = 32;
const STATE_BYTES: usize = 16;

pub const CODE_CHALLENGE_METHOD: &str = "S256";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkcePair {
    pub code_verifier: String,
    pub code_challenge: String,
}

impl PkcePair {
    pub fn generate() -> Result<Self, OAuthError> {
        let bytes = random_bytes::<VERIFIER_BYTES>()?;
        Ok(Self::from_verifier(URL_SAFE_NO_PAD.encode(bytes)))
    }

    pub fn from_verifier(code_verifier: impl Into<String>) -> Self {
        let code_verifier = code_verifier.into();
        let mut hasher = Sha256::new();
        hasher.update(code_verifier.as_bytes());
        let digest = hasher.finalize();
        let code_challenge = URL_SAFE_NO_PAD.encode(digest);
        Self {
            code_verifier,
            code_challenge,
        }
    }
}

/// Opaque anti-CSRF token: 16 bytes from the OS RNG, lowercase hex.
pub fn generate_state() -> Result<String, OAuthError> {
    Ok(hex::encode(random_bytes::<STATE_BYTES>()?))
}

fn random_bytes<const N: usize>() -> Result<[u8; N], OAuthError> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| OAuthError::OsRng {
            message: err.to_string(),
        })?;
    Ok(bytes)
}
