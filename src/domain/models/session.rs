use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

const SESSION_PREFIX: &str = "BRG-";
const SESSION_SUFFIX_LEN: usize = 9;
const SESSION_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Client-generated session identifier, e.g. `BRG-4F7K2QZ9A`.
///
/// Created once per client and sent with every request so the server can
/// correlate turns. Uniqueness is probabilistic only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..SESSION_SUFFIX_LEN)
            .map(|_| SESSION_ALPHABET[rng.gen_range(0..SESSION_ALPHABET.len())] as char)
            .collect();
        Self(format!("{SESSION_PREFIX}{suffix}"))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
