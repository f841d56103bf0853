//! Session identity
//!
//! A per-page-load token that tags chat and purchase requests. Not a
//! credential and not guaranteed globally unique.

use uuid::Uuid;

const PREFIX: &str = "user_";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque session token, e.g. `user_k3j9x0a2b`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh id from the platform RNG
    pub fn generate() -> Self {
        Self::from_entropy(Uuid::new_v4().as_u128())
    }

    /// Build an id from fixed entropy
    pub fn from_entropy(mut entropy: u128) -> Self {
        let mut id = String::with_capacity(PREFIX.len() + SUFFIX_LEN);
        id.push_str(PREFIX);
        for _ in 0..SUFFIX_LEN {
            id.push(BASE36[(entropy % 36) as usize] as char);
            entropy /= 36;
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
