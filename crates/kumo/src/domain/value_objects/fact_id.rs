//! FactId - Short deterministic fact fingerprint

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// Number of hex characters kept from the SHA-1 digest.
const FINGERPRINT_LEN: usize = 12;

/// First 12 hex characters of `SHA-1(fact.text)`.
///
/// A derived value, never primary data: recomputed on demand and stored
/// only in the anti-repeat record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactId(String);

impl FactId {
    /// Compute the fingerprint of a fact text.
    pub fn of(text: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(text.as_bytes());
        let digest = hex::encode(hasher.finalize());
        Self(digest[..FINGERPRINT_LEN].to_string())
    }

    /// Validate a stored fingerprint. Anything that is not exactly 12
    /// lowercase hex characters is rejected, so garbage rows degrade to
    /// "no history" instead of failing a request.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == FINGERPRINT_LEN
            && raw.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(FactId::of("Servers love electricity.").as_str(), "3e2bff1d9978");
        assert_eq!(
            FactId::of("The cloud is just someone else's computer.").as_str(),
            "b3974deb593d"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(FactId::of("same text"), FactId::of("same text"));
        assert_ne!(FactId::of("same text"), FactId::of("other text"));
    }

    #[test]
    fn test_parse_accepts_own_output() {
        let id = FactId::of("round trip");
        assert_eq!(FactId::parse(id.as_str()), Some(id));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(FactId::parse(""), None);
        assert_eq!(FactId::parse("not-hex-here!"), None);
        assert_eq!(FactId::parse("3E2BFF1D9978"), None);
        assert_eq!(FactId::parse("3e2bff1d99"), None);
    }
}
