//! Content-addressing digests for build artifacts

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An artifact digest (SHA-256 hash as lowercase hex string)
///
/// The digest is the stable identity of a build artifact's exact bytes;
/// two artifacts with the same digest are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactDigest(String);

impl ArtifactDigest {
    /// Compute the digest of a byte slice
    #[must_use]
    pub fn from_data(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(hex::encode(hash))
    }

    /// Create from a hex string (validation)
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not 64 lowercase hex characters
    pub fn from_hex(hex: impl Into<String>) -> Result<Self> {
        let s = hex.into();
        if s.len() != 64 {
            return Err(Error::invalid_digest(format!(
                "digest must be 64 hex characters, got {}",
                s.len()
            )));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            return Err(Error::invalid_digest(
                "digest must contain only lowercase hex digits",
            ));
        }
        Ok(Self(s))
    }

    /// Get the hex representation
    #[must_use]
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtifactDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digest_from_data() {
        let data = b"hello world";
        let digest = ArtifactDigest::from_data(data);
        // SHA-256 of "hello world"
        assert_eq!(
            digest.as_hex(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn digest_validation() {
        // Valid
        assert!(ArtifactDigest::from_hex(
            "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"
        )
        .is_ok());

        // Too short
        assert!(ArtifactDigest::from_hex("abc").is_err());

        // Invalid characters
        assert!(ArtifactDigest::from_hex(
            "xyz3456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"
        )
        .is_err());

        // Uppercase rejected
        assert!(ArtifactDigest::from_hex(
            "ABC3456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"
        )
        .is_err());
    }

    proptest! {
        #[test]
        fn computed_digests_always_revalidate(data: Vec<u8>) {
            let digest = ArtifactDigest::from_data(&data);
            let reparsed = ArtifactDigest::from_hex(digest.as_hex()).unwrap();
            prop_assert_eq!(digest, reparsed);
        }

        #[test]
        fn random_strings_of_wrong_length_rejected(s in "[0-9a-f]{0,63}") {
            prop_assert!(ArtifactDigest::from_hex(s).is_err());
        }
    }
}
