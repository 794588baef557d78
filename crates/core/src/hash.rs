use hmac::{Hmac, Mac};
use md5::Md5;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::error::{ToolError, ToolResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Ripemd160,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 7] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Ripemd160,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha224 => "SHA224",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
            HashAlgorithm::Ripemd160 => "RIPEMD160",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    /// Accepts `sha256`, `SHA-256`, `sha_256` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        HashAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown hash algorithm: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashOutput {
    pub algorithm: HashAlgorithm,
    pub digest: String,
}

fn hex_digest<D: Digest>(input: &[u8]) -> String {
    hex::encode(D::digest(input))
}

macro_rules! hmac_hex {
    ($hash:ty, $key:expr, $message:expr) => {{
        let mut mac = Hmac::<$hash>::new_from_slice($key)
            .map_err(|e| ToolError::validation(format!("Invalid HMAC key: {e}")))?;
        mac.update($message);
        hex::encode(mac.finalize().into_bytes())
    }};
}

/// Lowercase hex digest of the UTF-8 input. Empty input gives an empty string.
pub fn hash(input: &str, algorithm: HashAlgorithm) -> String {
    if input.is_empty() {
        return String::new();
    }

    let bytes = input.as_bytes();
    match algorithm {
        HashAlgorithm::Md5 => hex_digest::<Md5>(bytes),
        HashAlgorithm::Sha1 => hex_digest::<Sha1>(bytes),
        HashAlgorithm::Sha224 => hex_digest::<Sha224>(bytes),
        HashAlgorithm::Sha256 => hex_digest::<Sha256>(bytes),
        HashAlgorithm::Sha384 => hex_digest::<Sha384>(bytes),
        HashAlgorithm::Sha512 => hex_digest::<Sha512>(bytes),
        HashAlgorithm::Ripemd160 => hex_digest::<Ripemd160>(bytes),
    }
}

/// Digest of `input` under every algorithm, in [`HashAlgorithm::ALL`] order.
pub fn hash_all(input: &str) -> Vec<HashOutput> {
    HashAlgorithm::ALL
        .into_iter()
        .map(|algorithm| HashOutput {
            algorithm,
            digest: hash(input, algorithm),
        })
        .collect()
}

/// Keyed HMAC as lowercase hex. An empty message or key gives an empty string.
pub fn hmac(message: &str, key: &str, algorithm: HashAlgorithm) -> ToolResult<String> {
    if message.is_empty() || key.is_empty() {
        return Ok(String::new());
    }

    let key = key.as_bytes();
    let message = message.as_bytes();
    let digest = match algorithm {
        HashAlgorithm::Md5 => hmac_hex!(Md5, key, message),
        HashAlgorithm::Sha1 => hmac_hex!(Sha1, key, message),
        HashAlgorithm::Sha224 => hmac_hex!(Sha224, key, message),
        HashAlgorithm::Sha256 => hmac_hex!(Sha256, key, message),
        HashAlgorithm::Sha384 => hmac_hex!(Sha384, key, message),
        HashAlgorithm::Sha512 => hmac_hex!(Sha512, key, message),
        HashAlgorithm::Ripemd160 => hmac_hex!(Ripemd160, key, message),
    };

    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(hash("abc", HashAlgorithm::Md5), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            hash("abc", HashAlgorithm::Sha1),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hash("abc", HashAlgorithm::Sha224),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
        assert_eq!(
            hash("abc", HashAlgorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hash("abc", HashAlgorithm::Ripemd160),
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
        );
    }

    #[test]
    fn test_long_digests_have_expected_length() {
        assert_eq!(hash("abc", HashAlgorithm::Sha384).len(), 96);
        assert_eq!(hash("abc", HashAlgorithm::Sha512).len(), 128);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(hash("", algorithm), "");
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        let first = hash("same input", HashAlgorithm::Sha512);
        assert_eq!(first, hash("same input", HashAlgorithm::Sha512));
    }

    #[test]
    fn test_hash_all_covers_every_algorithm() {
        let outputs = hash_all("abc");
        assert_eq!(outputs.len(), 7);
        assert_eq!(outputs[0].algorithm, HashAlgorithm::Md5);
        assert_eq!(outputs[6].algorithm, HashAlgorithm::Ripemd160);
    }

    #[test]
    fn test_hmac_sha256() {
        assert_eq!(
            hmac(
                "The quick brown fox jumps over the lazy dog",
                "key",
                HashAlgorithm::Sha256
            )
            .unwrap(),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
        assert_eq!(
            hmac(
                "The quick brown fox jumps over the lazy dog",
                "key",
                HashAlgorithm::Md5
            )
            .unwrap(),
            "80070713463e7749b90c2dc24911e275"
        );
    }

    #[test]
    fn test_hmac_empty_inputs() {
        assert_eq!(hmac("", "key", HashAlgorithm::Sha256).unwrap(), "");
        assert_eq!(hmac("message", "", HashAlgorithm::Sha256).unwrap(), "");
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("ripemd160".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Ripemd160));
        assert!("whirlpool".parse::<HashAlgorithm>().is_err());
    }
}
