use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use std::io;
use std::path::Path;

/// Streaming SHA-256 digest that finalizes into the integer form the
/// signing operations take.
#[derive(Clone, Debug, Default)]
pub struct MessageDigest {
    hasher: Sha256,
}

impl MessageDigest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    pub fn finalize(self) -> BigUint {
        BigUint::from_bytes_be(self.hasher.finalize().as_slice())
    }
}

/// SHA-256 of a byte string as a big-endian integer.
pub fn digest_bytes(payload: &[u8]) -> BigUint {
    BigUint::from_bytes_be(Sha256::digest(payload).as_slice())
}

/// SHA-256 of a file's contents as a big-endian integer.
pub fn digest_file(path: impl AsRef<Path>) -> io::Result<BigUint> {
    Ok(digest_bytes(&std::fs::read(path)?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::biguint_from_hex;

    #[test]
    fn known_sha256_vectors() {
        assert_eq!(
            digest_bytes(b"abc"),
            biguint_from_hex("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
                .unwrap()
        );
        assert_eq!(
            digest_bytes(b""),
            biguint_from_hex("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap()
        );
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut digest = MessageDigest::new();
        digest.update(b"never reuse ");
        digest.update(b"a nonce");
        assert_eq!(digest.finalize(), digest_bytes(b"never reuse a nonce"));
    }

    #[test]
    fn file_digest_matches_byte_digest() {
        // per-process name so concurrent runs do not race on one file
        let path = std::env::temp_dir().join(format!(
            "ecdsa-anatomy-digest-{}.bin",
            std::process::id()
        ));
        std::fs::write(&path, b"signed payload").unwrap();
        let digest = digest_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(digest, digest_bytes(b"signed payload"));
    }
}
