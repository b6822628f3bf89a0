//! File digests
//!
//! Chunked SHA-256 so memory use stays bounded by one chunk buffer regardless
//! of input size. Matching against the known-bad set is exact only: a
//! one-byte mutation evades this signal, which is the accepted tradeoff for
//! zero false positives from this stage.

use std::io::Read;

use sha2::{Digest, Sha256};

/// Digest chunk size; hashing never needs more than this in flight.
const DIGEST_CHUNK_SIZE: usize = 64 * 1024;

/// SHA-256 over already-buffered content, fed in fixed-size chunks.
pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    for chunk in content.chunks(DIGEST_CHUNK_SIZE) {
        hasher.update(chunk);
    }
    hex::encode(hasher.finalize())
}

/// SHA-256 over a reader, for callers that stream from disk instead of
/// buffering the whole file.
pub fn sha256_hex_reader<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; DIGEST_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_reader_matches_slice() {
        // Bigger than one chunk so the loop actually iterates
        let content = vec![0xA5u8; DIGEST_CHUNK_SIZE * 3 + 17];
        let from_slice = sha256_hex(&content);
        let from_reader = sha256_hex_reader(content.as_slice()).unwrap();
        assert_eq!(from_slice, from_reader);
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = sha256_hex(b"payload");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
