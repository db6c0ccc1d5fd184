//! Content hashing for the H field.
//!
//! The tag is the SHA-256 digest of the content, XOR-folded from 32 bytes
//! down to 16 bits.

use sha2::{Digest, Sha256};

use crate::types::ContentHash;

/// Incremental hasher producing a [`ContentHash`].
///
/// Feeding the same bytes in any chunking yields the same tag.
#[derive(Debug, Clone, Default)]
pub struct ContentHasher {
    inner: Sha256,
}

impl ContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, bytes: impl AsRef<[u8]>) {
        self.inner.update(bytes.as_ref());
    }

    pub fn finish(self) -> ContentHash {
        fold(&self.inner.finalize())
    }
}

/// Lets readers be streamed in with [`std::io::copy`].
impl std::io::Write for ContentHasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Hash `bytes` in one go.
pub fn content_hash(bytes: impl AsRef<[u8]>) -> ContentHash {
    fold(&Sha256::digest(bytes.as_ref()))
}

/// XOR of the digest's big-endian 16-bit words.
fn fold(digest: &[u8]) -> ContentHash {
    let folded = digest
        .chunks_exact(2)
        .fold(0u16, |acc, pair| acc ^ u16::from_be_bytes([pair[0], pair[1]]));
    ContentHash::new(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_a_fixed_tag() {
        // SHA-256("") = e3b0c442 98fc1c14 9afbf4c8 996fb924 27ae41e4 649b934c a495991b 7852b855
        assert_eq!(content_hash(b"").to_string(), "8176");
    }

    #[test]
    fn fold_xors_words() {
        assert_eq!(fold(&[0x12, 0x34, 0x00, 0x0F]), ContentHash::new(0x123B));
        assert_eq!(fold(&[0xFF, 0xFF, 0xFF, 0xFF]), ContentHash::new(0));
    }

    #[test]
    fn chunking_does_not_change_the_tag() {
        let mut hasher = ContentHasher::new();
        hasher.update("hello, ");
        hasher.update(b"world");
        assert_eq!(hasher.finish(), content_hash("hello, world"));
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut hasher = ContentHasher::new();
        std::io::copy(&mut &b"streamed content"[..], &mut hasher).unwrap();
        assert_eq!(hasher.finish(), content_hash("streamed content"));
    }

    #[test]
    fn different_content_usually_differs() {
        assert_ne!(content_hash("1.2a3"), content_hash("1.2a4"));
    }
}
