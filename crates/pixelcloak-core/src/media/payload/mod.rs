mod crypted;

pub use crypted::*;

use crate::result::Result;

/// Seals secret bytes before they get embedded and opens them after extraction.
///
/// Implementations are read-only after construction and may be shared by
/// any number of concurrent hide and unveil operations.
pub trait PayloadCipher: Send + Sync {
    fn seal(&self, secret: &[u8]) -> Result<Vec<u8>>;

    /// fails with [`crate::CloakError::Decryption`] for a foreign key or corrupted data
    fn open(&self, sealed: &[u8]) -> Result<Vec<u8>>;
}
