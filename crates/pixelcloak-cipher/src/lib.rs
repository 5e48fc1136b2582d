//! # Payload sealing
//! Authenticated encryption for the bytes that get hidden inside images.
//!
//! Two ways to get a key:
//! - [`Key::generate`] for a random key that lives as long as its owner, see [`Cipher`]
//! - a password, see [`encrypt_data`] and [`decrypt_data`], the salt travels with the data
//!
//! Sealed layout produced by [`Cipher::encrypt`]:
//! ```text
//! [ciphertext][poly1305 tag: 16 bytes][nonce: 24 bytes]
//! ```
//! and by [`encrypt_data`]:
//! ```text
//! [ciphertext][poly1305 tag: 16 bytes][nonce: 24 bytes][salt: 32 bytes]
//! ```

use chacha20poly1305::aead::{Aead, AeadCore};
use chacha20poly1305::{Key as AeadKey, KeyInit, XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

pub mod error;
pub mod key;

pub use crate::error::CipherError;
pub use crate::key::{Key, KEY_LEN};

pub const NONCE_LEN: usize = 24;
pub const TAG_LEN: usize = 16;
pub const SALT_LEN: usize = 32;

pub type Result<T> = std::result::Result<T, CipherError>;

/// XChaCha20Poly1305 bound to one [`Key`].
///
/// Read-only after construction, so one instance can serve many concurrent callers.
pub struct Cipher {
    aead: XChaCha20Poly1305,
}

impl Cipher {
    pub fn new(key: &Key) -> Self {
        Self {
            aead: XChaCha20Poly1305::new(AeadKey::from_slice(key.as_bytes())),
        }
    }

    /// encrypts `data` under a fresh random nonce, the nonce is appended to the output
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        debug_assert_eq!(nonce.len(), NONCE_LEN);

        let mut sealed = self
            .aead
            .encrypt(&nonce, data)
            .map_err(CipherError::Encryption)?;
        sealed.extend_from_slice(&nonce);

        Ok(sealed)
    }

    /// decrypts data produced by [`Cipher::encrypt`] with the same key
    pub fn decrypt(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        let min = TAG_LEN + NONCE_LEN;
        if sealed.len() < min {
            return Err(CipherError::DataTooShort {
                len: sealed.len(),
                min,
            });
        }
        let (ciphertext, nonce) = sealed.split_at(sealed.len() - NONCE_LEN);

        self.aead
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(CipherError::Decryption)
    }
}

/// encrypt data with password, it uses argon2id for key derivation and XChaCha20Poly1305 for encryption
pub fn encrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let key = Key::derive_from_password(password, &salt)?;

    let mut sealed = Cipher::new(&key).encrypt(data)?;
    sealed.extend_from_slice(&salt);
    salt.zeroize();

    Ok(sealed)
}

/// decrypt data with password, it uses argon2id for key derivation and XChaCha20Poly1305 for encryption
pub fn decrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    let min = TAG_LEN + NONCE_LEN + SALT_LEN;
    if data.len() < min {
        return Err(CipherError::DataTooShort {
            len: data.len(),
            min,
        });
    }
    let (sealed, salt) = data.split_at(data.len() - SALT_LEN);
    let key = Key::derive_from_password(password, salt)?;

    Cipher::new(&key).decrypt(sealed)
}
