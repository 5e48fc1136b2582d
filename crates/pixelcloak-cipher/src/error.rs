pub use argon2::Error as Argon2Error;
pub use chacha20poly1305::Error as Chacha20Poly1305Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("Key derivation error")]
    KeyDerivation(Argon2Error),

    #[error("Key derivation parameter error")]
    KeyDerivationParam(Argon2Error),

    /// Wrong key, or the sealed data was corrupted or truncated
    #[error("Decryption error")]
    Decryption(Chacha20Poly1305Error),

    #[error("Encryption error")]
    Encryption(Chacha20Poly1305Error),

    /// The sealed data cannot even hold the authentication tag and the trailing nonce (and salt)
    #[error("Sealed data is too short: {len} bytes, at least {min} bytes expected")]
    DataTooShort { len: usize, min: usize },
}
