use thiserror::Error;

pub use pixelcloak_cipher::CipherError;

#[derive(Error, Debug)]
pub enum CloakError {
    /// Represents a payload that does not fit into the carrier image, nothing was written
    #[error(
        "Capacity Error: the payload needs {required} bits including the end marker, but the image offers only {available} bits"
    )]
    InsufficientCapacity { required: usize, available: usize },

    /// Represents an image that was walked entirely without finding the end marker.
    /// Either the image carries no hidden payload or it was corrupted.
    #[error("No end marker found, the image does not carry a hidden payload")]
    MarkerNotFound,

    /// Represents a bit sequence that does not end on a byte boundary
    #[error("Malformed bitstream: {bits} bits are not a multiple of 8")]
    MalformedBitstream { bits: usize },

    /// Represents an error when decrypting the data, for example a wrong key or password
    #[error("Decryption error")]
    Decryption(#[source] CipherError),

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    Encryption(#[source] CipherError),

    /// Represents an unsupported media. For example, a PDF or a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a stego target that would be stored in a lossy format
    #[error("Stego images can only be saved as PNG")]
    LossyTargetFormat,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret file")]
    MissingSecret,

    #[error("API Error: Neither a key nor a password was provided")]
    MissingKey,
}
