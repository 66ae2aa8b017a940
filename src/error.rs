use crate::utils::String;

/// Errors that may happen while distributing, decrypting or recovering shares.
///
/// Failed verifications and insufficient shares are not errors: they are
/// reported as `false` and `None` respectively.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Serialization error
    SerializationError,
    /// Deserialization error
    DeserializationError,
    /// Point compression error
    CompressionError,
    /// The encoded value does not have the exact size of its type
    LengthMismatch {
        /// The size required by the type being decoded.
        expected: usize,
        /// The size of the provided bytes.
        found: usize,
    },
    /// The encoded value does not start with the expected byte-string frame
    InvalidFrameHeader,
    /// The private key cannot be used to decrypt a share
    InvalidPrivateKey,
    /// The same flat index was given twice to the recovery
    DuplicateShareIndex(u32),
    /// The same public key appears in several roster entries
    DuplicateRosterEntry,
    /// The roster allocates more shares than flat indices can address
    TooManyShares,
    /// The provided slices for the MSM don't match in length
    InvalidMSMParameters,
    /// Custom error
    Custom(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Error::SerializationError => {
                write!(f, "An error happened while serializing.")
            }
            Error::DeserializationError => {
                write!(f, "An error happened while deserializing.")
            }
            Error::CompressionError => {
                write!(f, "An error happened while compressing a point.")
            }
            Error::LengthMismatch { expected, found } => {
                write!(
                    f,
                    "Invalid encoding length: expected {} bytes, found {}.",
                    expected, found
                )
            }
            Error::InvalidFrameHeader => {
                write!(f, "The encoded value has an invalid frame header.")
            }
            Error::InvalidPrivateKey => {
                write!(f, "The private key is not invertible.")
            }
            Error::DuplicateShareIndex(index) => {
                write!(f, "The share index {} was provided more than once.", index)
            }
            Error::DuplicateRosterEntry => {
                write!(f, "A public key appears in more than one roster entry.")
            }
            Error::TooManyShares => {
                write!(f, "The roster allocates more shares than can be indexed.")
            }
            Error::InvalidMSMParameters => {
                write!(
                    f,
                    "The provided slices of points and scalars do not match in length."
                )
            }
            Error::Custom(string) => {
                write!(f, "{:?}", string)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A `Result` type alias whose error is this crate's [`Error`].
pub type VssResult<T> = Result<T, Error>;
