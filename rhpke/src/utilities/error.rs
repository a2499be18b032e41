use thiserror::Error;

use crate::crypto::Role;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("buffer too small")]
    BufferTooSmall,
    #[error("unsupported HPKE {role} algorithm {id}")]
    UnsupportedAlgorithm { role: Role, id: String },
    #[error("failed to initialize HPKE primitive: {0}")]
    PrimitiveInitialization(String),
    #[error("invalid key length {0}")]
    InvalidKeyLength(usize),
    #[error("invalid nonce length {0}")]
    InvalidNonceLength(usize),
    #[error("AEAD open failed")]
    OpenFailed,
    #[error("Hpke error {0}")]
    HpkeError(String),
    #[error("RustCrypto error {0}")]
    RustCryptoError(String),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn unsupported(role: Role, id: impl ToString) -> Self {
        Error::UnsupportedAlgorithm {
            role,
            id: id.to_string(),
        }
    }

    /// Returns true if the algorithm is not registered for its role in this build
    pub fn is_unsupported_algorithm(&self) -> bool {
        matches!(self, Error::UnsupportedAlgorithm { .. })
    }

    /// Returns true if a registered algorithm could not be instantiated
    pub fn is_primitive_initialization(&self) -> bool {
        matches!(self, Error::PrimitiveInitialization(_))
    }
}
