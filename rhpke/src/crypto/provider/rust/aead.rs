use aead::{Aead as _, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use bytes::Bytes;

use crate::crypto::identifier::AeadId;
use crate::crypto::provider;
use crate::utilities::error::*;

const AES_128_KEY_SIZE: usize = 16;
const AES_256_KEY_SIZE: usize = 32;
const AES_GCM_NONCE_SIZE: usize = 12;
const AES_GCM_TAG_SIZE: usize = 16;

// AesGcm is AES in Galois Counter Mode, parameterized by its key size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct AesGcm {
    key_size: usize,
}

impl AesGcm {
    pub(super) fn new(key_size: usize) -> Result<Self> {
        match key_size {
            AES_128_KEY_SIZE | AES_256_KEY_SIZE => Ok(AesGcm { key_size }),
            _ => {
                tracing::warn!(key_size, "AES-GCM rejected key size");
                Err(Error::PrimitiveInitialization(format!(
                    "AES-GCM does not support {key_size}-byte keys"
                )))
            }
        }
    }

    fn check(&self, key: &[u8], nonce: &[u8]) -> Result<()> {
        if key.len() != self.key_size {
            return Err(Error::InvalidKeyLength(key.len()));
        }
        if nonce.len() != AES_GCM_NONCE_SIZE {
            return Err(Error::InvalidNonceLength(nonce.len()));
        }
        Ok(())
    }
}

impl provider::Aead for AesGcm {
    fn aead_id(&self) -> AeadId {
        if self.key_size == AES_128_KEY_SIZE {
            AeadId::AES_128_GCM
        } else {
            AeadId::AES_256_GCM
        }
    }

    fn key_size(&self) -> usize {
        self.key_size
    }

    fn nonce_size(&self) -> usize {
        AES_GCM_NONCE_SIZE
    }

    fn tag_size(&self) -> usize {
        AES_GCM_TAG_SIZE
    }

    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes> {
        self.check(key, nonce)?;
        let payload = Payload {
            msg: plaintext,
            aad: additional_data,
        };

        let ciphertext = if self.key_size == AES_128_KEY_SIZE {
            Aes128Gcm::new_from_slice(key)
                .map_err(|_| Error::InvalidKeyLength(key.len()))?
                .encrypt(aead::Nonce::<Aes128Gcm>::from_slice(nonce), payload)
        } else {
            Aes256Gcm::new_from_slice(key)
                .map_err(|_| Error::InvalidKeyLength(key.len()))?
                .encrypt(aead::Nonce::<Aes256Gcm>::from_slice(nonce), payload)
        }
        .map_err(|err| Error::RustCryptoError(err.to_string()))?;

        Ok(Bytes::from(ciphertext))
    }

    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        ciphertext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes> {
        self.check(key, nonce)?;
        let payload = Payload {
            msg: ciphertext,
            aad: additional_data,
        };

        let plaintext = if self.key_size == AES_128_KEY_SIZE {
            Aes128Gcm::new_from_slice(key)
                .map_err(|_| Error::InvalidKeyLength(key.len()))?
                .decrypt(aead::Nonce::<Aes128Gcm>::from_slice(nonce), payload)
        } else {
            Aes256Gcm::new_from_slice(key)
                .map_err(|_| Error::InvalidKeyLength(key.len()))?
                .decrypt(aead::Nonce::<Aes256Gcm>::from_slice(nonce), payload)
        }
        .map_err(|_| Error::OpenFailed)?;

        Ok(Bytes::from(plaintext))
    }
}
