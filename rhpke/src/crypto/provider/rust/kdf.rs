use bytes::Bytes;
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::algorithm::KdfAlgorithm;
use crate::crypto::identifier::KdfId;
use crate::crypto::provider;
use crate::utilities::error::*;

// HkdfSuite is an HMAC based extract-and-expand KDF.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct HkdfSuite {
    kdf: KdfAlgorithm,
}

impl HkdfSuite {
    pub(super) fn new(kdf: KdfAlgorithm) -> Self {
        HkdfSuite { kdf }
    }
}

impl provider::Kdf for HkdfSuite {
    fn kdf_id(&self) -> KdfId {
        self.kdf.id()
    }

    fn mac_length(&self) -> usize {
        self.kdf.mac_length()
    }

    fn extract(&self, salt: &[u8], ikm: &[u8]) -> Result<Bytes> {
        match self.kdf {
            KdfAlgorithm::KDF_HKDF_SHA256 => {
                let mut m = Hmac::<Sha256>::new_from_slice(salt)
                    .map_err(|err| Error::RustCryptoError(err.to_string()))?;
                m.update(ikm);
                Ok(Bytes::from(m.finalize().into_bytes().to_vec()))
            }
        }
    }

    fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Bytes> {
        let mut out = vec![0u8; length];

        match self.kdf {
            KdfAlgorithm::KDF_HKDF_SHA256 => {
                let hkdf = Hkdf::<Sha256>::from_prk(prk)
                    .map_err(|err| Error::RustCryptoError(err.to_string()))?;
                hkdf.expand(info, &mut out)
                    .map_err(|err| Error::RustCryptoError(err.to_string()))?;
            }
        };

        Ok(Bytes::from(out))
    }
}
