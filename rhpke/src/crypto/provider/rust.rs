mod aead;
mod kdf;
mod kem;

use self::aead::AesGcm;
use self::kdf::HkdfSuite;
use self::kem::DhKem;
use super::*;

/// [RustCrypto](https://github.com/RustCrypto) based crypto provider
#[derive(Default, Debug, Copy, Clone)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub fn kem(kem: KemAlgorithm) -> Result<Box<dyn Kem>> {
        Ok(Box::new(DhKem::new(kem)))
    }

    pub fn kdf(kdf: KdfAlgorithm) -> Result<Box<dyn Kdf>> {
        Ok(Box::new(HkdfSuite::new(kdf)))
    }

    pub fn aead(aead: AeadAlgorithm) -> Result<Box<dyn Aead>> {
        Self::aes_gcm(aead.key_size())
    }

    /// AES-GCM with an arbitrary key size; only 16 and 32 byte keys can be instantiated
    pub fn aes_gcm(key_size: usize) -> Result<Box<dyn Aead>> {
        Ok(Box::new(AesGcm::new(key_size)?))
    }
}
