use bytes::Bytes;
use hpke::{kem::X25519HkdfSha256, Deserializable, Kem as KemTrait, Serializable};
use rand_core::SeedableRng;

use crate::crypto::algorithm::KemAlgorithm;
use crate::crypto::identifier::KemId;
use crate::crypto::key_pair::HpkeKeyPair;
use crate::crypto::provider;
use crate::utilities::error::*;

// DhKem is a Diffie-Hellman based KEM combined with HKDF.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct DhKem {
    kem: KemAlgorithm,
}

impl DhKem {
    pub(super) fn new(kem: KemAlgorithm) -> Self {
        DhKem { kem }
    }
}

impl provider::Kem for DhKem {
    fn kem_id(&self) -> KemId {
        self.kem.id()
    }

    fn shared_secret_size(&self) -> usize {
        self.kem.shared_secret_size()
    }

    fn public_key_size(&self) -> usize {
        self.kem.public_key_size()
    }

    fn encapsulated_key_size(&self) -> usize {
        self.kem.public_key_size()
    }

    fn generate_key_pair(&self) -> Result<HpkeKeyPair> {
        match self.kem {
            KemAlgorithm::KEM_X25519_HKDF_SHA256 => {
                let (private_key, public_key) = X25519HkdfSha256::gen_keypair(
                    &mut rand_chacha::ChaCha20Rng::from_entropy(),
                );
                Ok(HpkeKeyPair {
                    private_key: Bytes::from(private_key.to_bytes().to_vec()),
                    public_key: Bytes::from(public_key.to_bytes().to_vec()),
                })
            }
        }
    }

    fn derive_key_pair(&self, ikm: &[u8]) -> Result<HpkeKeyPair> {
        match self.kem {
            KemAlgorithm::KEM_X25519_HKDF_SHA256 => {
                let (private_key, public_key) = X25519HkdfSha256::derive_keypair(ikm);
                Ok(HpkeKeyPair {
                    private_key: Bytes::from(private_key.to_bytes().to_vec()),
                    public_key: Bytes::from(public_key.to_bytes().to_vec()),
                })
            }
        }
    }

    fn encapsulate(&self, recipient_public_key: &[u8]) -> Result<(Bytes, Bytes)> {
        match self.kem {
            KemAlgorithm::KEM_X25519_HKDF_SHA256 => {
                let public_key =
                    <X25519HkdfSha256 as KemTrait>::PublicKey::from_bytes(recipient_public_key)
                        .map_err(|err| Error::HpkeError(err.to_string()))?;

                let (shared_secret, encapped_key) = X25519HkdfSha256::encap(
                    &public_key,
                    None,
                    &mut rand_chacha::ChaCha20Rng::from_entropy(),
                )
                .map_err(|err| Error::HpkeError(err.to_string()))?;

                Ok((
                    Bytes::from(shared_secret.0.to_vec()),
                    Bytes::from(encapped_key.to_bytes().to_vec()),
                ))
            }
        }
    }

    fn decapsulate(&self, encapsulated_key: &[u8], recipient_private_key: &[u8]) -> Result<Bytes> {
        match self.kem {
            KemAlgorithm::KEM_X25519_HKDF_SHA256 => {
                let private_key =
                    <X25519HkdfSha256 as KemTrait>::PrivateKey::from_bytes(recipient_private_key)
                        .map_err(|err| Error::HpkeError(err.to_string()))?;
                let encapped_key =
                    <X25519HkdfSha256 as KemTrait>::EncappedKey::from_bytes(encapsulated_key)
                        .map_err(|err| Error::HpkeError(err.to_string()))?;

                let shared_secret = X25519HkdfSha256::decap(&private_key, None, &encapped_key)
                    .map_err(|err| Error::HpkeError(err.to_string()))?;

                Ok(Bytes::from(shared_secret.0.to_vec()))
            }
        }
    }
}
