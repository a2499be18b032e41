//! [RFC9180 Sec.4](https://www.rfc-editor.org/rfc/rfc9180.html#section-4) capability interfaces
//! for the three HPKE roles and the implementations that back them.

#[cfg(test)]
mod provider_test;

#[cfg(feature = "RustCryptoProvider")]
mod rust;
#[cfg(feature = "RustCryptoProvider")]
pub use self::rust::RustCryptoProvider;

use bytes::{BufMut, Bytes, BytesMut};
use std::fmt::Debug;

use crate::crypto::algorithm::{AeadAlgorithm, KdfAlgorithm, KemAlgorithm};
use crate::crypto::identifier::{AeadId, KdfId, KemId};
use crate::crypto::key_pair::HpkeKeyPair;
use crate::utilities::error::*;

/// [RFC9180 Sec.4](https://www.rfc-editor.org/rfc/rfc9180.html#section-4) version label prefixed
/// to every labeled KDF input - "HPKE-v1"
pub const HPKE_V1: &[u8] = b"HPKE-v1";

/// [RFC9180 Sec.4](https://www.rfc-editor.org/rfc/rfc9180.html#section-4) Kem trait provides a
/// Key Encapsulation Mechanism
pub trait Kem: Send + Sync + Debug {
    /// Wire identifier of this KEM
    fn kem_id(&self) -> KemId;

    /// The length in bytes of a KEM shared secret (Nsecret)
    fn shared_secret_size(&self) -> usize;
    /// The length in bytes of a serialized public key (Npk)
    fn public_key_size(&self) -> usize;
    /// The length in bytes of an encapsulated key (Nenc)
    fn encapsulated_key_size(&self) -> usize;

    /// Generate a new random key pair
    fn generate_key_pair(&self) -> Result<HpkeKeyPair>;
    /// Deterministically derive a key pair from input keying material
    fn derive_key_pair(&self, ikm: &[u8]) -> Result<HpkeKeyPair>;

    /// Generate an ephemeral key pair and return the shared secret together with the encapsulated
    /// key for the recipient
    fn encapsulate(&self, recipient_public_key: &[u8]) -> Result<(Bytes, Bytes)>;
    /// Recover the shared secret from an encapsulated key with the recipient's private key
    fn decapsulate(&self, encapsulated_key: &[u8], recipient_private_key: &[u8]) -> Result<Bytes>;
}

/// [RFC9180 Sec.4](https://www.rfc-editor.org/rfc/rfc9180.html#section-4) Kdf trait provides a
/// Key Derivation Function
pub trait Kdf: Send + Sync + Debug {
    /// Wire identifier of this KDF
    fn kdf_id(&self) -> KdfId;

    /// The output size of the Extract function in bytes (Nh)
    fn mac_length(&self) -> usize;

    /// Extract a pseudorandom key of fixed length Nh bytes from input keying material and an
    /// optional byte string salt.
    fn extract(&self, salt: &[u8], ikm: &[u8]) -> Result<Bytes>;
    /// Expand a pseudorandom key using optional string info into length bytes of output keying
    /// material.
    fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Bytes>;

    /// LabeledExtract(salt, label, ikm)
    fn labeled_extract(
        &self,
        salt: &[u8],
        label: &[u8],
        ikm: &[u8],
        suite_id: &[u8],
    ) -> Result<Bytes> {
        let mut labeled_ikm = BytesMut::new();
        labeled_ikm.put_slice(HPKE_V1);
        labeled_ikm.put_slice(suite_id);
        labeled_ikm.put_slice(label);
        labeled_ikm.put_slice(ikm);
        self.extract(salt, &labeled_ikm)
    }

    /// LabeledExpand(prk, label, info, L)
    fn labeled_expand(
        &self,
        prk: &[u8],
        label: &[u8],
        info: &[u8],
        length: usize,
        suite_id: &[u8],
    ) -> Result<Bytes> {
        let l = u16::try_from(length).map_err(|_| {
            Error::RustCryptoError(format!("expand length {length} exceeds 65535"))
        })?;

        let mut labeled_info = BytesMut::new();
        labeled_info.put_u16(l);
        labeled_info.put_slice(HPKE_V1);
        labeled_info.put_slice(suite_id);
        labeled_info.put_slice(label);
        labeled_info.put_slice(info);
        self.expand(prk, &labeled_info, length)
    }

    /// Extract followed by Expand
    fn extract_and_expand(
        &self,
        salt: &[u8],
        ikm: &[u8],
        info: &[u8],
        length: usize,
    ) -> Result<Bytes> {
        let prk = self.extract(salt, ikm)?;
        self.expand(&prk, info, length)
    }
}

/// [RFC9180 Sec.4](https://www.rfc-editor.org/rfc/rfc9180.html#section-4) Aead trait provides
/// Authenticated Encryption with Associated Data
pub trait Aead: Send + Sync + Debug {
    /// Wire identifier of this AEAD
    fn aead_id(&self) -> AeadId;

    /// The length in bytes of a key for this algorithm (Nk)
    fn key_size(&self) -> usize;
    /// The length in bytes of a nonce for this algorithm (Nn)
    fn nonce_size(&self) -> usize;
    /// The length in bytes of the authentication tag for this algorithm (Nt)
    fn tag_size(&self) -> usize;

    /// Encrypt and authenticate plaintext with associated data aad using symmetric key and nonce,
    /// yielding ciphertext
    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes>;
    /// Decrypt ciphertext using associated data with symmetric key and nonce, returning plaintext
    /// message
    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        ciphertext: &[u8],
        additional_data: &[u8],
    ) -> Result<Bytes>;
}

#[cfg(feature = "RustCryptoProvider")]
pub(crate) fn new_kem(kem: KemAlgorithm) -> Result<Box<dyn Kem>> {
    RustCryptoProvider::kem(kem)
}

#[cfg(feature = "RustCryptoProvider")]
pub(crate) fn new_kdf(kdf: KdfAlgorithm) -> Result<Box<dyn Kdf>> {
    RustCryptoProvider::kdf(kdf)
}

#[cfg(feature = "RustCryptoProvider")]
pub(crate) fn new_aead(aead: AeadAlgorithm) -> Result<Box<dyn Aead>> {
    RustCryptoProvider::aead(aead)
}

#[cfg(not(feature = "RustCryptoProvider"))]
pub(crate) fn new_kem(kem: KemAlgorithm) -> Result<Box<dyn Kem>> {
    Err(no_provider(kem))
}

#[cfg(not(feature = "RustCryptoProvider"))]
pub(crate) fn new_kdf(kdf: KdfAlgorithm) -> Result<Box<dyn Kdf>> {
    Err(no_provider(kdf))
}

#[cfg(not(feature = "RustCryptoProvider"))]
pub(crate) fn new_aead(aead: AeadAlgorithm) -> Result<Box<dyn Aead>> {
    Err(no_provider(aead))
}

#[cfg(not(feature = "RustCryptoProvider"))]
fn no_provider(algorithm: impl std::fmt::Display) -> Error {
    Error::PrimitiveInitialization(format!(
        "{algorithm} requires the RustCryptoProvider feature"
    ))
}
