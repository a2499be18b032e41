//! Supported algorithms per HPKE role.
//!
//! Both selector encodings, wire identifiers and descriptor values, are adapted into these closed
//! enums before anything gets constructed. Each enum has exactly one arm per encoding, so the two
//! resolution paths cannot disagree and the compiler checks that every variant maps both ways.

use std::fmt::{Display, Formatter};

use crate::crypto::identifier::{AeadId, KdfId, KemId};
use crate::crypto::params::{HpkeAead, HpkeKdf, HpkeKem};
use crate::crypto::Role;
use crate::utilities::error::*;

#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KemAlgorithm {
    // KEM_X25519_HKDF_SHA256 is a KEM using X25519 Diffie-Hellman function
    // and HKDF with SHA-256.
    KEM_X25519_HKDF_SHA256,
}

impl KemAlgorithm {
    pub const ALL: [KemAlgorithm; 1] = [KemAlgorithm::KEM_X25519_HKDF_SHA256];

    pub fn id(self) -> KemId {
        match self {
            KemAlgorithm::KEM_X25519_HKDF_SHA256 => KemId::X25519_HKDF_SHA256,
        }
    }

    pub fn descriptor(self) -> HpkeKem {
        match self {
            KemAlgorithm::KEM_X25519_HKDF_SHA256 => HpkeKem::DhkemX25519HkdfSha256,
        }
    }

    pub fn from_id(id: KemId) -> Result<Self> {
        match id {
            KemId::X25519_HKDF_SHA256 => Ok(KemAlgorithm::KEM_X25519_HKDF_SHA256),
            _ => Err(Error::unsupported(Role::Kem, id)),
        }
    }

    pub fn from_descriptor(kem: HpkeKem) -> Result<Self> {
        match kem {
            HpkeKem::DhkemX25519HkdfSha256 => Ok(KemAlgorithm::KEM_X25519_HKDF_SHA256),
            _ => Err(Error::unsupported(Role::Kem, format!("{kem:?}"))),
        }
    }

    /// Size in bytes of the shared secret produced by encapsulation
    pub fn shared_secret_size(self) -> usize {
        match self {
            KemAlgorithm::KEM_X25519_HKDF_SHA256 => 32,
        }
    }

    /// Size in bytes of a serialized public key, which is also the size of the encapsulated key
    pub fn public_key_size(self) -> usize {
        match self {
            KemAlgorithm::KEM_X25519_HKDF_SHA256 => 32,
        }
    }
}

impl Display for KemAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KdfAlgorithm {
    // KDF_HKDF_SHA256 is a KDF using HKDF with SHA-256.
    KDF_HKDF_SHA256,
}

impl KdfAlgorithm {
    pub const ALL: [KdfAlgorithm; 1] = [KdfAlgorithm::KDF_HKDF_SHA256];

    pub fn id(self) -> KdfId {
        match self {
            KdfAlgorithm::KDF_HKDF_SHA256 => KdfId::HKDF_SHA256,
        }
    }

    pub fn descriptor(self) -> HpkeKdf {
        match self {
            KdfAlgorithm::KDF_HKDF_SHA256 => HpkeKdf::HkdfSha256,
        }
    }

    pub fn from_id(id: KdfId) -> Result<Self> {
        match id {
            KdfId::HKDF_SHA256 => Ok(KdfAlgorithm::KDF_HKDF_SHA256),
            _ => Err(Error::unsupported(Role::Kdf, id)),
        }
    }

    pub fn from_descriptor(kdf: HpkeKdf) -> Result<Self> {
        match kdf {
            HpkeKdf::HkdfSha256 => Ok(KdfAlgorithm::KDF_HKDF_SHA256),
            _ => Err(Error::unsupported(Role::Kdf, format!("{kdf:?}"))),
        }
    }

    /// Output size of the Extract function in bytes
    pub fn mac_length(self) -> usize {
        match self {
            KdfAlgorithm::KDF_HKDF_SHA256 => 32,
        }
    }
}

impl Display for KdfAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AeadAlgorithm {
    // AEAD_AES128GCM is AES-128 block cipher in Galois Counter Mode (GCM).
    AEAD_AES128GCM,
    // AEAD_AES256GCM is AES-256 block cipher in Galois Counter Mode (GCM).
    AEAD_AES256GCM,
}

impl AeadAlgorithm {
    pub const ALL: [AeadAlgorithm; 2] = [AeadAlgorithm::AEAD_AES128GCM, AeadAlgorithm::AEAD_AES256GCM];

    pub fn id(self) -> AeadId {
        match self {
            AeadAlgorithm::AEAD_AES128GCM => AeadId::AES_128_GCM,
            AeadAlgorithm::AEAD_AES256GCM => AeadId::AES_256_GCM,
        }
    }

    pub fn descriptor(self) -> HpkeAead {
        match self {
            AeadAlgorithm::AEAD_AES128GCM => HpkeAead::Aes128Gcm,
            AeadAlgorithm::AEAD_AES256GCM => HpkeAead::Aes256Gcm,
        }
    }

    pub fn from_id(id: AeadId) -> Result<Self> {
        match id {
            AeadId::AES_128_GCM => Ok(AeadAlgorithm::AEAD_AES128GCM),
            AeadId::AES_256_GCM => Ok(AeadAlgorithm::AEAD_AES256GCM),
            _ => Err(Error::unsupported(Role::Aead, id)),
        }
    }

    pub fn from_descriptor(aead: HpkeAead) -> Result<Self> {
        match aead {
            HpkeAead::Aes128Gcm => Ok(AeadAlgorithm::AEAD_AES128GCM),
            HpkeAead::Aes256Gcm => Ok(AeadAlgorithm::AEAD_AES256GCM),
            _ => Err(Error::unsupported(Role::Aead, format!("{aead:?}"))),
        }
    }

    // key_size returns the size in bytes of the keys used by the AEAD cipher.
    pub fn key_size(self) -> usize {
        match self {
            AeadAlgorithm::AEAD_AES128GCM => 16,
            AeadAlgorithm::AEAD_AES256GCM => 32,
        }
    }
}

impl Display for AeadAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
