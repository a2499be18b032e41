//! Structured HPKE suite descriptor produced by configuration and key serialization layers.
//!
//! The enumerations follow the numbering of the key parameter schema, which is independent of
//! the wire identifiers in [`identifier`](crate::crypto::identifier). Values the schema knows but
//! this crate does not register, as well as values the schema gained after this crate was built,
//! stay representable so that they can be rejected explicitly.

use serde::{Deserialize, Serialize};

use crate::utilities::error::*;

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum HpkeKem {
    #[default]
    KemUnknown,
    DhkemX25519HkdfSha256,
    DhkemP256HkdfSha256,
    DhkemP384HkdfSha384,
    DhkemP521HkdfSha512,
    Unrecognized(i32),
}

impl From<i32> for HpkeKem {
    fn from(v: i32) -> Self {
        match v {
            0 => HpkeKem::KemUnknown,
            1 => HpkeKem::DhkemX25519HkdfSha256,
            2 => HpkeKem::DhkemP256HkdfSha256,
            3 => HpkeKem::DhkemP384HkdfSha384,
            4 => HpkeKem::DhkemP521HkdfSha512,
            _ => HpkeKem::Unrecognized(v),
        }
    }
}

impl From<HpkeKem> for i32 {
    fn from(val: HpkeKem) -> i32 {
        match val {
            HpkeKem::KemUnknown => 0,
            HpkeKem::DhkemX25519HkdfSha256 => 1,
            HpkeKem::DhkemP256HkdfSha256 => 2,
            HpkeKem::DhkemP384HkdfSha384 => 3,
            HpkeKem::DhkemP521HkdfSha512 => 4,
            HpkeKem::Unrecognized(v) => v,
        }
    }
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum HpkeKdf {
    #[default]
    KdfUnknown,
    HkdfSha256,
    HkdfSha384,
    HkdfSha512,
    Unrecognized(i32),
}

impl From<i32> for HpkeKdf {
    fn from(v: i32) -> Self {
        match v {
            0 => HpkeKdf::KdfUnknown,
            1 => HpkeKdf::HkdfSha256,
            2 => HpkeKdf::HkdfSha384,
            3 => HpkeKdf::HkdfSha512,
            _ => HpkeKdf::Unrecognized(v),
        }
    }
}

impl From<HpkeKdf> for i32 {
    fn from(val: HpkeKdf) -> i32 {
        match val {
            HpkeKdf::KdfUnknown => 0,
            HpkeKdf::HkdfSha256 => 1,
            HpkeKdf::HkdfSha384 => 2,
            HpkeKdf::HkdfSha512 => 3,
            HpkeKdf::Unrecognized(v) => v,
        }
    }
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum HpkeAead {
    #[default]
    AeadUnknown,
    Aes128Gcm,
    Aes256Gcm,
    ChaCha20Poly1305,
    Unrecognized(i32),
}

impl From<i32> for HpkeAead {
    fn from(v: i32) -> Self {
        match v {
            0 => HpkeAead::AeadUnknown,
            1 => HpkeAead::Aes128Gcm,
            2 => HpkeAead::Aes256Gcm,
            3 => HpkeAead::ChaCha20Poly1305,
            _ => HpkeAead::Unrecognized(v),
        }
    }
}

impl From<HpkeAead> for i32 {
    fn from(val: HpkeAead) -> i32 {
        match val {
            HpkeAead::AeadUnknown => 0,
            HpkeAead::Aes128Gcm => 1,
            HpkeAead::Aes256Gcm => 2,
            HpkeAead::ChaCha20Poly1305 => 3,
            HpkeAead::Unrecognized(v) => v,
        }
    }
}

/// One algorithm per HPKE role, as stored alongside keys and in configuration files.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HpkeParams {
    pub kem: HpkeKem,
    pub kdf: HpkeKdf,
    pub aead: HpkeAead,
}

impl HpkeParams {
    pub fn new(kem: HpkeKem, kdf: HpkeKdf, aead: HpkeAead) -> Self {
        HpkeParams { kem, kdf, aead }
    }

    /// Parses parameters from their JSON form, e.g. `{"kem":1,"kdf":1,"aead":2}`
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Default, Debug, Copy, Clone)]
pub struct HpkeParamsBuilder {
    kem: HpkeKem,
    kdf: HpkeKdf,
    aead: HpkeAead,
}

impl HpkeParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kem(mut self, kem: HpkeKem) -> Self {
        self.kem = kem;
        self
    }

    pub fn with_kdf(mut self, kdf: HpkeKdf) -> Self {
        self.kdf = kdf;
        self
    }

    pub fn with_aead(mut self, aead: HpkeAead) -> Self {
        self.aead = aead;
        self
    }

    pub fn build(self) -> HpkeParams {
        HpkeParams {
            kem: self.kem,
            kdf: self.kdf,
            aead: self.aead,
        }
    }
}
