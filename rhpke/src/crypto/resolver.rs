//! Resolves algorithm selectors into ready to use capabilities.
//!
//! Every role has two entry points: one keyed by the wire identifier and one keyed by the
//! descriptor value. Both adapt their input into the role's algorithm enum and construct through
//! the same function, so corresponding inputs always yield equivalent capabilities. Unknown input
//! fails with [`Error::UnsupportedAlgorithm`]; a known algorithm that cannot be instantiated fails
//! with [`Error::PrimitiveInitialization`]. Nothing is cached, every call returns a new instance.

use bytes::Buf;
use tracing::{debug, warn};

use crate::crypto::algorithm::{AeadAlgorithm, KdfAlgorithm, KemAlgorithm};
use crate::crypto::identifier::{AeadId, KdfId, KemId};
use crate::crypto::params::{HpkeAead, HpkeKdf, HpkeKem, HpkeParams};
use crate::crypto::provider::{self, Aead, Kdf, Kem};
use crate::crypto::suite::{HpkeSuite, HpkeSuiteIds};
use crate::utilities::error::*;
use crate::utilities::serde::Deserializer;

fn trace_err(err: Error) -> Error {
    match &err {
        Error::UnsupportedAlgorithm { role, id } => {
            debug!(%role, %id, "unsupported HPKE algorithm");
        }
        Error::PrimitiveInitialization(reason) => {
            warn!(%reason, "HPKE primitive initialization failed");
        }
        _ => {}
    }
    err
}

/// Returns the KEM registered under `id`
pub fn kem_from_id(id: KemId) -> Result<Box<dyn Kem>> {
    KemAlgorithm::from_id(id)
        .and_then(provider::new_kem)
        .map_err(trace_err)
}

/// Returns the KEM registered under the raw two-byte identifier `id`
pub fn kem_from_bytes(id: &[u8]) -> Result<Box<dyn Kem>> {
    KemId::try_from(id).map_err(trace_err).and_then(kem_from_id)
}

/// Returns the KEM named by a descriptor value
pub fn kem_from_descriptor(kem: HpkeKem) -> Result<Box<dyn Kem>> {
    KemAlgorithm::from_descriptor(kem)
        .and_then(provider::new_kem)
        .map_err(trace_err)
}

/// Returns the KEM named by `params.kem`
pub fn kem_from_params(params: &HpkeParams) -> Result<Box<dyn Kem>> {
    kem_from_descriptor(params.kem)
}

/// Returns the KDF registered under `id`
pub fn kdf_from_id(id: KdfId) -> Result<Box<dyn Kdf>> {
    KdfAlgorithm::from_id(id)
        .and_then(provider::new_kdf)
        .map_err(trace_err)
}

/// Returns the KDF registered under the raw two-byte identifier `id`
pub fn kdf_from_bytes(id: &[u8]) -> Result<Box<dyn Kdf>> {
    KdfId::try_from(id).map_err(trace_err).and_then(kdf_from_id)
}

/// Returns the KDF named by a descriptor value
pub fn kdf_from_descriptor(kdf: HpkeKdf) -> Result<Box<dyn Kdf>> {
    KdfAlgorithm::from_descriptor(kdf)
        .and_then(provider::new_kdf)
        .map_err(trace_err)
}

/// Returns the KDF named by `params.kdf`
pub fn kdf_from_params(params: &HpkeParams) -> Result<Box<dyn Kdf>> {
    kdf_from_descriptor(params.kdf)
}

/// Returns the AEAD registered under `id`
pub fn aead_from_id(id: AeadId) -> Result<Box<dyn Aead>> {
    AeadAlgorithm::from_id(id)
        .and_then(provider::new_aead)
        .map_err(trace_err)
}

/// Returns the AEAD registered under the raw two-byte identifier `id`
pub fn aead_from_bytes(id: &[u8]) -> Result<Box<dyn Aead>> {
    AeadId::try_from(id).map_err(trace_err).and_then(aead_from_id)
}

/// Returns the AEAD named by a descriptor value
pub fn aead_from_descriptor(aead: HpkeAead) -> Result<Box<dyn Aead>> {
    AeadAlgorithm::from_descriptor(aead)
        .and_then(provider::new_aead)
        .map_err(trace_err)
}

/// Returns the AEAD named by `params.aead`
pub fn aead_from_params(params: &HpkeParams) -> Result<Box<dyn Aead>> {
    aead_from_descriptor(params.aead)
}

/// Resolves all three roles of `params`; the first failing role aborts the call
pub fn suite_from_params(params: &HpkeParams) -> Result<HpkeSuite> {
    Ok(HpkeSuite {
        kem: kem_from_params(params)?,
        kdf: kdf_from_params(params)?,
        aead: aead_from_params(params)?,
    })
}

/// Resolves all three roles from their wire identifiers
pub fn suite_from_ids(kem_id: KemId, kdf_id: KdfId, aead_id: AeadId) -> Result<HpkeSuite> {
    Ok(HpkeSuite {
        kem: kem_from_id(kem_id)?,
        kdf: kdf_from_id(kdf_id)?,
        aead: aead_from_id(aead_id)?,
    })
}

/// Reads a kem_id, kdf_id, aead_id triple from `buf` and resolves it
pub fn suite_from_wire<B: Buf>(buf: &mut B) -> Result<HpkeSuite> {
    let ids = HpkeSuiteIds::deserialize(buf)?;
    suite_from_ids(ids.kem_id, ids.kdf_id, ids.aead_id)
}
