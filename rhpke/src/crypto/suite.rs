//! [RFC9180 Sec.5.1](https://www.rfc-editor.org/rfc/rfc9180.html#section-5.1) A resolved HPKE
//! cipher suite.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::crypto::identifier::{AeadId, KdfId, KemId};
use crate::crypto::provider::{Aead, Kdf, Kem};
use crate::utilities::error::*;
use crate::utilities::serde::*;

/// suite_id = concat("HPKE", I2OSP(kem_id, 2), I2OSP(kdf_id, 2), I2OSP(aead_id, 2))
pub fn suite_id(kem_id: KemId, kdf_id: KdfId, aead_id: AeadId) -> Bytes {
    let mut buf = BytesMut::with_capacity(10);
    buf.put_slice(b"HPKE");
    buf.put_slice(kem_id.as_bytes());
    buf.put_slice(kdf_id.as_bytes());
    buf.put_slice(aead_id.as_bytes());
    buf.freeze()
}

/// The identifier triple of a suite as it is laid out on the wire
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HpkeSuiteIds {
    pub kem_id: KemId,
    pub kdf_id: KdfId,
    pub aead_id: AeadId,
}

impl Deserializer for HpkeSuiteIds {
    fn deserialize<B>(buf: &mut B) -> Result<Self>
    where
        Self: Sized,
        B: Buf,
    {
        let kem_id = KemId::deserialize(buf)?;
        let kdf_id = KdfId::deserialize(buf)?;
        let aead_id = AeadId::deserialize(buf)?;
        Ok(Self {
            kem_id,
            kdf_id,
            aead_id,
        })
    }
}

impl Serializer for HpkeSuiteIds {
    fn serialize<B>(&self, buf: &mut B) -> Result<()>
    where
        Self: Sized,
        B: BufMut,
    {
        self.kem_id.serialize(buf)?;
        self.kdf_id.serialize(buf)?;
        self.aead_id.serialize(buf)
    }
}

/// HpkeSuite owns one freshly constructed capability per role.
#[derive(Debug)]
pub struct HpkeSuite {
    pub(crate) kem: Box<dyn Kem>,
    pub(crate) kdf: Box<dyn Kdf>,
    pub(crate) aead: Box<dyn Aead>,
}

impl HpkeSuite {
    pub fn kem(&self) -> &dyn Kem {
        self.kem.as_ref()
    }

    pub fn kdf(&self) -> &dyn Kdf {
        self.kdf.as_ref()
    }

    pub fn aead(&self) -> &dyn Aead {
        self.aead.as_ref()
    }

    pub fn ids(&self) -> HpkeSuiteIds {
        HpkeSuiteIds {
            kem_id: self.kem.kem_id(),
            kdf_id: self.kdf.kdf_id(),
            aead_id: self.aead.aead_id(),
        }
    }

    pub fn suite_id(&self) -> Bytes {
        suite_id(self.kem.kem_id(), self.kdf.kdf_id(), self.aead.aead_id())
    }

    pub fn into_parts(self) -> (Box<dyn Kem>, Box<dyn Kdf>, Box<dyn Aead>) {
        (self.kem, self.kdf, self.aead)
    }
}
