//! [RFC9180 Sec.7](https://www.rfc-editor.org/rfc/rfc9180.html#section-7) Algorithm identifiers
//! as they are carried on the wire.
//!
//! Every role has its own identifier type, so a KDF identifier can never be handed to the KEM
//! resolver. Untyped bytes coming off a buffer are converted with `TryFrom<&[u8]>`, which only
//! accepts exactly two bytes.

use bytes::{Buf, BufMut};
use std::fmt::{Display, Formatter};

use crate::crypto::Role;
use crate::utilities::error::*;
use crate::utilities::serde::*;

pub(crate) fn hex_id(id: &[u8]) -> String {
    let mut s = String::with_capacity(2 + id.len() * 2);
    s.push_str("0x");
    for b in id {
        s.push_str(&format!("{b:02x}"));
    }
    s
}

macro_rules! algorithm_identifier {
    ($(#[$meta:meta])* $name:ident, $role:expr) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub struct $name([u8; 2]);

        impl $name {
            pub const fn from_u16(v: u16) -> Self {
                Self(v.to_be_bytes())
            }

            pub const fn to_u16(self) -> u16 {
                u16::from_be_bytes(self.0)
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn role(&self) -> Role {
                $role
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(id: &[u8]) -> Result<Self> {
                let id: [u8; 2] = id
                    .try_into()
                    .map_err(|_| Error::unsupported($role, hex_id(id)))?;
                Ok(Self(id))
            }
        }

        impl From<u16> for $name {
            fn from(v: u16) -> Self {
                Self::from_u16(v)
            }
        }

        impl From<$name> for u16 {
            fn from(val: $name) -> u16 {
                val.to_u16()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", hex_id(&self.0))
            }
        }

        impl Deserializer for $name {
            fn deserialize<B>(buf: &mut B) -> Result<Self>
            where
                Self: Sized,
                B: Buf,
            {
                Ok(Self::from_u16(deserialize_u16(buf)?))
            }
        }

        impl Serializer for $name {
            fn serialize<B>(&self, buf: &mut B) -> Result<()>
            where
                Self: Sized,
                B: BufMut,
            {
                serialize_u16(self.to_u16(), buf)
            }
        }
    };
}

algorithm_identifier!(
    /// Two-byte KEM identifier
    KemId,
    Role::Kem
);

algorithm_identifier!(
    /// Two-byte KDF identifier
    KdfId,
    Role::Kdf
);

algorithm_identifier!(
    /// Two-byte AEAD identifier
    AeadId,
    Role::Aead
);

impl KemId {
    /// DHKEM(X25519, HKDF-SHA256)
    pub const X25519_HKDF_SHA256: KemId = KemId::from_u16(0x0020);
}

impl KdfId {
    /// HKDF-SHA256
    pub const HKDF_SHA256: KdfId = KdfId::from_u16(0x0001);
}

impl AeadId {
    /// AES-128-GCM
    pub const AES_128_GCM: AeadId = AeadId::from_u16(0x0001);
    /// AES-256-GCM
    pub const AES_256_GCM: AeadId = AeadId::from_u16(0x0002);
}
