use bytes::Bytes;

/// HpkeKeyPair is a wrapper of a KEM capability's serialized key pair
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct HpkeKeyPair {
    pub(crate) private_key: Bytes,
    pub(crate) public_key: Bytes,
}

impl HpkeKeyPair {
    /// Returns private key
    pub fn private_key(&self) -> &[u8] {
        self.private_key.as_ref()
    }

    /// Returns public key
    pub fn public_key(&self) -> &[u8] {
        self.public_key.as_ref()
    }
}
