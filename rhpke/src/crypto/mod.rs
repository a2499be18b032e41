//! [RFC9180](https://www.rfc-editor.org/rfc/rfc9180.html) HPKE algorithm identifiers, suite
//! descriptors and the resolver that turns either of them into KEM, KDF and AEAD capabilities.


pub mod algorithm;
pub mod identifier;
pub mod key_pair;
pub mod params;
pub mod provider;
pub mod resolver;
pub mod suite;

use std::fmt::{Display, Formatter};

/// The three HPKE roles an algorithm identifier is scoped to
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Role {
    Kem,
    Kdf,
    Aead,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Kem => write!(f, "KEM"),
            Role::Kdf => write!(f, "KDF"),
            Role::Aead => write!(f, "AEAD"),
        }
    }
}
