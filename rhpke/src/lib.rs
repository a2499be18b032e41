#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]

pub mod crypto;
pub mod utilities;

pub use crate::crypto::identifier::{AeadId, KdfId, KemId};
pub use crate::crypto::params::{HpkeAead, HpkeKdf, HpkeKem, HpkeParams, HpkeParamsBuilder};
pub use crate::crypto::provider::{Aead, Kdf, Kem};
pub use crate::crypto::resolver::*;
pub use crate::crypto::suite::HpkeSuite;
pub use crate::crypto::Role;
pub use crate::utilities::error::{Error, Result};
