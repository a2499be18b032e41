pub mod error;
pub mod serde;
