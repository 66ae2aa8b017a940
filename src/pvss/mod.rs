//! The cryptographic engine: a SCRAPE-style publicly verifiable secret
//! sharing scheme over the prime-order group of a [`CipherSuite`](crate::CipherSuite).
//!
//! The coordinator in [`vss`](crate::vss) only reaches the engine through
//! the functions re-exported here.

pub(crate) mod dleq;
pub(crate) mod escrow;
pub(crate) mod polynomial;
pub(crate) mod share;

pub use dleq::{DleqProof, ParallelProofs};
pub use share::{Commitment, DecryptedShare, DhSecret, EncryptedShare, Secret, SecretProof};

pub(crate) use escrow::{verify_secret, verify_shares, Escrow};
pub(crate) use share::{decrypt_share, recover, verify_decrypted_share};
