//!
// -*- mode: rust; -*-
//
// This file is part of scrape-vss.
// Copyright (c) 2021-2023 Toposware Inc.
// See LICENSE for licensing information.
//
// Authors:
// - Toposware developers <dev@toposware.com>

//! This library provides a Rust implementation of a **publicly verifiable secret sharing**
//! (PVSS) round, based on the SCRAPE scheme detailed in <https://eprint.iacr.org/2017/216>.
//!
//! A dealer splits a fresh secret among a set of participants identified by their public keys,
//! such that any `t` decrypted shares recover it. Every step can be checked by anyone: the
//! encrypted shares against the dealer's proof, each decrypted share against its encrypted
//! counterpart, and the recovered secret against the dealer's proof again.
//!
//! Shares are assigned by sorting the public keys of the round by their canonical encoding.
//! A key may be listed several times, in which case it receives several shares. At recovery
//! time the reported shares are laid out on the flat share index space of the round, leaving
//! holes for participants that did not report anything.
//!
//! # Usage
//!
//! All operations are parameterized by a [`CipherSuite`], defining the prime-order group and
//! the hash function used by the scheme. The following example creates a CipherSuite over the
//! Secp256k1 curve, with SHA-256 as internal hash function.
//!
//! ```rust
//! use scrape_vss::CipherSuite;
//! use sha2::Sha256;
//! use zeroize::Zeroize;
//! use ark_secp256k1::Projective as G;
//!
//! #[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Zeroize)]
//! pub struct Secp256k1Sha256;
//!
//! impl CipherSuite for Secp256k1Sha256 {
//!     type G = G;
//!
//!     type InnerHasher = Sha256;
//!
//!     fn context_string() -> String {
//!         "SCRAPE-PVSS_SECP256K1_SHA256".to_owned()
//!     }
//! }
//! ```
//!
//! We will use the `Secp256k1Sha256` CipherSuite exported by the [`testing`] module for all the
//! following examples.
//!
//! ## Key generation
//!
//! Alice, Bob, Carol, Dave and Eve each generate a key pair, and publish their public key.
//!
//! ```rust
//! use scrape_vss::keys::KeyPair;
//! use scrape_vss::testing::Secp256k1Sha256;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//!
//! let alice = KeyPair::<Secp256k1Sha256>::new(&mut rng);
//! let bob = KeyPair::<Secp256k1Sha256>::new(&mut rng);
//!
//! // Key pairs can also be derived from a seed, which is handy for tests.
//! let carol = KeyPair::<Secp256k1Sha256>::from_seed(b"carol");
//! assert_eq!(carol.public_key(), KeyPair::<Secp256k1Sha256>::from_seed(b"carol").public_key());
//! ```
//!
//! ## Distribution
//!
//! The dealer generates a secret to be recovered by any 2 of them, and encrypts one share to
//! each public key. The dealer then publishes the proof and the encrypted shares.
//!
//! ```rust
//! # use scrape_vss::keys::KeyPair;
//! # use scrape_vss::testing::Secp256k1Sha256;
//! # use scrape_vss::VssResult;
//! # use rand::rngs::OsRng;
//! use scrape_vss::vss::{generate_shared_secret, verify_encrypted_shares};
//! #
//! # fn do_test() -> VssResult<()> {
//! # let mut rng = OsRng;
//! # let participants: Vec<KeyPair<Secp256k1Sha256>> =
//! #     (0..5).map(|_| KeyPair::new(&mut rng)).collect();
//!
//! let public_keys: Vec<_> = participants.iter().map(|p| *p.public_key()).collect();
//! let (secret, proof, encrypted_shares) = generate_shared_secret(2, &public_keys, &mut rng)?;
//!
//! // Anyone can check the encrypted shares against the proof.
//! assert!(verify_encrypted_shares(&proof, 2, &encrypted_shares, &mut rng));
//! # Ok(()) } fn main() { assert!(do_test().is_ok()); }
//! ```
//!
//! ## Decryption
//!
//! Each participant picks the shares addressed to them, decrypts them and publishes the
//! decrypted shares. Anyone can check a decrypted share against its encrypted counterpart.
//!
//! ```rust
//! # use scrape_vss::keys::KeyPair;
//! # use scrape_vss::testing::Secp256k1Sha256;
//! # use scrape_vss::VssResult;
//! # use rand::rngs::OsRng;
//! # use scrape_vss::vss::generate_shared_secret;
//! use scrape_vss::vss::{decrypt_shares, encrypted_shares_of, verify_decrypted_share};
//! #
//! # fn do_test() -> VssResult<()> {
//! # let mut rng = OsRng;
//! # let participants: Vec<KeyPair<Secp256k1Sha256>> =
//! #     (0..5).map(|_| KeyPair::new(&mut rng)).collect();
//! # let public_keys: Vec<_> = participants.iter().map(|p| *p.public_key()).collect();
//! # let (secret, proof, encrypted_shares) = generate_shared_secret(2, &public_keys, &mut rng)?;
//!
//! let alice = &participants[0];
//! let alice_encrypted = encrypted_shares_of(alice.public_key(), &encrypted_shares);
//! let alice_decrypted = decrypt_shares(alice, &alice_encrypted, &mut rng)?;
//!
//! for (encrypted, decrypted) in alice_encrypted.iter().zip(alice_decrypted.iter()) {
//!     assert!(verify_decrypted_share(alice.public_key(), encrypted, decrypted));
//! }
//! # Ok(()) } fn main() { assert!(do_test().is_ok()); }
//! ```
//!
//! ## Recovery
//!
//! Once enough verified decrypted shares have been collected, the secret is recovered. The
//! roster of the round must be the one the shares were generated for: it is derived from the
//! same public keys. Participants that have not reported their shares are simply left out.
//!
//! ```rust
//! # use scrape_vss::keys::KeyPair;
//! # use scrape_vss::testing::Secp256k1Sha256;
//! # use scrape_vss::VssResult;
//! # use rand::rngs::OsRng;
//! # use scrape_vss::vss::{decrypt_shares, encrypted_shares_of, generate_shared_secret};
//! use scrape_vss::vss::{recover_secret, verify_secret, ReportedShares, Roster};
//! #
//! # fn do_test() -> VssResult<()> {
//! # let mut rng = OsRng;
//! # let participants: Vec<KeyPair<Secp256k1Sha256>> =
//! #     (0..5).map(|_| KeyPair::new(&mut rng)).collect();
//! # let public_keys: Vec<_> = participants.iter().map(|p| *p.public_key()).collect();
//! # let (secret, proof, encrypted_shares) = generate_shared_secret(2, &public_keys, &mut rng)?;
//!
//! let roster = Roster::from_public_keys(&public_keys)?;
//! let mut reported = ReportedShares::new();
//!
//! // Only one participant has reported so far.
//! let carol = &participants[2];
//! let shares = decrypt_shares(carol, &encrypted_shares_of(carol.public_key(), &encrypted_shares), &mut rng)?;
//! reported.insert(*carol.public_key(), shares);
//! assert!(recover_secret(2, &roster, &reported)?.is_none());
//!
//! // A second one is enough.
//! let eve = &participants[4];
//! let shares = decrypt_shares(eve, &encrypted_shares_of(eve.public_key(), &encrypted_shares), &mut rng)?;
//! reported.insert(*eve.public_key(), shares);
//!
//! let recovered = recover_secret(2, &roster, &reported)?.unwrap();
//! assert_eq!(recovered, secret);
//! assert!(verify_secret(2, &proof, &recovered));
//! # Ok(()) } fn main() { assert!(do_test().is_ok()); }
//! ```
//!
//! Both the dealer and the participants can then derive shared randomness from the secret
//! with [`Secret::to_dh_secret`](crate::pvss::Secret::to_dh_secret).

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(future_incompatible)]
#![allow(clippy::type_complexity)]

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

#[cfg(not(feature = "std"))]
extern crate alloc;

mod error;
pub use error::{Error, VssResult};

/// A module defining the key types of the participants of a PVSS round.
pub mod keys;
/// A module defining the [`ThresholdParameters`](crate::parameters::ThresholdParameters) type used by a PVSS round.
pub mod parameters;

mod ciphersuite;
pub use ciphersuite::CipherSuite;

mod serialization;
pub use serialization::{FixedSizeEncoding, FromBytes, ToBytes, FRAME_HEADER_SIZE};

pub(crate) mod utils;

pub mod pvss;

/// A module defining the operations of a PVSS round: distribution, decryption,
/// verification and recovery.
pub mod vss;

/// This module provides a concrete implementation of a CipherSuite over Secp256k1,
/// with SHA-256 as underlying base hash function.
/// It is made available for testing and benchmarking purposes.
pub mod testing {
    use super::*;

    use ark_secp256k1::Projective as G;

    use sha2::Sha256;
    use utils::{String, ToOwned};

    use zeroize::Zeroize;

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Zeroize)]
    /// An example instance of a PVSS CipherSuite over Secp256k1 with SHA-256 as underlying hasher.
    pub struct Secp256k1Sha256;

    impl CipherSuite for Secp256k1Sha256 {
        type G = G;

        type InnerHasher = Sha256;

        fn context_string() -> String {
            "SCRAPE-PVSS_SECP256K1_SHA256".to_owned()
        }
    }
}
