use core::fmt::Debug;
use core::marker::{Send, Sync};

use zeroize::Zeroize;

use ark_ec::{CurveGroup, Group};

use crate::utils::String;
use digest::{Digest, DynDigest};

/// A trait defining the prime-order group of operation and cryptographic hash function details
/// of a PVSS instantiation.
///
/// Every participant of a sharing round must use the same [`CipherSuite`]: the group fixes the
/// encoded sizes of keys and shares, and the context string domain-separates every random oracle.
pub trait CipherSuite: Copy + Clone + PartialEq + Eq + Debug + Send + Sync + Zeroize {
    /// The prime-order group on which this [`CipherSuite`] operates.
    type G: CurveGroup;

    /// The underlying hasher used to construct all random oracles of this [`CipherSuite`] .
    ///
    /// Field elements are sampled from it with a 128-bit security parameter.
    type InnerHasher: Default + Clone + Digest + DynDigest;

    //////////////////////////////////////////////////////////////////////////////////////////////

    // Required methods

    /// A method returning this [`CipherSuite`]'s custom context string, to be used in the different
    /// random oracles invoked by the PVSS engine.
    fn context_string() -> String;

    ///////////////////////////////////////////////////////////////////////////////////////////////

    // Provided methods

    /// `h_dleq` hash for this [`CipherSuite`] .
    ///
    /// The context string for `h_dleq` is this [`CipherSuite`]'s `CONTEXT_STRING`,
    /// concatenated with "dleq".
    ///
    /// It is used to compute the challenges of the discrete logarithm equality
    /// proofs, both the single ones and the parallel ones attached to a share batch.
    fn h_dleq(m: &[u8]) -> <Self::G as Group>::ScalarField {
        crate::utils::hash_to_field::<Self>((Self::context_string() + "dleq").as_bytes(), m)
    }

    /// `h_keygen` hash for this [`CipherSuite`] .
    ///
    /// The context string for `h_keygen` is this [`CipherSuite`]'s `CONTEXT_STRING`,
    /// concatenated with "keygen".
    ///
    /// It maps an arbitrary seed to a private key for deterministic key derivation.
    fn h_keygen(m: &[u8]) -> <Self::G as Group>::ScalarField {
        crate::utils::hash_to_field::<Self>((Self::context_string() + "keygen").as_bytes(), m)
    }
}
