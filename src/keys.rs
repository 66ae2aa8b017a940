use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use crate::serialization::impl_point_encoding;
use crate::utils::{short_hash, Scalar, Vec};
use crate::CipherSuite;

use ark_ec::Group;
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// The public key of a participant, to which shares are encrypted.
///
/// Public keys are totally ordered by their canonical compressed encoding.
/// This order decides which share goes to which key, so every participant
/// of a round recomputes the same assignment from the same set of keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicKey<C: CipherSuite>(pub(crate) C::G);

impl_point_encoding!(PublicKey<CipherSuite>);

/// Stack space for encoding a point while comparing or hashing public keys.
/// Compressed points of the usual curves fit well within it.
const ENCODING_BUFFER_SIZE: usize = 128;

impl<C: CipherSuite> PublicKey<C> {
    /// The compressed encoding used as ordering and hashing key.
    fn canonical_encoding(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.0.compressed_size());
        // Writing a valid point to a vector cannot fail.
        let _ = self.0.serialize_compressed(&mut bytes);
        bytes
    }

    /// Run `f` on the compressed encoding, without allocating when it fits
    /// on the stack.
    fn with_canonical_encoding<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let size = self.0.compressed_size();
        if size > ENCODING_BUFFER_SIZE {
            return f(&self.canonical_encoding());
        }

        let mut buffer = [0u8; ENCODING_BUFFER_SIZE];
        // The buffer holds exactly `size` bytes, so writing cannot fail.
        let _ = self.0.serialize_compressed(&mut buffer[..size]);
        f(&buffer[..size])
    }
}

impl<C: CipherSuite> Ord for PublicKey<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.with_canonical_encoding(|lhs| other.with_canonical_encoding(|rhs| lhs.cmp(rhs)))
    }
}

impl<C: CipherSuite> PartialOrd for PublicKey<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: CipherSuite> Hash for PublicKey<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.with_canonical_encoding(|bytes| bytes.hash(state));
    }
}

impl<C: CipherSuite> Deref for PublicKey<C> {
    type Target = C::G;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<C: CipherSuite> core::fmt::Display for PublicKey<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "vsspub:{}", self.with_canonical_encoding(short_hash))
    }
}

/// A participant's key pair.
///
/// The private half is only ever used to decrypt the shares addressed to
/// the public half, and is overwritten with zeroes when dropped.
#[derive(Clone, Zeroize)]
pub struct KeyPair<C: CipherSuite> {
    pub(crate) private_key: Scalar<C>,
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey<C>,
}

impl<C: CipherSuite> Drop for KeyPair<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: CipherSuite> core::fmt::Debug for KeyPair<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[redacted]")
            .finish()
    }
}

impl<C: CipherSuite> KeyPair<C> {
    /// Generate a fresh key pair from a cryptographically secure source of randomness.
    pub fn new(mut rng: impl RngCore + CryptoRng) -> Self {
        Self::from_private_key(Scalar::<C>::rand(&mut rng))
    }

    /// Derive a key pair from an arbitrary-length `seed`.
    ///
    /// The same seed always yields the same key pair for a given [`CipherSuite`].
    /// The seed must be kept as secret as the private key it derives.
    pub fn from_seed(seed: &[u8]) -> Self {
        Self::from_private_key(C::h_keygen(seed))
    }

    fn from_private_key(private_key: Scalar<C>) -> Self {
        let public_key = PublicKey(C::G::generator() * private_key);

        Self {
            private_key,
            public_key,
        }
    }

    /// The public half of this key pair.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }
}

impl<C: CipherSuite> From<&KeyPair<C>> for PublicKey<C> {
    fn from(source: &KeyPair<C>) -> PublicKey<C> {
        source.public_key
    }
}
