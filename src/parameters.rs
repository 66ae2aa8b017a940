//! Configurable parameters for a round of publicly verifiable secret sharing.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::serialization::{FromBytes, ToBytes};
use crate::utils::Vec;

/// The configuration parameters of a sharing round.
///
/// A misconfigured round is a programming error, not a protocol outcome:
/// constructing parameters outside of the supported range panics.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ThresholdParameters {
    /// The number of shares issued in the round.
    pub n: u32,
    /// The number of decrypted shares required to recover the secret.
    pub t: u32,
}

impl ToBytes for ThresholdParameters {}
impl FromBytes for ThresholdParameters {}

impl ThresholdParameters {
    /// Initialize a new set of threshold parameters.
    ///
    /// Will panic unless `1 < t < n - 1`.
    pub fn new(n: u32, t: u32) -> Self {
        assert!(t > 1, "threshold {} must be greater than 1", t);
        assert!(
            t < n.saturating_sub(1),
            "threshold {} must be lower than n - 1 (n = {})",
            t,
            n
        );

        Self { n, t }
    }
}
