use ark_ec::{CurveGroup, Group};
use ark_ff::field_hashers::{DefaultFieldHasher, HashToField};
use ark_ff::Field;

#[cfg(not(feature = "std"))]
pub use alloc::{
    borrow::ToOwned,
    collections::btree_map::BTreeMap,
    format,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(feature = "std")]
pub use std::{
    borrow::ToOwned,
    collections::btree_map::BTreeMap,
    format,
    string::{String, ToString},
    vec::Vec,
};

use crate::ciphersuite::CipherSuite;
use crate::error::{Error, VssResult};

use sha2::{Digest, Sha256};

/// The scalar field of a [`CipherSuite`]'s group.
pub type Scalar<C> = <<C as CipherSuite>::G as Group>::ScalarField;

/// Lagrange coefficient of `my_index` for an interpolation at zero
/// over the points `all_indices`.
pub(crate) fn calculate_lagrange_coefficients<C: CipherSuite>(
    my_index: u32,
    all_indices: &[u32],
) -> VssResult<Scalar<C>> {
    let mut numerator = Scalar::<C>::ONE;
    let mut denominator = Scalar::<C>::ONE;

    let my_index_field = Scalar::<C>::from(my_index);

    for &j in all_indices.iter() {
        if j == my_index {
            continue;
        }
        let s = Scalar::<C>::from(j);

        numerator *= s;
        denominator *= s - my_index_field;
    }

    let inverse = denominator
        .inverse()
        .ok_or(Error::DuplicateShareIndex(my_index))?;

    Ok(numerator * inverse)
}

pub(crate) fn hash_to_field<C: CipherSuite>(
    context_string: &[u8],
    message_to_hash: &[u8],
) -> Scalar<C> {
    let h = <DefaultFieldHasher<C::InnerHasher, 128> as HashToField<Scalar<C>>>::new(
        context_string,
    );

    h.hash_to_field(message_to_hash, 1)[0]
}

/// Append the compressed encoding of `point` to a random oracle transcript.
pub(crate) fn append_point<G: CurveGroup>(transcript: &mut Vec<u8>, point: &G) -> VssResult<()> {
    point
        .serialize_compressed(transcript)
        .map_err(|_| Error::CompressionError)
}

/// First four bytes of the SHA-256 digest of `bytes`, hex encoded.
pub(crate) fn short_hash(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .take(4)
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::Secp256k1Sha256;

    use ark_secp256k1::Fr;

    #[test]
    fn lagrange_interpolation_at_zero() {
        // f(x) = 7 + 3x, evaluated at 2 and 5.
        let f = |x: u64| Fr::from(7u64) + Fr::from(3u64) * Fr::from(x);
        let indices = [2u32, 5];

        let l2 = calculate_lagrange_coefficients::<Secp256k1Sha256>(2, &indices).unwrap();
        let l5 = calculate_lagrange_coefficients::<Secp256k1Sha256>(5, &indices).unwrap();

        assert_eq!(l2 * f(2) + l5 * f(5), Fr::from(7u64));
    }

    #[test]
    fn short_hash_is_eight_hex_chars() {
        let tag = short_hash(b"vss");

        assert_eq!(tag.len(), 8);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(tag, short_hash(b"vss"));
    }
}
