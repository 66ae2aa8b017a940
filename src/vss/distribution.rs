use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument};

use crate::keys::PublicKey;
use crate::parameters::ThresholdParameters;
use crate::pvss::{EncryptedShare, Escrow, Secret, SecretProof};
use crate::utils::Vec;
use crate::{CipherSuite, VssResult};

/// Generate a fresh secret and encrypt one share of it to each of the `public_keys`.
///
/// # Inputs
///
/// * The `threshold` of decrypted shares needed to recover the secret,
/// * The `public_keys` of the round, in any order. A key listed several times
///   receives several shares,
/// * A cryptographically secure pseudo-random generator.
///
/// # Panics
///
/// Unless `1 < threshold < n - 1`, where `n` is the number of public keys.
///
/// # Returns
///
/// The [`Secret`], its [`SecretProof`] and the encrypted shares paired with
/// their recipient. The pairs are sorted by [`PublicKey`], **not** in the
/// order of `public_keys`: the share at position `i` is the share of flat
/// index `i + 1`, so that anyone holding the same set of keys derives the
/// same assignment.
#[instrument(skip_all, fields(threshold = threshold, n = public_keys.len()))]
pub fn generate_shared_secret<C: CipherSuite>(
    threshold: u32,
    public_keys: &[PublicKey<C>],
    mut rng: impl RngCore + CryptoRng,
) -> VssResult<(Secret<C>, SecretProof<C>, Vec<(PublicKey<C>, EncryptedShare<C>)>)> {
    assert!(
        public_keys.len() <= u32::MAX as usize,
        "too many public keys for a single round"
    );
    let parameters = ThresholdParameters::new(public_keys.len() as u32, threshold);

    let mut sorted_keys = public_keys.to_vec();
    sorted_keys.sort();

    let escrow = Escrow::<C>::new(parameters.t, &mut rng)?;
    let (proof, encrypted_shares) = escrow.create_shares(&sorted_keys, &mut rng)?;
    debug!("Generated {} encrypted shares.", encrypted_shares.len());

    Ok((
        escrow.secret,
        proof,
        sorted_keys.into_iter().zip(encrypted_shares).collect(),
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::keys::KeyPair;
    use crate::testing::Secp256k1Sha256;

    use rand::rngs::OsRng;

    type Suite = Secp256k1Sha256;

    #[test]
    fn output_is_sorted_by_public_key() {
        let public_keys: Vec<PublicKey<Suite>> = (0..6)
            .map(|_| *KeyPair::<Suite>::new(OsRng).public_key())
            .collect();

        let (_, proof, shares) = generate_shared_secret(3, &public_keys, OsRng).unwrap();

        assert_eq!(shares.len(), 6);
        assert_eq!(proof.commitments().len(), 6);
        assert!(shares.windows(2).all(|pair| pair[0].0 <= pair[1].0));
    }

    #[test]
    fn repeated_keys_receive_several_shares() {
        let a = *KeyPair::<Suite>::from_seed(b"a").public_key();
        let b = *KeyPair::<Suite>::from_seed(b"b").public_key();
        let c = *KeyPair::<Suite>::from_seed(b"c").public_key();

        let (_, _, shares) = generate_shared_secret(2, &[b, a, c, b], OsRng).unwrap();

        assert_eq!(shares.len(), 4);
        assert_eq!(shares.iter().filter(|(pk, _)| *pk == b).count(), 2);
    }

    #[test]
    #[should_panic]
    fn threshold_too_high() {
        let public_keys: Vec<PublicKey<Suite>> = (0..5)
            .map(|_| *KeyPair::<Suite>::new(OsRng).public_key())
            .collect();

        let _ = generate_shared_secret(4, &public_keys, OsRng);
    }

    #[test]
    #[should_panic]
    fn threshold_too_low() {
        let public_keys: Vec<PublicKey<Suite>> = (0..5)
            .map(|_| *KeyPair::<Suite>::new(OsRng).public_key())
            .collect();

        let _ = generate_shared_secret(1, &public_keys, OsRng);
    }
}
