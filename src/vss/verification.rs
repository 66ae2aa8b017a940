use rand::{CryptoRng, RngCore};
use tracing::{instrument, warn};

use crate::keys::PublicKey;
use crate::parameters::ThresholdParameters;
use crate::pvss::{self, DecryptedShare, EncryptedShare, Secret, SecretProof};
use crate::CipherSuite;

/// Check a round's encrypted shares against its [`SecretProof`].
///
/// The shares are sorted by [`PublicKey`] before being checked, so they may
/// be given in any order. The check is randomized and consumes `rng`.
///
/// # Panics
///
/// Unless `1 < threshold < n - 1`, where `n` is the number of shares.
///
/// # Returns
///
/// `false` if any share, commitment or proof is inconsistent.
#[instrument(skip_all, fields(threshold = threshold, n = shares.len()))]
pub fn verify_encrypted_shares<C: CipherSuite>(
    proof: &SecretProof<C>,
    threshold: u32,
    shares: &[(PublicKey<C>, EncryptedShare<C>)],
    rng: impl RngCore + CryptoRng,
) -> bool {
    assert!(
        shares.len() <= u32::MAX as usize,
        "too many shares for a single round"
    );
    let parameters = ThresholdParameters::new(shares.len() as u32, threshold);

    let mut sorted = shares.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let valid = pvss::verify_shares(proof, parameters.t, &sorted, rng);
    if !valid {
        warn!("Encrypted shares do not match the secret proof.");
    }

    valid
}

/// Check that `decrypted_share` is the decryption of `encrypted_share` under
/// the private key of `public_key`.
pub fn verify_decrypted_share<C: CipherSuite>(
    public_key: &PublicKey<C>,
    encrypted_share: &EncryptedShare<C>,
    decrypted_share: &DecryptedShare<C>,
) -> bool {
    let valid = pvss::verify_decrypted_share(public_key, encrypted_share, decrypted_share);
    if !valid {
        warn!(participant = %public_key, "Invalid decrypted share.");
    }

    valid
}

/// Check that `secret` is the secret committed to by `proof`.
pub fn verify_secret<C: CipherSuite>(
    threshold: u32,
    proof: &SecretProof<C>,
    secret: &Secret<C>,
) -> bool {
    pvss::verify_secret(threshold, proof, secret)
}
