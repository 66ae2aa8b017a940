use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument};

use crate::keys::{KeyPair, PublicKey};
use crate::pvss::{self, DecryptedShare, EncryptedShare};
use crate::utils::Vec;
use crate::{CipherSuite, VssResult};

/// Decrypt a share addressed to `key_pair`.
///
/// This does not check the share: a participant decrypting a share that was
/// not encrypted to its key obtains a [`DecryptedShare`] that fails
/// [`verify_decrypted_share`](crate::vss::verify_decrypted_share).
pub fn decrypt_share<C: CipherSuite>(
    key_pair: &KeyPair<C>,
    encrypted_share: &EncryptedShare<C>,
    rng: impl RngCore + CryptoRng,
) -> VssResult<DecryptedShare<C>> {
    pvss::decrypt_share(key_pair, encrypted_share, rng)
}

/// Decrypt a participant's whole allocation, preserving its order.
///
/// The result is in the order recovery expects for this participant's
/// entry in the reported shares.
#[instrument(skip_all, fields(participant = %key_pair.public_key()))]
pub fn decrypt_shares<C: CipherSuite>(
    key_pair: &KeyPair<C>,
    encrypted_shares: &[EncryptedShare<C>],
    mut rng: impl RngCore + CryptoRng,
) -> VssResult<Vec<DecryptedShare<C>>> {
    debug!("Decrypting {} shares.", encrypted_shares.len());

    encrypted_shares
        .iter()
        .map(|share| pvss::decrypt_share(key_pair, share, &mut rng))
        .collect()
}

/// Select the encrypted shares addressed to `public_key` out of a round's
/// distribution, in share index order.
pub fn encrypted_shares_of<C: CipherSuite>(
    public_key: &PublicKey<C>,
    shares: &[(PublicKey<C>, EncryptedShare<C>)],
) -> Vec<EncryptedShare<C>> {
    shares
        .iter()
        .filter(|(pk, _)| pk == public_key)
        .map(|(_, share)| *share)
        .collect()
}
