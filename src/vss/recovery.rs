//! Share reordering and secret recovery.
//!
//! The engine recovers the secret from decrypted shares tagged with their
//! flat share index, \\( 1 \ldots N \\) where \\( N \\) is the number of
//! shares issued in the round. Participants however report their shares
//! per public key, and some of them may report nothing at all. This module
//! maps the latter onto the former.

use tracing::{debug, instrument, warn};

use crate::keys::PublicKey;
use crate::pvss::{self, DecryptedShare, Secret};
use crate::utils::{BTreeMap, Vec};
use crate::{CipherSuite, Error, VssResult};

/// Decrypted shares reported by each participant, in the order of that
/// participant's allocation. A participant that reported nothing is absent.
pub type ReportedShares<C> = BTreeMap<PublicKey<C>, Vec<DecryptedShare<C>>>;

/// The agreed allocation of a round: which public key holds how many shares,
/// in the order the shares were issued.
///
/// Every participant recovering the secret of a round must use an identical
/// roster, same order and same counts, as the one the shares were generated for.
///
/// A roster lists each key at most once, and its counts add up to at most
/// `u32::MAX`, so that every share has a distinct flat index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Roster<C: CipherSuite> {
    entries: Vec<(PublicKey<C>, u32)>,
    total_shares: u32,
}

impl<C: CipherSuite> Roster<C> {
    /// Build a roster from explicit `(public key, share count)` entries, kept in the given order.
    ///
    /// A key holding several shares is listed once with the matching count.
    /// Fails with [`Error::DuplicateRosterEntry`] if a key is listed twice, and
    /// with [`Error::TooManyShares`] if the counts overflow the flat index space.
    pub fn new(entries: Vec<(PublicKey<C>, u32)>) -> VssResult<Self> {
        let mut keys: Vec<&PublicKey<C>> = entries.iter().map(|(key, _)| key).collect();
        keys.sort();
        if keys.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(Error::DuplicateRosterEntry);
        }

        let total_shares = entries
            .iter()
            .try_fold(0u32, |total, (_, count)| total.checked_add(*count))
            .ok_or(Error::TooManyShares)?;

        Ok(Self {
            entries,
            total_shares,
        })
    }

    /// Build the roster matching [`generate_shared_secret`](crate::vss::generate_shared_secret)
    /// called with `public_keys`: keys in canonical order, a key listed `k`
    /// times holding `k` shares.
    pub fn from_public_keys(public_keys: &[PublicKey<C>]) -> VssResult<Self> {
        let mut sorted = public_keys.to_vec();
        sorted.sort();

        let mut entries: Vec<(PublicKey<C>, u32)> = Vec::new();
        for key in sorted {
            if let Some((last, count)) = entries.last_mut() {
                if *last == key {
                    *count = count.checked_add(1).ok_or(Error::TooManyShares)?;
                    continue;
                }
            }
            entries.push((key, 1));
        }

        Self::new(entries)
    }

    /// The `(public key, share count)` entries, in order.
    pub fn entries(&self) -> &[(PublicKey<C>, u32)] {
        &self.entries
    }

    /// The number of shares issued in the round.
    pub fn total_shares(&self) -> u32 {
        self.total_shares
    }

    /// The first flat index reserved for `public_key`, if it is part of the roster.
    pub fn offset_of(&self, public_key: &PublicKey<C>) -> Option<u32> {
        let mut index: u32 = 1;
        for (key, count) in self.entries.iter() {
            if key == public_key {
                return Some(index);
            }
            // Only saturates past the last share of the round.
            index = index.saturating_add(*count);
        }

        None
    }
}

/// Place every reported share at its flat index.
///
/// The roster is walked in order with a cursor starting at 1. Each entry
/// reserves `count` indices whether or not its participant reported
/// anything, so absent participants never shift the shares of the ones
/// after them. A participant's shares take its reserved indices in the
/// order they were reported; shares beyond its allocation are dropped.
///
/// The result is sorted by flat index.
pub fn flatten_shares<C: CipherSuite>(
    roster: &Roster<C>,
    reported: &ReportedShares<C>,
) -> Vec<(u32, DecryptedShare<C>)> {
    let mut flat = Vec::new();
    let mut index: u32 = 1;

    for (key, count) in roster.entries.iter() {
        if let Some(shares) = reported.get(key) {
            if shares.len() > *count as usize {
                warn!(
                    participant = %key,
                    expected = *count,
                    reported = shares.len(),
                    "Ignoring shares beyond the participant's allocation."
                );
            }

            // The roster total bounds every index by u32::MAX.
            for (offset, share) in (0..*count).zip(shares.iter()) {
                flat.push((index + offset, *share));
            }
        }

        index = index.saturating_add(*count);
    }

    flat
}

/// Attempt to recover the secret of a round from the shares reported so far.
///
/// The shares **must** have been checked with
/// [`verify_decrypted_share`](crate::vss::verify_decrypted_share) against
/// their encrypted counterparts beforehand: no verification happens here,
/// and invalid shares silently lead to a wrong secret.
///
/// # Panics
///
/// If `threshold` is 0.
///
/// # Returns
///
/// `Ok(None)` when fewer than `threshold` shares have been reported, which
/// is the expected outcome while a round is still collecting shares.
/// Otherwise the secret recovered from the `threshold` shares with the
/// lowest flat indices.
#[instrument(skip(roster, reported))]
pub fn recover_secret<C: CipherSuite>(
    threshold: u32,
    roster: &Roster<C>,
    reported: &ReportedShares<C>,
) -> VssResult<Option<Secret<C>>> {
    assert!(threshold > 0, "threshold must be positive");

    for key in reported.keys() {
        if roster.offset_of(key).is_none() {
            debug!(participant = %key, "Ignoring shares from a key outside of the roster.");
        }
    }

    let flat = flatten_shares(roster, reported);
    if flat.len() < threshold as usize {
        debug!(
            "Not enough shares to recover the secret: {} out of {}.",
            flat.len(),
            threshold
        );
        return Ok(None);
    }

    pvss::recover(&flat[..threshold as usize]).map(Some)
}
