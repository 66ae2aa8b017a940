//! The escrow module: secret generation, share encryption, and the public
//! checks performed on a share batch and on a secret.

use ark_ec::{CurveGroup, Group, VariableBaseMSM};
use ark_ff::{Field, UniformRand, Zero};

use rand::{CryptoRng, RngCore};

use crate::keys::PublicKey;
use crate::pvss::dleq::{DleqProof, ParallelProofs};
use crate::pvss::polynomial::Coefficients;
use crate::pvss::share::{Commitment, EncryptedShare, Secret, SecretProof};
use crate::utils::{calculate_lagrange_coefficients, Scalar, Vec};
use crate::{CipherSuite, Error, VssResult};

/// The dealer's private state for one round: the sharing polynomial, the
/// extra generator and the secret \\( G^{p(0)} \\).
pub(crate) struct Escrow<C: CipherSuite> {
    pub(crate) extra_generator: C::G,
    pub(crate) polynomial: Coefficients<C>,
    pub(crate) secret: Secret<C>,
    pub(crate) proof: DleqProof<C>,
}

impl<C: CipherSuite> Escrow<C> {
    /// Sample a polynomial of degree `t - 1` and a random extra generator \\( h \\),
    /// and prove that \\( \log\_G(G^{p(0)}) = \log\_h(h^{p(0)}) \\).
    pub(crate) fn new(t: u32, mut rng: impl RngCore + CryptoRng) -> VssResult<Self> {
        let polynomial = Coefficients::<C>::random(t as usize, &mut rng);
        let extra_generator = C::G::generator() * Scalar::<C>::rand(&mut rng);

        let mut a0 = polynomial.at_zero();
        let secret = Secret(C::G::generator() * a0);
        let proof = DleqProof::prove(
            &C::G::generator(),
            &secret.0,
            &extra_generator,
            &(extra_generator * a0),
            &a0,
            &mut rng,
        );
        zeroize::Zeroize::zeroize(&mut a0);

        Ok(Escrow {
            extra_generator,
            polynomial,
            secret,
            proof: proof?,
        })
    }

    /// Encrypt one share per public key, the i-th key (in the given order)
    /// receiving the evaluation at \\( i + 1 \\), and produce the public proof.
    pub(crate) fn create_shares(
        &self,
        public_keys: &[PublicKey<C>],
        mut rng: impl RngCore + CryptoRng,
    ) -> VssResult<(SecretProof<C>, Vec<EncryptedShare<C>>)> {
        let n = public_keys.len();
        let mut evaluations = Vec::with_capacity(n);
        let mut commitments = Vec::with_capacity(n);
        let mut encrypted_shares = Vec::with_capacity(n);
        let keys: Vec<C::G> = public_keys.iter().map(|pk| pk.0).collect();

        for (i, pk) in keys.iter().enumerate() {
            let evaluation = self.polynomial.evaluate(i as u32 + 1);
            commitments.push(self.extra_generator * evaluation);
            encrypted_shares.push(*pk * evaluation);
            evaluations.push(evaluation);
        }

        let parallel_proofs = ParallelProofs::prove(
            &self.extra_generator,
            &commitments,
            &keys,
            &encrypted_shares,
            &evaluations,
            &mut rng,
        );
        zeroize::Zeroize::zeroize(&mut evaluations);

        let proof = SecretProof {
            extra_generator: self.extra_generator,
            proof: self.proof,
            parallel_proofs: parallel_proofs?,
            commitments: commitments.into_iter().map(Commitment).collect(),
        };

        Ok((
            proof,
            encrypted_shares.into_iter().map(EncryptedShare).collect(),
        ))
    }
}

/// Check a batch of encrypted shares, given in share index order, against
/// the public proof of the round.
///
/// Besides the parallel DLEQ proofs, this checks that the commitments lie on
/// a polynomial of degree at most `t - 1`, by testing them against a random
/// codeword of the dual Reed-Solomon code. The check is randomized: it
/// consumes `rng`.
pub(crate) fn verify_shares<C: CipherSuite>(
    proof: &SecretProof<C>,
    t: u32,
    shares: &[(PublicKey<C>, EncryptedShare<C>)],
    rng: impl RngCore + CryptoRng,
) -> bool {
    let n = shares.len();
    if proof.commitments.len() != n || (t as usize) >= n {
        return false;
    }

    let commitments: Vec<C::G> = proof.commitments.iter().map(|c| c.0).collect();
    let keys: Vec<C::G> = shares.iter().map(|(pk, _)| pk.0).collect();
    let encrypted: Vec<C::G> = shares.iter().map(|(_, share)| share.0).collect();

    if !proof
        .parallel_proofs
        .verify(&proof.extra_generator, &commitments, &keys, &encrypted)
    {
        return false;
    }

    match check_dual_code::<C>(t, &commitments, rng) {
        Ok(valid) => valid,
        Err(_) => false,
    }
}

/// Test that \\( \sum\_i v\_i f(i) C\_i = 0 \\) for a random polynomial
/// \\( f \\) of degree \\( n - t - 1 \\), where
/// \\( v\_i = \prod\_{j \neq i} (i - j)^{-1} \\).
fn check_dual_code<C: CipherSuite>(
    t: u32,
    commitments: &[C::G],
    rng: impl RngCore + CryptoRng,
) -> VssResult<bool> {
    let n = commitments.len() as u32;
    let codeword = Coefficients::<C>::random((n - t) as usize, rng);

    let mut scalars = Vec::with_capacity(commitments.len());
    for i in 1..=n {
        let mut denominator = Scalar::<C>::ONE;
        for j in (1..=n).filter(|&j| j != i) {
            denominator *= Scalar::<C>::from(i) - Scalar::<C>::from(j);
        }
        let inverse = denominator
            .inverse()
            .ok_or(Error::DuplicateShareIndex(i))?;
        scalars.push(codeword.evaluate(i) * inverse);
    }

    let bases: Vec<<C::G as CurveGroup>::Affine> =
        commitments.iter().map(|c| c.into_affine()).collect();
    let sum = <C as CipherSuite>::G::msm(&bases, &scalars).map_err(|_| Error::InvalidMSMParameters)?;

    Ok(sum.is_zero())
}

/// Check that `secret` is the one committed to by `proof`.
///
/// \\( h^{p(0)} \\) is interpolated from the first `t` commitments, and the
/// escrow proof must tie it to `secret`.
pub(crate) fn verify_secret<C: CipherSuite>(
    t: u32,
    proof: &SecretProof<C>,
    secret: &Secret<C>,
) -> bool {
    let t = t as usize;
    if t == 0 || proof.commitments.len() < t {
        return false;
    }

    let indices: Vec<u32> = (1..=t as u32).collect();
    let mut coefficients = Vec::with_capacity(t);
    for index in indices.iter() {
        match calculate_lagrange_coefficients::<C>(*index, &indices) {
            Ok(coefficient) => coefficients.push(coefficient),
            Err(_) => return false,
        }
    }

    let bases: Vec<<C::G as CurveGroup>::Affine> = proof.commitments[..t]
        .iter()
        .map(|c| c.0.into_affine())
        .collect();
    let committed_secret = match <C as CipherSuite>::G::msm(&bases, &coefficients) {
        Ok(point) => point,
        Err(_) => return false,
    };

    proof.proof.verify(
        &C::G::generator(),
        &secret.0,
        &proof.extra_generator,
        &committed_secret,
    )
}
