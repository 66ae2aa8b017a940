//! Chaum-Pedersen proofs of discrete logarithm equality, used to bind
//! encrypted shares to their commitments and decrypted shares to their
//! encrypted counterparts.

use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::ciphersuite::CipherSuite;
use crate::serialization::impl_serialization_traits;
use crate::utils::{append_point, Scalar, Vec};
use crate::{Error, VssResult};

use rand::CryptoRng;
use rand::RngCore;

/// A non-interactive proof that \\( \log\_{g\_1}(h\_1) = \log\_{g\_2}(h\_2) \\).
///
/// The prover samples \\( w \stackrel{\\$}{\leftarrow} \mathbb{Z}\_q \\), sets
/// \\( a\_1 = g\_1^w \\), \\( a\_2 = g\_2^w \\), \\( c = \mathcal{H}(g\_1, h\_1, g\_2, h\_2, a\_1, a\_2) \\)
/// and \\( z = w + x \cdot c \\) where \\( x \\) is the common discrete logarithm.
///
/// Verification recomputes \\( a'\_1 = g\_1^z \cdot h\_1^{-c} \\) and
/// \\( a'\_2 = g\_2^z \cdot h\_2^{-c} \\) and checks the challenge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct DleqProof<C: CipherSuite> {
    pub(crate) challenge: Scalar<C>,
    pub(crate) response: Scalar<C>,
}

impl_serialization_traits!(DleqProof<CipherSuite>);

impl<C: CipherSuite> DleqProof<C> {
    /// Prove that `h1 = g1 * witness` and `h2 = g2 * witness`.
    pub(crate) fn prove(
        g1: &C::G,
        h1: &C::G,
        g2: &C::G,
        h2: &C::G,
        witness: &Scalar<C>,
        mut csprng: impl RngCore + CryptoRng,
    ) -> VssResult<Self> {
        let w = Scalar::<C>::rand(&mut csprng);
        let a1 = *g1 * w;
        let a2 = *g2 * w;

        let challenge = compute_challenge::<C>(&[g1, h1, g2, h2, &a1, &a2])?;
        let response = w + *witness * challenge;

        Ok(DleqProof {
            challenge,
            response,
        })
    }

    /// Verify this proof against the two (generator, image) pairs.
    pub(crate) fn verify(&self, g1: &C::G, h1: &C::G, g2: &C::G, h2: &C::G) -> bool {
        let (a1, a2) = match (
            reconstruct_nonce::<C>(g1, h1, &self.response, &self.challenge),
            reconstruct_nonce::<C>(g2, h2, &self.response, &self.challenge),
        ) {
            (Ok(a1), Ok(a2)) => (a1, a2),
            _ => return false,
        };

        match compute_challenge::<C>(&[g1, h1, g2, h2, &a1, &a2]) {
            Ok(challenge) => challenge == self.challenge,
            Err(_) => false,
        }
    }
}

/// A batch of DLEQ proofs sharing a single challenge.
///
/// For every share \\( i \\) it proves that the commitment
/// \\( C\_i = h^{p(i)} \\) and the encrypted share \\( Y\_i = pk\_i^{p(i)} \\)
/// hide the same polynomial evaluation, where \\( h \\) is the escrow's
/// extra generator.
#[derive(Clone, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ParallelProofs<C: CipherSuite> {
    pub(crate) challenge: Scalar<C>,
    pub(crate) responses: Vec<Scalar<C>>,
}

impl_serialization_traits!(ParallelProofs<CipherSuite>);

impl<C: CipherSuite> ParallelProofs<C> {
    pub(crate) fn prove(
        extra_generator: &C::G,
        commitments: &[C::G],
        public_keys: &[C::G],
        encrypted_shares: &[C::G],
        evaluations: &[Scalar<C>],
        mut csprng: impl RngCore + CryptoRng,
    ) -> VssResult<Self> {
        let n = evaluations.len();
        if commitments.len() != n || public_keys.len() != n || encrypted_shares.len() != n {
            return Err(Error::InvalidMSMParameters);
        }

        let nonces: Vec<Scalar<C>> = (0..n).map(|_| Scalar::<C>::rand(&mut csprng)).collect();

        let mut transcript = Vec::new();
        append_point(&mut transcript, extra_generator)?;
        for i in 0..n {
            let a1 = *extra_generator * nonces[i];
            let a2 = public_keys[i] * nonces[i];
            for point in [&commitments[i], &public_keys[i], &encrypted_shares[i], &a1, &a2] {
                append_point(&mut transcript, point)?;
            }
        }
        let challenge = C::h_dleq(&transcript);

        let responses = nonces
            .iter()
            .zip(evaluations.iter())
            .map(|(w, e)| *w + *e * challenge)
            .collect();

        Ok(ParallelProofs {
            challenge,
            responses,
        })
    }

    pub(crate) fn verify(
        &self,
        extra_generator: &C::G,
        commitments: &[C::G],
        public_keys: &[C::G],
        encrypted_shares: &[C::G],
    ) -> bool {
        let n = self.responses.len();
        if commitments.len() != n || public_keys.len() != n || encrypted_shares.len() != n {
            return false;
        }

        let mut transcript = Vec::new();
        if append_point(&mut transcript, extra_generator).is_err() {
            return false;
        }

        for i in 0..n {
            let z = &self.responses[i];
            let a1 = reconstruct_nonce::<C>(extra_generator, &commitments[i], z, &self.challenge);
            let a2 = reconstruct_nonce::<C>(&public_keys[i], &encrypted_shares[i], z, &self.challenge);
            let (a1, a2) = match (a1, a2) {
                (Ok(a1), Ok(a2)) => (a1, a2),
                _ => return false,
            };

            for point in [&commitments[i], &public_keys[i], &encrypted_shares[i], &a1, &a2] {
                if append_point(&mut transcript, point).is_err() {
                    return false;
                }
            }
        }

        C::h_dleq(&transcript) == self.challenge
    }
}

/// Compute \\( g^z \cdot h^{-c} \\).
fn reconstruct_nonce<C: CipherSuite>(
    g: &C::G,
    h: &C::G,
    response: &Scalar<C>,
    challenge: &Scalar<C>,
) -> VssResult<C::G> {
    <C as CipherSuite>::G::msm(&[g.into_affine(), h.into_affine()], &[*response, -*challenge])
        .map_err(|_| Error::InvalidMSMParameters)
}

fn compute_challenge<C: CipherSuite>(points: &[&C::G]) -> VssResult<Scalar<C>> {
    let mut transcript = Vec::new();
    for point in points {
        append_point(&mut transcript, *point)?;
    }

    Ok(C::h_dleq(&transcript))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::serialization::{FromBytes, ToBytes};
    use crate::testing::Secp256k1Sha256;

    use ark_ec::Group;
    use ark_secp256k1::{Fr, Projective};
    use rand::rngs::OsRng;

    type Proof = DleqProof<Secp256k1Sha256>;

    #[test]
    fn test_serialization() {
        let mut rng = OsRng;

        for _ in 0..100 {
            let proof = Proof {
                challenge: Fr::rand(&mut rng),
                response: Fr::rand(&mut rng),
            };
            let bytes = proof.to_bytes().unwrap();
            assert_eq!(proof, Proof::from_bytes(&bytes).unwrap());
        }
    }

    #[test]
    fn test_dleq() {
        let mut rng = OsRng;

        let x = Fr::rand(&mut rng);
        let g1 = Projective::generator();
        let g2 = Projective::generator() * Fr::rand(&mut rng);

        let proof = Proof::prove(&g1, &(g1 * x), &g2, &(g2 * x), &x, rng).unwrap();
        assert!(proof.verify(&g1, &(g1 * x), &g2, &(g2 * x)));

        // A different logarithm on the second pair must be rejected.
        let y = x + Fr::from(1u8);
        assert!(!proof.verify(&g1, &(g1 * x), &g2, &(g2 * y)));
    }

    #[test]
    fn test_parallel_proofs() {
        let mut rng = OsRng;

        let h = Projective::generator() * Fr::rand(&mut rng);
        let evaluations: Vec<Fr> = (0..4).map(|_| Fr::rand(&mut rng)).collect();
        let public_keys: Vec<Projective> = (0..4)
            .map(|_| Projective::generator() * Fr::rand(&mut rng))
            .collect();
        let commitments: Vec<Projective> = evaluations.iter().map(|e| h * e).collect();
        let mut shares: Vec<Projective> = public_keys
            .iter()
            .zip(evaluations.iter())
            .map(|(pk, e)| *pk * e)
            .collect();

        let proofs = ParallelProofs::<Secp256k1Sha256>::prove(
            &h,
            &commitments,
            &public_keys,
            &shares,
            &evaluations,
            rng,
        )
        .unwrap();
        assert!(proofs.verify(&h, &commitments, &public_keys, &shares));
        assert!(!proofs.verify(&h, &commitments[..3], &public_keys[..3], &shares[..3]));

        shares[2] += Projective::generator();
        assert!(!proofs.verify(&h, &commitments, &public_keys, &shares));
    }
}
