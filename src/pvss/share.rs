//! The share module, defining the secret being shared, its encrypted and
//! decrypted shares and the public proof attesting to all of them.

use core::fmt::Debug;

use ark_ec::{CurveGroup, Group, VariableBaseMSM};
use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use hkdf::Hkdf;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::keys::{KeyPair, PublicKey};
use crate::pvss::dleq::{DleqProof, ParallelProofs};
use crate::serialization::{
    impl_point_encoding, impl_serialization_traits, point_size, scalar_size, FixedSizeEncoding,
};
use crate::utils::{calculate_lagrange_coefficients, ToString, Vec};
use crate::{CipherSuite, Error, VssResult};

/// The shared secret, \\( G^{p(0)} \\).
///
/// It is never sent over the wire by itself: participants either receive it
/// from the dealer or recover it from a threshold of decrypted shares.
#[derive(Clone, Copy, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Secret<C: CipherSuite>(pub(crate) C::G);

impl_point_encoding!(Secret<CipherSuite>);

impl<C: CipherSuite> Debug for Secret<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Secret([redacted])")
    }
}

impl<C: CipherSuite> core::fmt::Display for Secret<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("vss_secret")
    }
}

impl<C: CipherSuite> Secret<C> {
    /// Derive the shared randomness carried by this secret.
    ///
    /// This is a one-way transform: the compressed point is fed as input key
    /// material to HKDF-SHA256, with this [`CipherSuite`]'s context string as info.
    pub fn to_dh_secret(&self) -> VssResult<DhSecret> {
        let mut ikm = Vec::with_capacity(self.0.compressed_size());
        self.0
            .serialize_compressed(&mut ikm)
            .map_err(|_| Error::CompressionError)?;

        let hkdf = Hkdf::<Sha256>::new(None, &ikm);
        let mut okm = [0u8; 32];
        hkdf.expand((C::context_string() + "dh-secret").as_bytes(), &mut okm)
            .map_err(|_| Error::Custom("KDF expansion failed unexpectedly".to_string()))?;
        ikm.zeroize();

        Ok(DhSecret(okm))
    }
}

/// Shared randomness derived from a [`Secret`].
#[derive(Clone, Eq, PartialEq, Zeroize)]
pub struct DhSecret(pub(crate) [u8; 32]);

impl Drop for DhSecret {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Debug for DhSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("DhSecret([redacted])")
    }
}

impl DhSecret {
    /// View this secret as bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// A commitment \\( h^{p(i)} \\) to the evaluation of the sharing polynomial
/// at some share index, where \\( h \\) is the escrow's extra generator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Commitment<C: CipherSuite>(pub(crate) C::G);

impl_point_encoding!(Commitment<CipherSuite>);

/// A share encrypted to a participant's public key, \\( pk\_i^{p(i)} \\).
///
/// The share index is implicit: it is the position of the share in the
/// list of shares sorted by [`PublicKey`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct EncryptedShare<C: CipherSuite>(pub(crate) C::G);

impl_point_encoding!(EncryptedShare<CipherSuite>);

impl<C: CipherSuite> core::fmt::Display for EncryptedShare<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("vss_enc_share")
    }
}

/// A decrypted share \\( G^{p(i)} \\), along with a proof that it was
/// correctly decrypted from its [`EncryptedShare`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct DecryptedShare<C: CipherSuite> {
    pub(crate) point: C::G,
    pub(crate) proof: DleqProof<C>,
}

impl<C: CipherSuite> FixedSizeEncoding for DecryptedShare<C> {
    fn payload_size() -> usize {
        point_size::<C>() + 2 * scalar_size::<C>()
    }
}

impl<C: CipherSuite> core::fmt::Display for DecryptedShare<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("vss_dec_share")
    }
}

/// The public proof produced alongside a [`Secret`].
///
/// It holds everything needed to check a batch of encrypted shares, and to
/// check a recovered secret.
#[derive(Clone, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SecretProof<C: CipherSuite> {
    /// The extra generator \\( h \\) the commitments are computed over.
    pub(crate) extra_generator: C::G,
    /// Proof that \\( \log\_G(secret) = \log\_h(h^{p(0)}) \\).
    pub(crate) proof: DleqProof<C>,
    /// Proofs binding each commitment to its encrypted share.
    pub(crate) parallel_proofs: ParallelProofs<C>,
    /// One commitment per issued share, in share index order.
    pub(crate) commitments: Vec<Commitment<C>>,
}

impl_serialization_traits!(SecretProof<CipherSuite>);

impl<C: CipherSuite> core::fmt::Display for SecretProof<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "vss_secret_proof({} commitments)", self.commitments.len())
    }
}

impl<C: CipherSuite> SecretProof<C> {
    /// The commitments to every issued share, in share index order.
    pub fn commitments(&self) -> &[Commitment<C>] {
        &self.commitments
    }
}

/// Decrypt an [`EncryptedShare`] with the private key it was encrypted to.
///
/// The decrypted share \\( S\_i = Y\_i^{1/x\_i} \\) comes with a proof
/// that \\( \log\_G(pk\_i) = \log\_{S\_i}(Y\_i) \\).
pub(crate) fn decrypt_share<C: CipherSuite>(
    key_pair: &KeyPair<C>,
    encrypted_share: &EncryptedShare<C>,
    rng: impl RngCore + CryptoRng,
) -> VssResult<DecryptedShare<C>> {
    let inverse = key_pair
        .private_key
        .inverse()
        .ok_or(Error::InvalidPrivateKey)?;
    let point = encrypted_share.0 * inverse;

    let proof = DleqProof::prove(
        &C::G::generator(),
        &key_pair.public_key.0,
        &point,
        &encrypted_share.0,
        &key_pair.private_key,
        rng,
    )?;

    Ok(DecryptedShare { point, proof })
}

/// Check that `decrypted_share` was decrypted from `encrypted_share` with the
/// private key of `public_key`.
pub(crate) fn verify_decrypted_share<C: CipherSuite>(
    public_key: &PublicKey<C>,
    encrypted_share: &EncryptedShare<C>,
    decrypted_share: &DecryptedShare<C>,
) -> bool {
    decrypted_share.proof.verify(
        &C::G::generator(),
        &public_key.0,
        &decrypted_share.point,
        &encrypted_share.0,
    )
}

/// Interpolate the secret at zero from decrypted shares tagged with their
/// (1-based) share index.
pub(crate) fn recover<C: CipherSuite>(shares: &[(u32, DecryptedShare<C>)]) -> VssResult<Secret<C>> {
    let indices: Vec<u32> = shares.iter().map(|(index, _)| *index).collect();

    let mut sorted = indices.clone();
    sorted.sort_unstable();
    if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(Error::DuplicateShareIndex(pair[0]));
    }

    let mut coefficients = Vec::with_capacity(shares.len());
    for index in indices.iter() {
        coefficients.push(calculate_lagrange_coefficients::<C>(*index, &indices)?);
    }

    let points: Vec<<C::G as CurveGroup>::Affine> = shares
        .iter()
        .map(|(_, share)| share.point.into_affine())
        .collect();

    let secret = <C as CipherSuite>::G::msm(&points, &coefficients)
        .map_err(|_| Error::InvalidMSMParameters)?;

    Ok(Secret(secret))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::serialization::{FromBytes, ToBytes};
    use crate::testing::Secp256k1Sha256;

    use ark_ff::UniformRand;
    use ark_secp256k1::{Fr, Projective};
    use rand::rngs::OsRng;

    type Suite = Secp256k1Sha256;

    #[test]
    fn encoded_sizes() {
        assert_eq!(Secret::<Suite>::encoded_size(), 35);
        assert_eq!(EncryptedShare::<Suite>::encoded_size(), 35);
        assert_eq!(DecryptedShare::<Suite>::encoded_size(), 99);
    }

    #[test]
    fn test_fixed_serialization() {
        let mut rng = OsRng;

        for _ in 0..50 {
            let secret = Secret::<Suite>(Projective::generator() * Fr::rand(&mut rng));
            let bytes = secret.to_fixed_bytes().unwrap();
            assert_eq!(secret, Secret::from_fixed_bytes(&bytes).unwrap());

            let share = DecryptedShare::<Suite> {
                point: Projective::generator() * Fr::rand(&mut rng),
                proof: DleqProof {
                    challenge: Fr::rand(&mut rng),
                    response: Fr::rand(&mut rng),
                },
            };
            let bytes = share.to_fixed_bytes().unwrap();
            assert_eq!(bytes.len(), 99);
            assert_eq!(share, DecryptedShare::from_fixed_bytes(&bytes).unwrap());
            assert_eq!(
                DecryptedShare::<Suite>::from_fixed_bytes(&bytes[..98]),
                Err(Error::LengthMismatch {
                    expected: 99,
                    found: 98
                })
            );
            assert_eq!(
                EncryptedShare::<Suite>::from_fixed_bytes(&bytes),
                Err(Error::LengthMismatch {
                    expected: 35,
                    found: 99
                })
            );
        }
    }

    #[test]
    fn invalid_frame_header() {
        let share = EncryptedShare::<Suite>(Projective::generator());
        let mut bytes = share.to_fixed_bytes().unwrap();
        bytes[0] = 0x40;

        assert_eq!(
            EncryptedShare::<Suite>::from_fixed_bytes(&bytes),
            Err(Error::InvalidFrameHeader)
        );
    }

    #[test]
    fn decryption_and_verification() {
        let mut rng = OsRng;
        let key_pair = KeyPair::<Suite>::new(&mut rng);
        let other = KeyPair::<Suite>::new(&mut rng);

        let evaluation = Fr::rand(&mut rng);
        let encrypted = EncryptedShare::<Suite>(key_pair.public_key().0 * evaluation);

        let decrypted = decrypt_share(&key_pair, &encrypted, &mut rng).unwrap();
        assert_eq!(decrypted.point, Projective::generator() * evaluation);
        assert!(verify_decrypted_share(
            key_pair.public_key(),
            &encrypted,
            &decrypted
        ));
        assert!(!verify_decrypted_share(
            other.public_key(),
            &encrypted,
            &decrypted
        ));

        let moved_point = DecryptedShare {
            point: decrypted.point + Projective::generator(),
            ..decrypted
        };
        let moved_challenge = DecryptedShare {
            proof: DleqProof {
                challenge: decrypted.proof.challenge + Fr::ONE,
                ..decrypted.proof
            },
            ..decrypted
        };
        let moved_response = DecryptedShare {
            proof: DleqProof {
                response: decrypted.proof.response + Fr::ONE,
                ..decrypted.proof
            },
            ..decrypted
        };
        for tampered in [moved_point, moved_challenge, moved_response] {
            assert!(!verify_decrypted_share(
                key_pair.public_key(),
                &encrypted,
                &tampered
            ));
        }

        // The encrypted share it is checked against must match as well.
        let moved_encrypted = EncryptedShare::<Suite>(encrypted.0 + Projective::generator());
        assert!(!verify_decrypted_share(
            key_pair.public_key(),
            &moved_encrypted,
            &decrypted
        ));
    }

    #[test]
    fn recovery_from_indexed_shares() {
        let mut rng = OsRng;
        let dummy_proof = DleqProof::<Suite> {
            challenge: Fr::ONE,
            response: Fr::ONE,
        };

        // p(x) = a0 + a1 x + a2 x^2
        let coefficients: Vec<Fr> = (0..3).map(|_| Fr::rand(&mut rng)).collect();
        let p = |x: u32| {
            let x = Fr::from(x);
            coefficients[0] + coefficients[1] * x + coefficients[2] * x * x
        };
        let share = |x: u32| {
            (
                x,
                DecryptedShare::<Suite> {
                    point: Projective::generator() * p(x),
                    proof: dummy_proof,
                },
            )
        };

        let secret = recover(&[share(2), share(4), share(7)]).unwrap();
        assert_eq!(secret.0, Projective::generator() * coefficients[0]);

        assert_eq!(
            recover(&[share(2), share(4), share(2)]),
            Err(Error::DuplicateShareIndex(2))
        );
    }

    #[test]
    fn dh_secret_is_deterministic() {
        let secret = Secret::<Suite>(Projective::generator() * Fr::from(42u8));
        let other = Secret::<Suite>(Projective::generator() * Fr::from(43u8));

        assert_eq!(secret.to_dh_secret().unwrap(), secret.to_dh_secret().unwrap());
        assert_ne!(secret.to_dh_secret().unwrap(), other.to_dh_secret().unwrap());
    }

    #[test]
    fn test_proof_serialization() {
        let mut rng = OsRng;
        let proof = SecretProof::<Suite> {
            extra_generator: Projective::generator() * Fr::rand(&mut rng),
            proof: DleqProof {
                challenge: Fr::rand(&mut rng),
                response: Fr::rand(&mut rng),
            },
            parallel_proofs: ParallelProofs {
                challenge: Fr::rand(&mut rng),
                responses: (0..5).map(|_| Fr::rand(&mut rng)).collect(),
            },
            commitments: (0..5)
                .map(|_| Commitment(Projective::generator() * Fr::rand(&mut rng)))
                .collect(),
        };

        let bytes = proof.to_bytes().unwrap();
        assert_eq!(proof, SecretProof::from_bytes(&bytes).unwrap());
    }
}
