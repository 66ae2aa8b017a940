use ark_ff::{Field, UniformRand, Zero};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::utils::{Scalar, Vec};
use crate::CipherSuite;

/// The coefficients of a polynomial over the scalar field, constant term first,
/// overwritten with zeroes when they fall out of scope.
#[derive(Clone, Debug, Zeroize)]
pub(crate) struct Coefficients<C: CipherSuite>(pub(crate) Vec<Scalar<C>>);

impl<C: CipherSuite> Drop for Coefficients<C> {
    fn drop(&mut self) {
        self.0.iter_mut().zeroize();
    }
}

impl<C: CipherSuite> Coefficients<C> {
    /// Sample `count` uniformly random coefficients, i.e. a polynomial of degree `count - 1`.
    pub(crate) fn random(count: usize, mut rng: impl RngCore + CryptoRng) -> Self {
        Coefficients((0..count).map(|_| Scalar::<C>::rand(&mut rng)).collect())
    }

    /// The constant term.
    pub(crate) fn at_zero(&self) -> Scalar<C> {
        self.0.first().copied().unwrap_or_else(Scalar::<C>::zero)
    }

    /// Evaluate the polynomial at `x` .
    pub(crate) fn evaluate(&self, x: u32) -> Scalar<C> {
        let term: Scalar<C> = x.into();
        let mut sum = Scalar::<C>::ZERO;

        // Evaluate using Horner's method.
        for (index, coefficient) in self.0.iter().rev().enumerate() {
            sum += coefficient;

            if index != (self.0.len() - 1) {
                sum *= term;
            }
        }

        sum
    }
}
