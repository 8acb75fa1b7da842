pub mod ntt;
pub mod split;

/// Negacyclic transform over Z_q[x]/(x^n+1) acting on coefficient slices.
pub trait DFT {
    fn n(&self) -> usize;

    /// Maps canonical coefficients to the evaluation domain (lazily reduced).
    fn forward_inplace(&self, a: &mut [u16]);

    /// Maps an evaluation-domain vector back to canonical coefficients in [0, q).
    fn backward_inplace(&self, a: &mut [u16]);

    /// Assigns a * b (evaluation domain) to c.
    fn mul_pointwise(&self, a: &[u16], b: &[u16], c: &mut [u16]);
}
