use crate::dft::DFT;
use crate::modulus::montgomery::{Montgomery, MontgomeryPrecomp};
use crate::modulus::{WordOps, primitive_nth_root};
use itertools::izip;

/// Forward and backward tables of a length-n negacyclic NTT modulo q.
///
/// Input of the butterfly network is in bit-reversed order and its output
/// in natural order. Even levels skip the modular reduction of the sum
/// (lazy reduction); for q <= [crate::NTT_Q_MAX] every lazily stored sum
/// stays below 2^16 and every Montgomery input below
/// [crate::modulus::montgomery::REDUCE_INPUT_MAX]. Sums on odd levels are
/// reduced from u32 and may exceed 2^16 before the reduction.
pub struct Table {
    montgomery: MontgomeryPrecomp,
    n: usize,
    log_n: u32,
    psi: u16,
    /// psi^bitrev(i) * R, length n.
    psi_forward_rev: Vec<Montgomery>,
    /// psi^-i * n^-1 * R, length n.
    psi_backward: Vec<Montgomery>,
    /// omega^bitrev(i) * R with omega = psi^2, length n/2.
    omega_forward_rev: Vec<Montgomery>,
    /// omega^-bitrev(i) * R, length n/2.
    omega_backward_rev: Vec<Montgomery>,
    three_q: u32,
}

impl Table {
    /// Builds the tables of a length-n transform.
    /// Panics if n is not a power of two or 2n does not divide q-1.
    pub fn new(montgomery: MontgomeryPrecomp, n: usize) -> Table {
        assert!(
            n.is_power_of_two(),
            "invalid argument: n = {} is not a power of two",
            n
        );

        let q: u16 = montgomery.q;
        let psi: u16 = primitive_nth_root(q, 2 * n as u64);
        let omega: u16 = montgomery.pow(psi, 2);
        let psi_inv: u16 = montgomery.inv(psi);
        let omega_inv: u16 = montgomery.inv(omega);
        let n_inv: u16 = montgomery.inv((n % q as usize) as u16);

        let log_n: u32 = n.trailing_zeros();
        let log_half: u32 = log_n.saturating_sub(1);

        let psi_forward_rev: Vec<Montgomery> = (0..n)
            .map(|i| montgomery.prepare(montgomery.pow(psi, i.reverse_bits_msb(log_n) as u64)))
            .collect();

        let psi_backward: Vec<Montgomery> = (0..n)
            .map(|i| {
                let t: u32 = montgomery.pow(psi_inv, i as u64) as u32 * n_inv as u32;
                montgomery.prepare((t % q as u32) as u16)
            })
            .collect();

        let omega_forward_rev: Vec<Montgomery> = (0..n >> 1)
            .map(|i| {
                montgomery.prepare(montgomery.pow(omega, i.reverse_bits_msb(log_half) as u64))
            })
            .collect();

        let omega_backward_rev: Vec<Montgomery> = (0..n >> 1)
            .map(|i| {
                montgomery.prepare(montgomery.pow(omega_inv, i.reverse_bits_msb(log_half) as u64))
            })
            .collect();

        Self {
            montgomery,
            n,
            log_n,
            psi,
            psi_forward_rev,
            psi_backward,
            omega_forward_rev,
            omega_backward_rev,
            three_q: 3 * q as u32,
        }
    }

    pub fn q(&self) -> u16 {
        self.montgomery.q
    }

    /// Primitive 2n-th root of unity the tables are built from.
    pub fn psi(&self) -> u16 {
        self.psi
    }

    pub fn montgomery(&self) -> &MontgomeryPrecomp {
        &self.montgomery
    }

    /// Permutes a into bit-reversed index order.
    pub fn bitrev_inplace(&self, a: &mut [u16]) {
        debug_assert!(a.len() == self.n, "a.len()={} != n={}", a.len(), self.n);
        for i in 0..self.n {
            let r: usize = i.reverse_bits_msb(self.log_n);
            if i < r {
                a.swap(i, r);
            }
        }
    }

    /// Multiplies a coefficient-wise by a Montgomery-domain table.
    fn mul_table_inplace(&self, a: &mut [u16], table: &[Montgomery]) {
        izip!(a.iter_mut(), table.iter()).for_each(|(a, t)| {
            *a = self.montgomery.mul_external(*t, *a);
        });
    }

    /// Butterfly network on bit-reversed input.
    fn butterflies(&self, a: &mut [u16], omegas: &[Montgomery]) {
        let n: usize = self.n;
        let q: u32 = self.montgomery.q as u32;
        for level in 0..self.log_n {
            let distance: usize = 1 << level;
            let lazy: bool = level & 1 == 0;
            for start in 0..distance {
                izip!((start..n - distance).step_by(distance << 1), omegas.iter()).for_each(
                    |(j, w)| {
                        let t: u32 = a[j] as u32;
                        let u: u32 = a[j + distance] as u32;
                        debug_assert!(u <= t + self.three_q, "butterfly underflow: t={} u={}", t, u);
                        let sum: u32 = t + u;
                        debug_assert!(!lazy || sum <= u16::MAX as u32, "lazy sum {} overflows", sum);
                        a[j] = if lazy { sum as u16 } else { (sum % q) as u16 };
                        a[j + distance] = self.montgomery.reduce(*w as u32 * (t + self.three_q - u));
                    },
                );
            }
        }
    }

    /// Pre-twists canonical coefficients by psi then runs the forward
    /// butterflies. Expects a already in bit-reversed order.
    pub fn forward_bitrev_inplace(&self, a: &mut [u16]) {
        self.mul_table_inplace(a, &self.psi_forward_rev);
        self.butterflies(a, &self.omega_forward_rev);
    }
}

impl DFT for Table {
    fn n(&self) -> usize {
        self.n
    }

    fn forward_inplace(&self, a: &mut [u16]) {
        debug_assert!(a.len() == self.n, "a.len()={} != n={}", a.len(), self.n);
        self.bitrev_inplace(a);
        self.forward_bitrev_inplace(a);
    }

    fn backward_inplace(&self, a: &mut [u16]) {
        debug_assert!(a.len() == self.n, "a.len()={} != n={}", a.len(), self.n);
        self.bitrev_inplace(a);
        self.butterflies(a, &self.omega_backward_rev);
        self.mul_table_inplace(a, &self.psi_backward);
        a.iter_mut().for_each(|a| *a = self.montgomery.freeze(*a));
    }

    fn mul_pointwise(&self, a: &[u16], b: &[u16], c: &mut [u16]) {
        debug_assert!(a.len() == self.n, "a.len()={} != n={}", a.len(), self.n);
        debug_assert!(b.len() == self.n, "b.len()={} != n={}", b.len(), self.n);
        debug_assert!(c.len() == self.n, "c.len()={} != n={}", c.len(), self.n);
        izip!(a.iter(), b.iter(), c.iter_mut())
            .for_each(|(a, b, c)| *c = self.montgomery.mul_twisted(*a, *b));
    }
}
