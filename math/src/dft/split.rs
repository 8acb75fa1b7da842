//! Four-lane ("pointwise-split") negacyclic multiplication.
//!
//! A length-n polynomial f is de-interleaved into four lanes
//! f_k(y) = sum_i f[4i+k] y^i of the ring Z_q[y]/(y^(n/4)+1) with y = x^4, so
//! f = f_0 + x f_1 + x^2 f_2 + x^3 f_3. The product f*g then reads, lane by
//! lane,
//!
//! ```text
//! h_0 = f_0 g_0 + y (f_1 g_3 + f_2 g_2 + f_3 g_1)
//! h_1 = f_0 g_1 + f_1 g_0 + y (f_2 g_3 + f_3 g_2)
//! h_2 = f_0 g_2 + f_1 g_1 + f_2 g_0 + y (f_3 g_3)
//! h_3 = f_0 g_3 + f_1 g_2 + f_2 g_1 + f_3 g_0
//! ```
//!
//! The y factors are absorbed into the second operand by transforming the
//! negacyclic shifts y g_1, y g_2, y g_3 next to the plain lanes, leaving
//! four independent quarter-length transforms plus 16 pointwise products
//! per index ("bowtie").

use crate::dft::DFT;
use crate::dft::ntt::Table;
use crate::modulus::montgomery::MontgomeryPrecomp;
use itertools::izip;

pub const LANES: usize = 4;

/// Transformed lanes of the left operand.
pub type LhsLanes = [Vec<u16>; LANES];

/// Transformed lanes of the right operand: g_0..g_3 then y g_1, y g_2, y g_3.
pub type RhsLanes = [Vec<u16>; 2 * LANES - 1];

/// De-interleaves a by residue class of the index mod 4.
pub fn split_poly(a: &[u16]) -> LhsLanes {
    debug_assert!(a.len() % LANES == 0, "a.len()={} is not a multiple of 4", a.len());
    std::array::from_fn(|k| a.iter().skip(k).step_by(LANES).copied().collect())
}

/// Re-interleaves four lanes into b, inverse of [split_poly].
pub fn recover_poly(lanes: &LhsLanes, b: &mut [u16]) {
    debug_assert!(
        lanes.iter().all(|l| l.len() * LANES == b.len()),
        "lane lengths do not match b.len()={}",
        b.len()
    );
    b.chunks_exact_mut(LANES).enumerate().for_each(|(i, chunk)| {
        izip!(chunk.iter_mut(), lanes.iter()).for_each(|(c, lane)| *c = lane[i]);
    });
}

/// Assigns y * a mod (y^m + 1) to b: a rotation by one position whose
/// wrapped coefficient is negated.
pub fn shift_poly(q: u16, a: &[u16], b: &mut [u16]) {
    debug_assert!(a.len() == b.len(), "a.len()={} != b.len()={}", a.len(), b.len());
    let m: usize = a.len();
    b[1..].copy_from_slice(&a[..m - 1]);
    b[0] = (q - a[m - 1] % q) % q;
}

/// Quarter-length table driving the four-lane multiplication.
pub struct SplitTable {
    table: Table,
    n: usize,
}

impl SplitTable {
    /// Builds the lane transform of a length-n product.
    /// Panics if n is not a power of two >= 4 or 2(n/4) does not divide q-1.
    pub fn new(montgomery: MontgomeryPrecomp, n: usize) -> SplitTable {
        assert!(
            n.is_power_of_two() && n >= LANES,
            "invalid argument: n = {} is not a power of two >= 4",
            n
        );
        Self {
            table: Table::new(montgomery, n / LANES),
            n,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Splits a and transforms its four lanes.
    pub fn forward_lhs(&self, a: &[u16]) -> LhsLanes {
        let mut lanes: LhsLanes = split_poly(a);
        lanes
            .iter_mut()
            .for_each(|lane| self.table.forward_inplace(lane));
        lanes
    }

    /// Splits b, appends the shifted lanes y b_1, y b_2, y b_3 and
    /// transforms all seven.
    pub fn forward_rhs(&self, b: &[u16]) -> RhsLanes {
        let [b0, b1, b2, b3] = split_poly(b);
        let q: u16 = self.table.q();
        let shifted = |lane: &Vec<u16>| {
            let mut s: Vec<u16> = vec![0; lane.len()];
            shift_poly(q, lane, &mut s);
            s
        };
        let (y1, y2, y3) = (shifted(&b1), shifted(&b2), shifted(&b3));
        let mut lanes: RhsLanes = [b0, b1, b2, b3, y1, y2, y3];
        lanes
            .iter_mut()
            .for_each(|lane| self.table.forward_inplace(lane));
        lanes
    }

    /// Combines transformed lanes into the four transformed product lanes.
    /// Every output coefficient is fully reduced mod q.
    pub fn bowtie(&self, f: &LhsLanes, g: &RhsLanes) -> LhsLanes {
        let m: &MontgomeryPrecomp = self.table.montgomery();
        let q: u32 = m.q as u32;
        let [f0, f1, f2, f3] = f;
        let [g0, g1, g2, g3, yg1, yg2, yg3] = g;
        let quarter: usize = self.n / LANES;

        let mut h: LhsLanes = std::array::from_fn(|_| vec![0u16; quarter]);
        let mul = |a: u16, b: u16| m.mul_twisted(b, a) as u32;

        for i in 0..quarter {
            let (a0, a1, a2, a3) = (f0[i], f1[i], f2[i], f3[i]);
            h[0][i] = ((mul(a0, g0[i]) + mul(a2, yg2[i]) + mul(a1, yg3[i]) + mul(a3, yg1[i])) % q) as u16;
            h[1][i] = ((mul(a0, g1[i]) + mul(a2, yg3[i]) + mul(a1, g0[i]) + mul(a3, yg2[i])) % q) as u16;
            h[2][i] = ((mul(a0, g2[i]) + mul(a2, g0[i]) + mul(a1, g1[i]) + mul(a3, yg3[i])) % q) as u16;
            h[3][i] = ((mul(a0, g3[i]) + mul(a2, g1[i]) + mul(a1, g2[i]) + mul(a3, g0[i])) % q) as u16;
        }
        h
    }

    /// Inverse-transforms the product lanes and re-interleaves them into c.
    pub fn backward(&self, mut h: LhsLanes, c: &mut [u16]) {
        h.iter_mut()
            .for_each(|lane| self.table.backward_inplace(lane));
        recover_poly(&h, c);
    }

    /// Assigns a * b mod (x^n + 1, q) to c.
    pub fn mul(&self, a: &[u16], b: &[u16], c: &mut [u16]) {
        debug_assert!(a.len() == self.n, "a.len()={} != n={}", a.len(), self.n);
        debug_assert!(b.len() == self.n, "b.len()={} != n={}", b.len(), self.n);
        debug_assert!(c.len() == self.n, "c.len()={} != n={}", c.len(), self.n);
        let f: LhsLanes = self.forward_lhs(a);
        let g: RhsLanes = self.forward_rhs(b);
        self.backward(self.bowtie(&f, &g), c);
    }
}
