use crate::modulus::{inv_mod, pow_mod};

/// Montgomery radix R = 2^R_LOG.
pub const R_LOG: u32 = 18;

pub const R_MASK: u32 = (1 << R_LOG) - 1;

/// Largest input accepted by [MontgomeryPrecomp::reduce].
pub const REDUCE_INPUT_MAX: u32 = 1_073_491_968;

/// Element stored in the Montgomery domain, i.e. x * R mod q.
pub type Montgomery = u16;

/// Precomputations for Montgomery arithmetic modulo an odd q < 2^14.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MontgomeryPrecomp {
    pub q: u16,
    /// -q^-1 mod R.
    pub q_inv: u32,
    /// floor(2^32 / q), used by [MontgomeryPrecomp::freeze].
    pub barrett: u64,
    /// R mod q.
    pub one: Montgomery,
    /// R^2 mod q. Multiplying by it through [MontgomeryPrecomp::reduce]
    /// moves a value into the Montgomery domain.
    pub r_squared: Montgomery,
}

impl MontgomeryPrecomp {
    /// Returns a new instance of MontgomeryPrecomp.
    /// Panics if q is even or q >= 2^14.
    pub fn new(q: u16) -> MontgomeryPrecomp {
        assert!(
            q & 1 == 1,
            "invalid argument: gcd(q={}, radix=2^{}) != 1",
            q,
            R_LOG
        );
        assert!(q < 1 << 14, "invalid argument: q={} >= 2^14", q);

        // Newton iteration, each step doubles the number of correct low bits.
        let mut inv: u32 = 1;
        for _ in 0..5 {
            inv = inv.wrapping_mul(2u32.wrapping_sub((q as u32).wrapping_mul(inv)));
        }

        let r: u64 = 1 << R_LOG;

        Self {
            q,
            q_inv: inv.wrapping_neg() & R_MASK,
            barrett: (1u64 << 32) / q as u64,
            one: (r % q as u64) as u16,
            r_squared: ((r * r) % q as u64) as u16,
        }
    }

    /// Returns a * R^-1 mod q in [0, q + 2^12).
    /// The caller guarantees a <= [REDUCE_INPUT_MAX]; larger inputs
    /// give unspecified (but non-panicking) results in release builds.
    #[inline(always)]
    pub fn reduce(&self, a: u32) -> u16 {
        debug_assert!(
            a <= REDUCE_INPUT_MAX,
            "montgomery input {} > {}",
            a,
            REDUCE_INPUT_MAX
        );
        let u: u64 = (a.wrapping_mul(self.q_inv) & R_MASK) as u64 * self.q as u64;
        ((a as u64 + u) >> R_LOG) as u16
    }

    /// Returns x mod q in [0, q) without branching on x.
    #[inline(always)]
    pub fn freeze(&self, x: u16) -> u16 {
        let t: u32 = ((x as u64 * self.barrett) >> 32) as u32;
        let r: u16 = (x as u32 - t * self.q as u32) as u16;
        let m: u16 = r.wrapping_sub(self.q);
        let c: u16 = ((m as i16) >> 15) as u16;
        m ^ ((r ^ m) & c)
    }

    /// Returns x * R mod q.
    #[inline(always)]
    pub fn prepare(&self, x: u16) -> Montgomery {
        (((x as u64) << R_LOG) % self.q as u64) as u16
    }

    /// Returns x * R^-1 mod q in [0, q).
    #[inline(always)]
    pub fn unprepare(&self, x: Montgomery) -> u16 {
        self.freeze(self.reduce(x as u32))
    }

    /// Returns lhs * rhs * R^-1 mod q, not fully reduced.
    #[inline(always)]
    pub fn mul_external(&self, lhs: Montgomery, rhs: u16) -> u16 {
        self.reduce(lhs as u32 * rhs as u32)
    }

    /// Returns a * b mod q (normal domain) in [0, q + 2^12), lifting b
    /// into the Montgomery domain through R^2 before the product.
    #[inline(always)]
    pub fn mul_twisted(&self, a: u16, b: u16) -> u16 {
        let t: Montgomery = self.reduce(self.r_squared as u32 * b as u32);
        self.reduce(a as u32 * t as u32)
    }

    /// Returns x^exponent mod q.
    pub fn pow(&self, x: u16, exponent: u64) -> u16 {
        pow_mod(x, exponent, self.q)
    }

    /// Returns x^-1 mod q. The caller guarantees q is prime and x != 0 mod q.
    pub fn inv(&self, x: u16) -> u16 {
        inv_mod(x, self.q)
    }
}
