pub mod montgomery;

pub trait WordOps<O> {
    fn log2(self) -> O;
    fn reverse_bits_msb(self, n: u32) -> O;
    fn mask(self) -> O;
}

impl WordOps<usize> for usize {
    #[inline(always)]
    fn log2(self) -> usize {
        (usize::BITS - (self - 1).leading_zeros()) as _
    }
    /// Reverses the n least significant bits.
    #[inline(always)]
    fn reverse_bits_msb(self, n: u32) -> usize {
        if n == 0 {
            return 0;
        }
        self.reverse_bits() >> (usize::BITS - n)
    }
    #[inline(always)]
    fn mask(self) -> usize {
        (1 << self.log2()) - 1
    }
}

/// Returns x^exponent mod q.
pub fn pow_mod(x: u16, exponent: u64, q: u16) -> u16 {
    let q: u32 = q as u32;
    let mut base: u32 = x as u32 % q;
    let mut y: u32 = 1 % q;
    let mut i: u64 = exponent;
    while i > 0 {
        if i & 1 == 1 {
            y = y * base % q;
        }
        base = base * base % q;
        i >>= 1;
    }
    y as u16
}

/// Returns x^-1 mod q for prime q.
pub fn inv_mod(x: u16, q: u16) -> u16 {
    debug_assert!(x as u32 % q as u32 != 0, "{} is not invertible mod {}", x, q);
    pow_mod(x, (q - 2) as u64, q)
}

pub fn is_prime(q: u16) -> bool {
    if q < 2 {
        return false;
    }
    let q: u32 = q as u32;
    (2..).take_while(|d| d * d <= q).all(|d| q % d != 0)
}

/// Returns the first psi = g^((q-1)/nth_root), g = 2, 3, ..., of exact
/// order nth_root, i.e. with psi^(nth_root/2) = -1 mod q.
/// Panics if nth_root is not an even divisor of q-1.
pub fn primitive_nth_root(q: u16, nth_root: u64) -> u16 {
    assert!(
        nth_root >= 2 && nth_root & (nth_root - 1) == 0,
        "invalid nth_root = {}: not a power of two >= 2",
        nth_root
    );
    assert!(
        (q as u64 - 1) % nth_root == 0,
        "invalid modulus: (q - 1) = {} % nth_root = {} != 0",
        q - 1,
        nth_root
    );
    (2..q)
        .map(|g| pow_mod(g, (q as u64 - 1) / nth_root, q))
        .find(|psi| pow_mod(*psi, nth_root >> 1, q) == q - 1)
        .unwrap_or_else(|| panic!("no primitive {}-th root of unity mod {}", nth_root, q))
}
