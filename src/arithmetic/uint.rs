//! This module contains the [`Uint`] unsigned big integer together with its
//! exact instantiations [`U64`] for 64 bits, [`U128`] for 128 bits, and so
//! on.
//!
//! All core operations are `const fn`s, so big-integer constants and
//! arithmetic over them fold at compile time.

use alloc::vec::Vec;
use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display, Result, UpperHex},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
        BitXorAssign, Div, DivAssign, Mul, MulAssign, Not, Rem, RemAssign,
        Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
};

use num_traits::{ConstOne, ConstZero, One, Zero};
use zeroize::Zeroize;

use crate::{
    arithmetic::{
        int::Int,
        limb,
        limb::{Limb, Limbs, WideLimb},
    },
};

/// Stack-allocated big unsigned integer.
///
/// Generic over number `N` of [`Limb`]s, stored little-endian: index 0 is
/// the least significant limb. Arithmetic wraps modulo `2^(N * 64)` like the
/// primitive unsigned types.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct Uint<const N: usize> {
    pub(crate) limbs: Limbs<N>,
}

impl<const N: usize> Default for Uint<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Declare [`Uint`] types for different bit sizes.
macro_rules! declare_num {
    ($num:ident, $bits:expr) => {
        #[doc = "Unsigned integer with "]
        #[doc = stringify!($bits)]
        #[doc = "bits size."]
        pub type $num = $crate::arithmetic::uint::Uint<
            { usize::div_ceil($bits, $crate::arithmetic::Limb::BITS as usize) },
        >;
    };
}

declare_num!(U64, 64);
declare_num!(U128, 128);
declare_num!(U256, 256);
declare_num!(U512, 512);

impl<const N: usize> Uint<N> {
    /// Width of the integer in bits.
    pub const BITS: usize = N * Limb::BITS as usize;
    /// Width of the integer in bytes.
    pub const BYTES: usize = N * Limb::BITS as usize / 8;
    /// The maximum value, `2^BITS - 1`.
    pub const MAX: Self = Self { limbs: [Limb::MAX; N] };
    /// The value `1`.
    pub const ONE: Self = {
        let mut one = Self::ZERO;
        one.limbs[0] = 1;
        one
    };
    /// The value `0`.
    pub const ZERO: Self = Self { limbs: [0; N] };

    /// Create a new [`Uint`] from the provided `limbs` (constant).
    #[must_use]
    pub const fn new(limbs: Limbs<N>) -> Self {
        Self { limbs }
    }

    /// Returns reference to the inner [`Limbs`] array (constant).
    #[must_use]
    pub const fn as_limbs(&self) -> &Limbs<N> {
        &self.limbs
    }

    /// Returns inner [`Limbs`] array (constant).
    #[must_use]
    pub const fn into_limbs(self) -> Limbs<N> {
        self.limbs
    }

    /// Returns true if this number is odd (constant).
    #[inline]
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Returns true if this number is even (constant).
    #[inline]
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Checks `self` is greater or equal then `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn ge(&self, rhs: &Self) -> bool {
        let mut result = true;
        const_for_unroll6!((i in 0..N) {
            let a = self.limbs[i];
            let b = rhs.limbs[i];
            if a > b {
                result = true;
            } else if a < b {
                result = false;
            }
        });
        result
    }

    /// Checks `self` is greater then `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn gt(&self, rhs: &Self) -> bool {
        let mut result = false;
        const_for_unroll6!((i in 0..N) {
            let a = self.limbs[i];
            let b = rhs.limbs[i];
            if a > b {
                result = true;
            } else if a < b {
                result = false;
            }
        });
        result
    }

    /// Checks `self` is less or equal then `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn le(&self, rhs: &Self) -> bool {
        let mut result = true;
        const_for_unroll6!((i in 0..N) {
            let a = self.limbs[i];
            let b = rhs.limbs[i];
            if a < b {
                result = true;
            } else if a > b {
                result = false;
            }
        });
        result
    }

    /// Checks `self` is less then `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn lt(&self, rhs: &Self) -> bool {
        let mut result = false;
        const_for_unroll6!((i in 0..N) {
            let a = self.limbs[i];
            let b = rhs.limbs[i];
            if a < b {
                result = true;
            } else if a > b {
                result = false;
            }
        });
        result
    }

    /// Checks `self` is zero (constant).
    #[must_use]
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.eq(&Self::ZERO)
    }

    /// Checks if `self` is equal to `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn eq(&self, rhs: &Self) -> bool {
        const_for!((i in 0..N) {
            if self.limbs[i] != rhs.limbs[i] {
                return false;
            }
        });
        true
    }

    /// Checks if `self` is not equal to `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn ne(&self, rhs: &Self) -> bool {
        !self.eq(rhs)
    }

    /// Number of leading zero bits; `Self::BITS` for zero (constant).
    #[must_use]
    pub const fn leading_zeros(&self) -> u32 {
        let mut count = 0;
        const_rev_for!((i in 0..N) {
            let zeros = self.limbs[i].leading_zeros();
            count += zeros;

            // Stop at the first limb with a set bit.
            if zeros < Limb::BITS {
                break;
            }
        });
        count
    }

    /// Return the minimum number of bits needed to encode this number;
    /// `0` for zero (constant).
    #[must_use]
    pub const fn num_bits(&self) -> usize {
        Self::BITS - self.leading_zeros() as usize
    }

    /// Find the `i`-th bit of `self` (constant).
    #[must_use]
    pub const fn get_bit(&self, i: usize) -> bool {
        // If `i` is more than total bits, return `false`.
        if i >= Self::BITS {
            return false;
        }

        // Otherwise find `limb` and `bit` indices and get the bit.
        let bits_in_limb = Limb::BITS as usize;
        let limb = i / bits_in_limb;
        let bit = i - bits_in_limb * limb;
        let mask = 1 << bit;
        (self.limbs[limb] & mask) != 0
    }

    /// Computes `self + rhs + carry`, returning the result along with the
    /// new carry (constant).
    #[inline(always)]
    #[must_use]
    pub const fn adc(&self, rhs: &Self, mut carry: bool) -> (Self, bool) {
        let mut limbs = [0; N];

        const_for!((i in 0..N) {
            (limbs[i], carry) = limb::adc(self.limbs[i], rhs.limbs[i], carry);
        });

        (Self { limbs }, carry)
    }

    /// Add `rhs` to `self`, returning the result and whether overflow
    /// occurred (constant).
    #[inline]
    #[must_use]
    pub const fn checked_add(self, rhs: &Self) -> (Self, bool) {
        self.adc(rhs, false)
    }

    /// Add two numbers wrapping around the upper boundary (constant).
    #[must_use]
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.adc(rhs, false).0
    }

    /// Add `rhs` to `self` in-place, returning whether overflow occurred.
    #[inline(always)]
    pub fn checked_add_assign(&mut self, rhs: &Self) -> bool {
        let mut carry = false;

        const_for_unroll6!((i in 0..N) {
            carry = limb::adc_assign(&mut self.limbs[i], rhs.limbs[i], carry);
        });

        carry
    }

    /// Subtract `rhs` from `self`, returning the result and whether overflow
    /// occurred (constant).
    #[inline(always)]
    #[must_use]
    pub const fn checked_sub(mut self, rhs: &Self) -> (Self, bool) {
        let mut borrow = false;

        const_for_unroll6!((i in 0..N) {
            (self.limbs[i], borrow) = limb::sbb(self.limbs[i], rhs.limbs[i], borrow);
        });

        (self, borrow)
    }

    /// Subtract `rhs` from `self`, returning the result wrapping around the
    /// lower boundary (constant).
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.checked_sub(rhs).0
    }

    /// Subtract `rhs` from `self` in-place, returning whether overflow
    /// occurred.
    #[inline(always)]
    pub fn checked_sub_assign(&mut self, rhs: &Self) -> bool {
        let mut borrow = false;

        const_for_unroll6!((i in 0..N) {
            borrow =
                limb::sbb_assign(&mut self.limbs[i], rhs.limbs[i], borrow);
        });

        borrow
    }

    /// Two's-complement negation, `2^BITS - self` wrapping at zero
    /// (constant).
    #[inline]
    #[must_use]
    pub const fn wrapping_neg(&self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }

    /// Bitwise NOT (constant).
    #[must_use]
    pub const fn not(&self) -> Self {
        let mut limbs = [0; N];
        const_for!((i in 0..N) {
            limbs[i] = !self.limbs[i];
        });
        Self { limbs }
    }

    /// Limb-wise AND (constant).
    #[must_use]
    pub const fn bitand(&self, rhs: &Self) -> Self {
        let mut limbs = [0; N];
        const_for!((i in 0..N) {
            limbs[i] = self.limbs[i] & rhs.limbs[i];
        });
        Self { limbs }
    }

    /// Limb-wise OR (constant).
    #[must_use]
    pub const fn bitor(&self, rhs: &Self) -> Self {
        let mut limbs = [0; N];
        const_for!((i in 0..N) {
            limbs[i] = self.limbs[i] | rhs.limbs[i];
        });
        Self { limbs }
    }

    /// Limb-wise XOR (constant).
    #[must_use]
    pub const fn bitxor(&self, rhs: &Self) -> Self {
        let mut limbs = [0; N];
        const_for!((i in 0..N) {
            limbs[i] = self.limbs[i] ^ rhs.limbs[i];
        });
        Self { limbs }
    }

    /// Compute "wide" multiplication, with a product twice the size of the
    /// input.
    ///
    /// Returns a tuple containing the `(lo, hi)` components of the product.
    ///
    /// Dispatches between the schoolbook and the Karatsuba implementation
    /// depending on the `karatsuba` crate feature; both produce identical
    /// results (constant).
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(&self, rhs: &Self) -> (Self, Self) {
        if cfg!(feature = "karatsuba") {
            self.widening_mul_karatsuba(rhs)
        } else {
            self.widening_mul_classic(rhs)
        }
    }

    /// Schoolbook "wide" multiplication (constant).
    ///
    /// Basic multiplication algorithm described in [wiki]. It is fast enough
    /// for runtime use when optimized with loop "unrolls", like
    /// [`const_for_unroll6`].
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/Multiplication_algorithm
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul_classic(&self, rhs: &Self) -> (Self, Self) {
        let (mut lo, mut hi) = ([0; N], [0; N]);
        // For each digit of the first number,
        const_for_unroll6!((i in 0..N) {
            let mut carry = 0;
            // perform multiplication of each digit from the second.
            const_for_unroll6!((j in 0..N) {
                // And if the multiplication result is too big,
                let k = i + j;
                if k >= N {
                    // it should go to the high (hi) part.
                    (hi[k - N], carry) = limb::carrying_mac(
                        hi[k - N],
                        self.limbs[i],
                        rhs.limbs[j],
                        carry
                    );
                } else {
                    (lo[k], carry) = limb::carrying_mac(
                        lo[k],
                        self.limbs[i],
                        rhs.limbs[j],
                        carry
                    );
                }
            });
            // Set the last carry to the next limb.
            hi[i] = carry;
        });

        (Self::new(lo), Self::new(hi))
    }

    /// Karatsuba "wide" multiplication (constant).
    ///
    /// Splits each operand into high and low halves, computes the three half
    /// products `x = hi * hi`, `y = lo * lo` and
    /// `z = (hi + lo) * (hi + lo) - x - y`, then assembles
    /// `y + z * 2^(BITS/2) + x * 2^BITS`. The half sums can overflow by one
    /// bit each; those bits are tracked explicitly.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub const fn widening_mul_karatsuba(&self, rhs: &Self) -> (Self, Self) {
        if N < 2 || N % 2 != 0 {
            // No halves to split into.
            return self.widening_mul_classic(rhs);
        }
        let h = N / 2;

        // The three half products, each exactly N limbs.
        let x = mul_part(&self.limbs, h, &rhs.limbs, h, h);
        let y = mul_part(&self.limbs, 0, &rhs.limbs, 0, h);

        // Half sums with their overflow bits.
        let mut s = [0; N];
        let mut t = [0; N];
        let mut ca = false;
        let mut cb = false;
        const_for!((i in 0..h) {
            (s[i], ca) = limb::adc(self.limbs[i], self.limbs[i + h], ca);
            (t[i], cb) = limb::adc(rhs.limbs[i], rhs.limbs[i + h], cb);
        });

        // z = s * t as an (h+1)-limb by (h+1)-limb product, without
        // materializing the overflow limbs: the cross terms contributed by
        // the overflow bits are added back in.
        let mut z = mul_part(&s, 0, &t, 0, h);
        let mut z_top: Limb = 0;
        if ca {
            let mut carry = false;
            const_for!((i in 0..h) {
                (z[h + i], carry) = limb::adc(z[h + i], t[i], carry);
            });
            z_top += carry as Limb;
        }
        if cb {
            let mut carry = false;
            const_for!((i in 0..h) {
                (z[h + i], carry) = limb::adc(z[h + i], s[i], carry);
            });
            z_top += carry as Limb;
        }
        if ca && cb {
            z_top += 1;
        }

        // z -= x + y; the invariant z_top <= 1 holds afterwards.
        let mut borrow = false;
        const_for!((i in 0..N) {
            (z[i], borrow) = limb::sbb(z[i], x[i], borrow);
        });
        z_top = z_top.wrapping_sub(borrow as Limb);
        borrow = false;
        const_for!((i in 0..N) {
            (z[i], borrow) = limb::sbb(z[i], y[i], borrow);
        });
        z_top = z_top.wrapping_sub(borrow as Limb);

        // result = y + (z << h limbs) + (x << N limbs)
        let mut lo = y;
        let mut hi = x;
        let mut carry = false;
        const_for!((i in 0..N) {
            let position = h + i;
            if position < N {
                (lo[position], carry) = limb::adc(lo[position], z[i], carry);
            } else {
                (hi[position - N], carry) =
                    limb::adc(hi[position - N], z[i], carry);
            }
        });
        (hi[h], carry) = limb::adc(hi[h], z_top, carry);
        let mut k = h + 1;
        while carry && k < N {
            (hi[k], carry) = limb::adc(hi[k], 0, true);
            k += 1;
        }

        (Self::new(lo), Self::new(hi))
    }

    /// Multiply two numbers wrapping around the upper boundary (constant).
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.widening_mul(rhs).0
    }

    /// Multiply two numbers, returning the low half of the product and
    /// whether overflow occurred (constant).
    #[must_use]
    pub const fn checked_mul(&self, rhs: &Self) -> (Self, bool) {
        let (low, high) = self.widening_mul(rhs);
        (low, !high.is_zero())
    }

    /// Multiply two numbers and panic on overflow (constant).
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub const fn mul(&self, rhs: &Self) -> Self {
        let (low, high) = self.widening_mul(rhs);
        assert!(high.is_zero(), "overflow on multiplication");
        low
    }

    /// Add two numbers and panic on overflow (constant).
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub const fn add(&self, rhs: &Self) -> Self {
        let (low, carry) = self.adc(rhs, false);
        assert!(!carry, "overflow on addition");
        low
    }

    /// Shift left by `rhs` bits; amounts of `Self::BITS` or more yield zero
    /// (constant).
    #[must_use]
    pub const fn shl(self, rhs: u32) -> Self {
        if rhs as usize >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (rhs / Limb::BITS) as usize;
        let bit_shift = rhs % Limb::BITS;
        let mut result = Self::ZERO;
        const_rev_for!((i in 0..N) {
            if i >= limb_shift {
                let src = i - limb_shift;
                let lower = if src > 0 { self.limbs[src - 1] } else { 0 };
                result.limbs[i] = limb::shl2(self.limbs[src], lower, bit_shift);
            }
        });
        result
    }

    /// Shift right by `rhs` bits; amounts of `Self::BITS` or more yield zero
    /// (constant).
    #[must_use]
    pub const fn shr(self, rhs: u32) -> Self {
        if rhs as usize >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (rhs / Limb::BITS) as usize;
        let bit_shift = rhs % Limb::BITS;
        let mut result = Self::ZERO;
        const_for!((i in 0..N) {
            let src = i + limb_shift;
            if src < N {
                let upper = if src + 1 < N { self.limbs[src + 1] } else { 0 };
                result.limbs[i] = limb::shr2(upper, self.limbs[src], bit_shift);
            }
        });
        result
    }

    /// Divide `self` by `rhs`, returning the quotient and the remainder
    /// (constant).
    ///
    /// # Panics
    ///
    /// * If `rhs` is zero, like the host primitive division.
    #[must_use]
    pub const fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        WideUint::new(*self, Self::ZERO).div_rem(rhs)
    }

    /// Divide `self` by `rhs`, returning the quotient only and skipping the
    /// remainder denormalization (constant).
    ///
    /// # Panics
    ///
    /// * If `rhs` is zero, like the host primitive division.
    #[must_use]
    pub const fn div(&self, rhs: &Self) -> Self {
        WideUint::new(*self, Self::ZERO).div(rhs)
    }

    /// Checked division; `None` when `rhs` is zero (constant).
    #[must_use]
    pub const fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.div(rhs))
        }
    }

    /// Checked remainder; `None` when `rhs` is zero (constant).
    #[must_use]
    pub const fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            let (_, remainder) = self.div_rem(rhs);
            Some(remainder)
        }
    }

    /// Computes `self * rhs / divisor` through the full double-width
    /// product, so the intermediate multiplication cannot overflow
    /// (constant).
    ///
    /// Returns the all-ones sentinel when the quotient does not fit
    /// `Self::BITS` bits.
    ///
    /// # Panics
    ///
    /// * If `divisor` is zero, like the host primitive division.
    #[must_use]
    pub const fn muldiv(&self, rhs: &Self, divisor: &Self) -> Self {
        let (low, high) = self.widening_mul(rhs);
        WideUint::new(low, high).div(divisor)
    }

    /// Create a new [`Uint`] from the provided little endian bytes.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub const fn from_le_slice(bytes: &[u8]) -> Self {
        const LIMB_BYTES: usize = Limb::BITS as usize / 8;
        assert!(
            bytes.len() == LIMB_BYTES * N,
            "bytes are not the expected size"
        );

        let mut res = [0; N];
        let mut buf = [0u8; LIMB_BYTES];

        const_for!((i in 0..N) {
            const_for!((j in 0..LIMB_BYTES) {
                buf[j] = bytes[i * LIMB_BYTES + j];
            });
            res[i] = Limb::from_le_bytes(buf);
        });

        Self::new(res)
    }

    /// Convert `self` to little-endian bytes.
    #[must_use]
    pub fn into_bytes_le(self) -> Vec<u8> {
        self.limbs.iter().flat_map(|&limb| limb.to_le_bytes()).collect()
    }

    /// Construct `Self` from the other [`Uint`] of different size (constant).
    ///
    /// # Panics
    ///
    /// * If `value` is bigger than `Self` maximum size.
    #[must_use]
    pub const fn from_uint<const N2: usize>(value: Uint<N2>) -> Self {
        let mut res = Uint::<N>::ZERO;
        const_for!((i in 0..{value.limbs.len()}) {
            if i < res.limbs.len() {
                res.limbs[i] = value.limbs[i];
            } else if value.limbs[i] != 0 {
                panic!("converted element is too large")
            }
        });
        res
    }

    /// Zero-extend into a wider [`Uint`] (constant).
    ///
    /// # Panics
    ///
    /// * If `M` is narrower than `N`.
    #[must_use]
    pub const fn widen<const M: usize>(self) -> Uint<M> {
        assert!(M >= N, "widening target must not be narrower");
        let mut res = Uint::<M>::ZERO;
        const_for!((i in 0..N) {
            res.limbs[i] = self.limbs[i];
        });
        res
    }

    /// Truncate to a narrower [`Uint`], keeping the low limbs (constant).
    ///
    /// Narrowing is lossy by design and never fails.
    ///
    /// # Panics
    ///
    /// * If `M` is wider than `N`.
    #[must_use]
    pub const fn truncate<const M: usize>(self) -> Uint<M> {
        assert!(M <= N, "truncation target must not be wider");
        let mut res = Uint::<M>::ZERO;
        const_for!((i in 0..M) {
            res.limbs[i] = self.limbs[i];
        });
        res
    }

    /// Reinterpret the bits of a same-width signed integer (constant).
    #[must_use]
    pub const fn from_bits(value: Int<N>) -> Self {
        value.to_bits()
    }

    /// Create a [`Uint`] from a boolean, `0` or `1` (constant).
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        let mut repr = Self::ZERO;
        repr.limbs[0] = value as Limb;
        repr
    }
}

// ----------- From Impls -----------

/// Constant conversions from unsigned primitive types.
macro_rules! impl_from_unsigned {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> Uint<N> {
            #[doc = "Create a [`Uint`] from"]
            #[doc = stringify!($int)]
            #[doc = "integer, zero-extended (constant)."]
            #[must_use]
            #[allow(clippy::cast_lossless)]
            pub const fn $func_name(val: $int) -> Self {
                assert!(N >= 1, "number of limbs must be greater than zero");
                let mut repr = Self::ZERO;
                repr.limbs[0] = val as Limb;
                repr
            }
        }
    };
}
impl_from_unsigned!(u8, from_u8);
impl_from_unsigned!(u16, from_u16);
impl_from_unsigned!(u32, from_u32);
impl_from_unsigned!(u64, from_u64);
impl_from_unsigned!(usize, from_usize);

/// Constant conversions from signed primitive types.
///
/// The value is sign-extended into the high limbs, then the bits are
/// reinterpreted as unsigned.
macro_rules! impl_from_signed {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> Uint<N> {
            #[doc = "Create a [`Uint`] from"]
            #[doc = stringify!($int)]
            #[doc = "integer, sign-extended (constant)."]
            #[must_use]
            #[allow(clippy::cast_lossless)]
            #[allow(clippy::cast_sign_loss)]
            pub const fn $func_name(val: $int) -> Self {
                assert!(N >= 1, "number of limbs must be greater than zero");
                let mut repr = if val < 0 { Self::MAX } else { Self::ZERO };
                repr.limbs[0] = val as i64 as u64;
                repr
            }
        }
    };
}
impl_from_signed!(i8, from_i8);
impl_from_signed!(i16, from_i16);
impl_from_signed!(i32, from_i32);
impl_from_signed!(i64, from_i64);
impl_from_signed!(isize, from_isize);

// Logic for `u128` and `i128` conversion is different from the narrower
// primitives, due to the size of the `Limb`.
impl<const N: usize> Uint<N> {
    /// Create a [`Uint`] from a `u128` integer (constant).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_lossless)]
    #[allow(clippy::missing_panics_doc)]
    pub const fn from_u128(val: u128) -> Self {
        assert!(N >= 1, "number of limbs must be greater than zero");

        let lo = val as Limb;
        let hi = (val >> Limb::BITS) as Limb;

        // If there are at least 2 limbs,
        if N >= 2 {
            // we can fit `lo` and `hi`,
            let mut res = Self::ZERO;
            res.limbs[0] = lo;
            res.limbs[1] = hi;
            res
        } else if hi == 0 {
            // or if `hi` is zero, we can fit `lo`
            let mut res = Self::ZERO;
            res.limbs[0] = lo;
            res
        } else {
            // otherwise, we panic.
            panic!("u128 is too large to fit");
        }
    }

    /// Create a [`Uint`] from an `i128` integer, sign-extended (constant).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::missing_panics_doc)]
    pub const fn from_i128(val: i128) -> Self {
        assert!(N >= 1, "number of limbs must be greater than zero");

        let lo = val as Limb;
        let hi = (val >> Limb::BITS) as Limb;

        let mut repr = if val < 0 { Self::MAX } else { Self::ZERO };
        if N >= 2 {
            repr.limbs[0] = lo;
            repr.limbs[1] = hi;
        } else {
            // The truncated limb must still carry the sign.
            assert!(
                hi == (((lo as i64) >> 63) as u64),
                "i128 is too large to fit"
            );
            repr.limbs[0] = lo;
        }
        repr
    }
}

/// From traits implementation for primitives.
macro_rules! impl_from_primitive {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> From<$int> for Uint<N> {
            #[inline]
            fn from(val: $int) -> Uint<N> {
                Uint::<N>::$func_name(val)
            }
        }
    };
}

impl_from_primitive!(u8, from_u8);
impl_from_primitive!(u16, from_u16);
impl_from_primitive!(u32, from_u32);
impl_from_primitive!(u64, from_u64);
impl_from_primitive!(usize, from_usize);
impl_from_primitive!(u128, from_u128);
impl_from_primitive!(i8, from_i8);
impl_from_primitive!(i16, from_i16);
impl_from_primitive!(i32, from_i32);
impl_from_primitive!(i64, from_i64);
impl_from_primitive!(isize, from_isize);
impl_from_primitive!(i128, from_i128);
impl_from_primitive!(bool, from_bool);

impl<const N: usize> From<Int<N>> for Uint<N> {
    #[inline]
    fn from(value: Int<N>) -> Self {
        Self::from_bits(value)
    }
}

/// Constant conversions into primitive types.
///
/// Implements conversion [`Uint`] -> `$int` for `$int` not bigger than
/// `Limb`'s max size.
macro_rules! impl_into_primitive {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> Uint<N> {
            #[doc = "Create a"]
            #[doc = stringify!($int)]
            #[doc = "integer from [`Uint`] (constant)."]
            #[doc = "# Panics"]
            #[doc = "* If [`Uint`] value is too large to fit into primitive integer."]
            #[must_use]
            #[allow(clippy::cast_possible_truncation)]
            pub const fn $func_name(self) -> $int {
                assert!(N >= 1, "number of limbs must be greater than zero");
                // Each limb besides the first one should be zero,
                const_for!((i in 1..N) {
                    // otherwise panic with overflow.
                    assert!(self.limbs[i] == 0, "Uint value is too large to fit");
                });
                // Panic if the first limb's value is bigger than maximum of
                // the resulting integer.
                assert!(
                    self.limbs[0] <= <$int>::MAX as Limb,
                    "Uint value is too large to fit"
                );

                self.limbs[0] as $int
            }
        }
    };
}

impl_into_primitive!(u8, into_u8);
impl_into_primitive!(u16, into_u16);
impl_into_primitive!(u32, into_u32);
impl_into_primitive!(u64, into_u64);
impl_into_primitive!(usize, into_usize);

impl<const N: usize> Uint<N> {
    /// Create a `u128` integer from [`Uint`] (constant).
    ///
    /// # Panics
    ///
    /// * If [`Uint`] value is too large to fit into primitive integer.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn into_u128(self) -> u128 {
        match N {
            0 => {
                panic!("number of limbs must be greater than zero")
            }
            1 => self.limbs[0] as u128,
            _ => {
                // Each limb besides the first two should be zero,
                const_for!((i in 2..N) {
                    // otherwise panic with overflow.
                    assert!(self.limbs[i] == 0, "Uint value is too large to fit");
                });

                // Type u128 can be safely packed in two 64-bit limbs.
                let res0 = self.limbs[0] as u128;
                let res1 = (self.limbs[1] as u128) << Limb::BITS;
                res0 | res1
            }
        }
    }
}

/// From traits implementation for [`Uint`] into primitive types.
macro_rules! impl_from_uint {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> From<Uint<N>> for $int {
            #[inline]
            fn from(val: Uint<N>) -> $int {
                val.$func_name()
            }
        }
    };
}

impl_from_uint!(u8, into_u8);
impl_from_uint!(u16, into_u16);
impl_from_uint!(u32, into_u32);
impl_from_uint!(u64, into_u64);
impl_from_uint!(usize, into_usize);
impl_from_uint!(u128, into_u128);

// ----------- Traits Impls -----------

impl<const N: usize> UpperHex for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        // Concatenate hex representation of limbs in reversed order without
        // allocations.
        // By the end, it will produce actual hex of `Uint`.
        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:016X}")?;
        }
        Ok(())
    }
}

impl<const N: usize> Display for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        // Use upper hex by default.
        write!(f, "{self:X}")
    }
}

impl<const N: usize> Debug for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{self}")
    }
}

impl<const N: usize> Ord for Uint<N> {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        let mut result = Ordering::Equal;
        const_for_unroll6!((i in 0..N) {
            let a = &self.limbs[i];
            let b = &rhs.limbs[i];
            match a.cmp(b) {
                Ordering::Equal => {}
                order => {result = order},
            }
        });

        result
    }
}

impl<const N: usize> PartialOrd for Uint<N> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<const N: usize> AsMut<[u64]> for Uint<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [u64] {
        &mut self.limbs
    }
}

impl<const N: usize> AsRef<[u64]> for Uint<N> {
    #[inline]
    fn as_ref(&self) -> &[u64] {
        &self.limbs
    }
}

impl<B: Borrow<Self>, const N: usize> BitXorAssign<B> for Uint<N> {
    fn bitxor_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] ^= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitXor<B> for Uint<N> {
    type Output = Self;

    fn bitxor(mut self, rhs: B) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl<B: Borrow<Self>, const N: usize> BitAndAssign<B> for Uint<N> {
    fn bitand_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] &= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitAnd<B> for Uint<N> {
    type Output = Self;

    fn bitand(mut self, rhs: B) -> Self::Output {
        self &= rhs;
        self
    }
}

impl<B: Borrow<Self>, const N: usize> BitOrAssign<B> for Uint<N> {
    fn bitor_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] |= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitOr<B> for Uint<N> {
    type Output = Self;

    fn bitor(mut self, rhs: B) -> Self::Output {
        self |= rhs;
        self
    }
}

impl<const N: usize> Not for Uint<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Uint::not(&self)
    }
}

impl<const N: usize> Shl<u32> for Uint<N> {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        Uint::shl(self, rhs)
    }
}

impl<const N: usize> ShlAssign<u32> for Uint<N> {
    fn shl_assign(&mut self, rhs: u32) {
        *self = Uint::shl(*self, rhs);
    }
}

impl<const N: usize> Shr<u32> for Uint<N> {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        Uint::shr(self, rhs)
    }
}

impl<const N: usize> ShrAssign<u32> for Uint<N> {
    fn shr_assign(&mut self, rhs: u32) {
        *self = Uint::shr(*self, rhs);
    }
}

impl<B: Borrow<Self>, const N: usize> Add<B> for Uint<N> {
    type Output = Self;

    fn add(self, rhs: B) -> Self::Output {
        self.wrapping_add(rhs.borrow())
    }
}

impl<B: Borrow<Self>, const N: usize> AddAssign<B> for Uint<N> {
    fn add_assign(&mut self, rhs: B) {
        *self = self.wrapping_add(rhs.borrow());
    }
}

impl<B: Borrow<Self>, const N: usize> Sub<B> for Uint<N> {
    type Output = Self;

    fn sub(self, rhs: B) -> Self::Output {
        self.wrapping_sub(rhs.borrow())
    }
}

impl<B: Borrow<Self>, const N: usize> SubAssign<B> for Uint<N> {
    fn sub_assign(&mut self, rhs: B) {
        *self = self.wrapping_sub(rhs.borrow());
    }
}

impl<B: Borrow<Self>, const N: usize> Mul<B> for Uint<N> {
    type Output = Self;

    fn mul(self, rhs: B) -> Self::Output {
        self.wrapping_mul(rhs.borrow())
    }
}

impl<B: Borrow<Self>, const N: usize> MulAssign<B> for Uint<N> {
    fn mul_assign(&mut self, rhs: B) {
        *self = self.wrapping_mul(rhs.borrow());
    }
}

impl<B: Borrow<Self>, const N: usize> Div<B> for Uint<N> {
    type Output = Self;

    fn div(self, rhs: B) -> Self::Output {
        Uint::div(&self, rhs.borrow())
    }
}

impl<B: Borrow<Self>, const N: usize> DivAssign<B> for Uint<N> {
    fn div_assign(&mut self, rhs: B) {
        *self = Uint::div(self, rhs.borrow());
    }
}

impl<B: Borrow<Self>, const N: usize> Rem<B> for Uint<N> {
    type Output = Self;

    fn rem(self, rhs: B) -> Self::Output {
        self.div_rem(rhs.borrow()).1
    }
}

impl<B: Borrow<Self>, const N: usize> RemAssign<B> for Uint<N> {
    fn rem_assign(&mut self, rhs: B) {
        *self = self.div_rem(rhs.borrow()).1;
    }
}

impl<const N: usize> Zero for Uint<N> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Uint::is_zero(self)
    }
}

impl<const N: usize> ConstZero for Uint<N> {
    const ZERO: Self = Self::ZERO;
}

impl<const N: usize> One for Uint<N> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<const N: usize> ConstOne for Uint<N> {
    const ONE: Self = Self::ONE;
}

// ----------- Radix parsing -----------

/// Parse a number from a string in a given radix.
///
/// Supported radixes are 2, 8, 10 and 16; `_` digit separators are skipped.
///
/// This implementation can be slow on big numbers and possibly fail constant
/// compilation by timeout.
///
/// # Panics
///
/// * If the string contains characters that are not digits of `radix` or
///   separators, or if the number does not fit the integer width.
#[must_use]
pub const fn from_str_radix<const LIMBS: usize>(
    s: &str,
    radix: u32,
) -> Uint<LIMBS> {
    from_bytes_radix(s.as_bytes(), 0, radix)
}

/// Parse the digits `bytes[start..]` in a given radix.
///
/// The byte-level entry point shared with the signed parser, which strips
/// the sign before delegating here.
pub(crate) const fn from_bytes_radix<const LIMBS: usize>(
    bytes: &[u8],
    start: usize,
    radix: u32,
) -> Uint<LIMBS> {
    assert!(
        radix == 2 || radix == 8 || radix == 10 || radix == 16,
        "unsupported radix"
    );
    assert!(bytes.len() > start, "empty string");

    // The lowest order number is at the end of the string.
    // Begin parsing from the last index of the string.
    let mut index = bytes.len() - 1;

    let mut uint = Uint::from_u32(0);
    let mut order = Uint::from_u32(1);
    let uint_radix = Uint::from_u32(radix);

    loop {
        let byte = bytes[index];
        if byte == b'_' {
            // A separator carries no digit; it must not lead the digits.
            assert!(index != start, "invalid digit");
            index -= 1;
            continue;
        }

        let digit = Uint::from_u32(parse_digit(byte, radix));

        // Add a digit multiplied by order.
        uint = Uint::add(&uint, &Uint::mul(&digit, &order));

        // If we reached the beginning of the digits, return the number.
        if index == start {
            return uint;
        }

        // Increase the order of magnitude.
        order = Uint::mul(&uint_radix, &order);

        // Move to the next digit.
        index -= 1;
    }
}

/// Parse a number from a hex string.
///
/// This implementation performs faster than [`from_str_radix`], since it
/// assumes the radix is already `16` and packs four bits per digit; `_`
/// digit separators are skipped.
///
/// If the string number is shorter than [`Uint`] can store, returns a
/// [`Uint`] with leading zeroes.
///
/// # Panics
///
/// * If hex encoded number is too large to fit in [`Uint`].
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub const fn from_str_hex<const LIMBS: usize>(s: &str) -> Uint<LIMBS> {
    let bytes = s.as_bytes();
    assert!(!bytes.is_empty(), "empty string");

    // The lowest order number is at the end of the string.
    // Begin parsing from the last index of the string.
    let mut index = bytes.len() - 1;

    // The lowest order limb is at the beginning of the `num` array.
    // Begin indexing from `0`.
    let mut num = [0; LIMBS];
    let mut num_index = 0;

    let digit_radix = 16;
    let digit_size = 4; // Size of a hex digit in bits (2^4 = 16).
    let digits_in_limb = Limb::BITS / digit_size;

    loop {
        let byte = bytes[index];
        if byte != b'_' {
            let digit = parse_digit(byte, digit_radix) as Limb;

            let limb_index = (num_index / digits_in_limb) as usize;
            assert!(limb_index < num.len(), "hex number is too large");

            // Since a base-16 digit can be represented with the same bits,
            // we can copy these bits.
            num[limb_index] |=
                digit << ((num_index % digits_in_limb) * digit_size);
            num_index += 1;
        }

        // If we reached the beginning of the string, return the number.
        if index == 0 {
            return Uint::new(num);
        }

        // Move to the next digit.
        index -= 1;
    }
}

// Try to parse a digit from utf-8 byte.
pub(crate) const fn parse_digit(utf8_digit: u8, digit_radix: u32) -> u32 {
    let ch = parse_utf8_byte(utf8_digit);
    match ch.to_digit(digit_radix) {
        None => {
            panic!("invalid digit");
        }
        Some(digit) => digit,
    }
}

/// Parse a single UTF-8 byte into a char.
///
/// Converts bytes to characters during compile-time string evaluation.
/// Only handles ASCII bytes (0x00-0x7F).
///
/// # Panics
///
/// * If the byte is non-ASCII (>= 0x80).
pub(crate) const fn parse_utf8_byte(byte: u8) -> char {
    match byte {
        0x00..=0x7F => byte as char,
        _ => panic!("non-ASCII character found"),
    }
}

/// This macro converts a string base-10 number to a big integer.
#[macro_export]
macro_rules! from_num {
    ($num:literal) => {
        $crate::arithmetic::uint::from_str_radix($num, 10)
    };
}

/// This macro converts a string hex number to a big integer.
#[macro_export]
macro_rules! from_hex {
    ($num:literal) => {
        $crate::arithmetic::uint::from_str_hex($num)
    };
}

// ----------- Wide division -----------

/// Integer that uses twice more limbs than `Uint` for the same `N`
/// parameter.
///
/// Serves as the double-width dividend of the long division and as the
/// product container of [`Uint::muldiv`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct WideUint<const N: usize> {
    low: Uint<N>,
    high: Uint<N>,
}

/// Scratch dividend of the division loop: `2N + 1` little-endian limbs.
struct Dividend<const N: usize> {
    lo: Limbs<N>,
    hi: Limbs<N>,
    top: Limb,
}

impl<const N: usize> Dividend<N> {
    const fn get(&self, i: usize) -> Limb {
        if i < N {
            self.lo[i]
        } else if i < 2 * N {
            self.hi[i - N]
        } else {
            self.top
        }
    }

    const fn set(&mut self, i: usize, value: Limb) {
        if i < N {
            self.lo[i] = value;
        } else if i < 2 * N {
            self.hi[i - N] = value;
        } else {
            self.top = value;
        }
    }
}

impl<const N: usize> WideUint<N> {
    /// Construct new [`WideUint`] from `low` and `high` parts.
    #[must_use]
    pub const fn new(low: Uint<N>, high: Uint<N>) -> Self {
        Self { low, high }
    }

    /// Returns the low half of `self` (constant).
    #[must_use]
    pub const fn low(&self) -> &Uint<N> {
        &self.low
    }

    /// Returns the high half of `self` (constant).
    #[must_use]
    pub const fn high(&self) -> &Uint<N> {
        &self.high
    }

    /// Divide `self` by `divisor`, returning the quotient and the remainder
    /// (constant).
    ///
    /// Knuth's Algorithm D over 64-bit limbs, with the quotient digit
    /// estimated from the top two dividend limbs divided by the top divisor
    /// limb and corrected at most twice.
    ///
    /// The quotient only fits `N` limbs when `self.high() < divisor`; when
    /// the caller violates that precondition the all-ones sentinel is
    /// returned for both values.
    ///
    /// # Panics
    ///
    /// * If `divisor` is zero, like the host primitive division.
    #[must_use]
    pub const fn div_rem(&self, divisor: &Uint<N>) -> (Uint<N>, Uint<N>) {
        self.div_rem_inner(divisor, true)
    }

    /// Divide `self` by `divisor`, returning the quotient only and skipping
    /// the remainder denormalization (constant).
    ///
    /// # Panics
    ///
    /// * If `divisor` is zero, like the host primitive division.
    #[must_use]
    pub const fn div(&self, divisor: &Uint<N>) -> Uint<N> {
        self.div_rem_inner(divisor, false).0
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_lossless)]
    const fn div_rem_inner(
        &self,
        divisor: &Uint<N>,
        want_remainder: bool,
    ) -> (Uint<N>, Uint<N>) {
        assert!(!divisor.is_zero(), "attempt to divide by zero");

        // The quotient would not fit `N` limbs.
        if !self.high.lt(divisor) {
            return (Uint::MAX, Uint::MAX);
        }

        // Number of significant divisor limbs.
        let mut n = N;
        while n > 1 && divisor.limbs[n - 1] == 0 {
            n -= 1;
        }

        if n == 1 {
            // Single-limb divisor: column-wise short division. The high
            // half contributes only its low limb, `high < divisor`.
            let d = divisor.limbs[0];
            let mut quotient = Uint::ZERO;
            let mut rem = self.high.limbs[0];
            const_rev_for!((i in 0..N) {
                (quotient.limbs[i], rem) =
                    limb::div2by1(rem, self.low.limbs[i], d);
            });

            let mut remainder = Uint::ZERO;
            remainder.limbs[0] = rem;
            return (quotient, remainder);
        }

        // D1: normalize so the top divisor limb has its high bit set.
        let s = divisor.limbs[n - 1].leading_zeros();
        let v = divisor.shl(s);

        let mut u = Dividend { lo: [0; N], hi: [0; N], top: 0 };
        const_for!((i in 0..N) {
            let lower = if i == 0 { 0 } else { self.low.limbs[i - 1] };
            u.lo[i] = limb::shl2(self.low.limbs[i], lower, s);
        });
        const_for!((i in 0..N) {
            let lower =
                if i == 0 { self.low.limbs[N - 1] } else { self.high.limbs[i - 1] };
            u.hi[i] = limb::shl2(self.high.limbs[i], lower, s);
        });
        if s != 0 {
            u.top = self.high.limbs[N - 1] >> (Limb::BITS - s);
        }

        let vn1 = v.limbs[n - 1];
        let vn2 = v.limbs[n - 2];
        let mut quotient = Uint::ZERO;
        let m = 2 * N - n;

        // D2..D7: produce one quotient limb per step, from the most
        // significant down.
        const_rev_for!((j in 0..{m + 1}) {
            // D3: estimate the quotient limb from the top two dividend
            // limbs over the top divisor limb.
            let numerator = ((u.get(j + n) as WideLimb) << Limb::BITS)
                | (u.get(j + n - 1) as WideLimb);
            let mut qhat = numerator / (vn1 as WideLimb);
            let mut rhat = numerator % (vn1 as WideLimb);

            // The estimate is at most two too large; test against the
            // second divisor limb and fix it up.
            loop {
                if (qhat >> Limb::BITS) != 0
                    || qhat * (vn2 as WideLimb)
                        > ((rhat << Limb::BITS)
                            | (u.get(j + n - 2) as WideLimb))
                {
                    qhat -= 1;
                    rhat += vn1 as WideLimb;
                    if (rhat >> Limb::BITS) == 0 {
                        continue;
                    }
                }
                break;
            }

            // D4: multiply and subtract `qhat * v` from the dividend slice.
            let mut qword = qhat as Limb;
            let mut mul_carry = 0;
            let mut borrow = false;
            const_for!((i in 0..n) {
                let (p, c) = limb::mul_wide(qword, v.limbs[i], mul_carry);
                mul_carry = c;
                let (d, b) = limb::sbb(u.get(j + i), p, borrow);
                u.set(j + i, d);
                borrow = b;
            });
            let (d, b) = limb::sbb(u.get(j + n), mul_carry, borrow);
            u.set(j + n, d);

            // D5/D6: the estimate was one too large after all; add the
            // divisor back.
            if b {
                qword -= 1;
                let mut carry = false;
                const_for!((i in 0..n) {
                    let (a, c) = limb::adc(u.get(j + i), v.limbs[i], carry);
                    u.set(j + i, a);
                    carry = c;
                });
                let (a, _) = limb::adc(u.get(j + n), 0, carry);
                u.set(j + n, a);
            }

            // Quotient limbs above `N` are zero, guaranteed by the
            // precondition.
            if j < N {
                quotient.limbs[j] = qword;
            }
        });

        // D8: denormalize the remainder.
        let mut remainder = Uint::ZERO;
        if want_remainder {
            const_for!((i in 0..n) {
                remainder.limbs[i] = limb::shr2(u.get(i + 1), u.get(i), s);
            });
        }

        (quotient, remainder)
    }
}

/// Schoolbook product of the `len`-limb windows `a[a_off..]` and
/// `b[b_off..]`, written into the low `2 * len` limbs of the result.
const fn mul_part<const N: usize>(
    a: &Limbs<N>,
    a_off: usize,
    b: &Limbs<N>,
    b_off: usize,
    len: usize,
) -> Limbs<N> {
    let mut acc = [0; N];
    let mut i = 0;
    while i < len {
        let mut carry = 0;
        let mut j = 0;
        while j < len {
            (acc[i + j], carry) =
                limb::carrying_mac(acc[i + j], a[a_off + i], b[b_off + j], carry);
            j += 1;
        }
        acc[i + len] = carry;
        i += 1;
    }
    acc
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    macro_rules! test_uxxx_default {
        ($($type:ident),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<default_ $type:lower>]() {
                        let uint = $type::default();
                        assert_eq!(uint, $type::ZERO);
                    }
                }
            )*
        };
    }

    test_uxxx_default! {
        U64,
        U128,
        U256,
        U512,
    }

    #[test]
    fn convert_from_str_radix() {
        let uint_from_base10: Uint<4> = from_str_radix(
            "28948022309329048855892746252171976963363056481941647379679742748393362948097",
            10,
        );
        #[allow(clippy::unreadable_literal)]
        let expected = Uint::<4>::new([
            10108024940646105089u64,
            2469829653919213789u64,
            0u64,
            4611686018427387904u64,
        ]);
        assert_eq!(uint_from_base10, expected);

        let uint_from_base10: Uint<1> =
            from_str_radix("18446744069414584321", 10);
        let uint_from_binary: Uint<1> = from_str_radix(
            "1111111111111111111111111111111100000000000000000000000000000001",
            2,
        );
        assert_eq!(uint_from_base10, uint_from_binary);

        let uint_from_base8: Uint<1> = from_str_radix("777", 8);
        assert_eq!(uint_from_base8, Uint::<1>::from_u32(0o777));

        let uint_from_macro: Uint<4> = from_num!("375923422");
        assert_eq!(uint_from_macro, Uint::<4>::from_u64(375_923_422));
    }

    #[test]
    fn from_str_radix_skips_separators() {
        let plain: Uint<2> = from_str_radix("123456789", 10);
        let grouped: Uint<2> = from_str_radix("123_456_789", 10);
        assert_eq!(plain, grouped);

        let hex_plain: Uint<2> = from_str_hex("f473e8e5f6e812c3fde4523b51b6d251");
        let hex_grouped: Uint<2> =
            from_str_hex("f473e8e5_f6e812c3_fde4523b_51b6d251");
        assert_eq!(hex_plain, hex_grouped);
    }

    #[test]
    fn convert_from_str_hex() {
        // Test different implementations of hex parsing on random hex inputs.
        proptest!(|(hex in "[0-9a-fA-F]{1,64}")| {
            let uint_from_hex: Uint<4> = from_str_hex(&hex);
            let expected: Uint<4> = from_str_radix(&hex, 16);
            prop_assert_eq!(uint_from_hex, expected);
        });
    }

    #[test]
    #[should_panic = "hex number is too large"]
    fn from_str_hex_should_panic_on_overflow() {
        let _ = from_str_hex::<4>(
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff0",
        );
    }

    #[test]
    fn parse_and_display_hex() {
        // Test parsing from upper hex against displaying in upper hex.
        proptest!(|(upper_hex in "[0-9A-F]{64}")| {
            let uint_from_hex: Uint<4> = from_str_hex(&upper_hex);
            let hex_from_uint = format!("{uint_from_hex:X}");
            prop_assert_eq!(hex_from_uint, upper_hex);
        });
    }

    #[test]
    fn literal_round_trip() {
        let literal = "af5705a4_89525e79_a5120c42_daebbc57_d55f0277_53a05970_9fee8a5d_41e2ae79";
        let parsed: U256 = from_str_hex(literal);
        let serialized = format!("{parsed:X}");
        let reparsed: U256 = from_str_hex(&serialized);
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn constant_folding() {
        const X: U256 = from_hex!(
            "af5705a4_89525e79_a5120c42_daebbc57_d55f0277_53a05970_9fee8a5d_41e2ae79"
        );
        const Y: U256 = X.wrapping_add(&U256::ONE);
        const Z: U256 = Y.wrapping_sub(&U256::ONE);
        const Q: U256 = Uint::div(&X, &U256::ONE);
        const P: U256 = X.wrapping_mul(&U256::ONE);
        const A: U256 = Uint::bitand(&X, &Uint::not(&X));
        const TOP: U256 = U256::ONE.shl(255);

        assert_eq!(Z, X);
        assert_eq!(Q, X);
        assert_eq!(P, X);
        assert_eq!(A, U256::ZERO);
        assert_eq!(TOP, U256::new([0, 0, 0, 0x8000_0000_0000_0000]));
    }

    #[test]
    fn ge_le_gt_lt_eq_ne() {
        let a: Uint<6> = Uint::new([0, 0, 0, 0, 0, 5]);
        let b: Uint<6> = Uint::new([4, 0, 0, 0, 0, 0]);
        assert!(a.ge(&b));
        assert!(a.gt(&b));
        assert!(!a.le(&b));
        assert!(!a.lt(&b));
        assert!(!a.eq(&b));
        assert!(a.ne(&b));

        let a: Uint<6> = Uint::new([0, 0, 0, 0, 0, 5]);
        let b: Uint<6> = Uint::new([0, 0, 0, 0, 0, 6]);
        assert!(!a.ge(&b));
        assert!(!a.gt(&b));
        assert!(a.le(&b));
        assert!(a.lt(&b));
        assert!(!a.eq(&b));
        assert!(a.ne(&b));

        let a: Uint<4> = Uint::new([0, 0, 1, 2]);
        let b: Uint<4> = Uint::new([0, 0, 1, 2]);
        assert!(a.ge(&b));
        assert!(!a.gt(&b));
        assert!(a.le(&b));
        assert!(!a.lt(&b));
        assert!(a.eq(&b));
        assert!(!a.ne(&b));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(Uint::<4>::ZERO.leading_zeros(), 256);
        assert_eq!(Uint::<4>::ONE.leading_zeros(), 255);
        assert_eq!(Uint::<4>::MAX.leading_zeros(), 0);
        assert_eq!(Uint::<4>::new([0, 1, 0, 0]).leading_zeros(), 191);
    }

    #[test]
    fn num_bits() {
        let words: [Limb; 4] = [0b1100, 0, 0, 0];
        let num = Uint::<4>::new(words);
        assert_eq!(num.num_bits(), 4);

        let words: [Limb; 4] = [0, 0b1100, 0, 0];
        let num = Uint::<4>::new(words);
        assert_eq!(num.num_bits(), 64 + 4);

        let words: [Limb; 4] = [0b11, 0b11, 0b11, 0b11];
        let num = Uint::<4>::new(words);
        assert_eq!(num.num_bits(), 64 + 64 + 64 + 2);

        assert_eq!(Uint::<4>::ZERO.num_bits(), 0);
    }

    #[test]
    fn shl() {
        // The first limb is the lowest order part of the number.
        let num = Uint::<4>::new([0b1100000000, 0, 0, 0]);

        let expected = Uint::<4>::new([0, 0b11000000, 0, 0]);
        assert_eq!(num << 62, expected);

        let expected = Uint::<4>::new([0, 0, 0b110000, 0]);
        assert_eq!(num << (60 + 64), expected);

        let expected = Uint::<4>::new([0, 0, 0, 0b1100]);
        assert_eq!(num << (58 + 64 + 64), expected);

        // edge case to make shift the number into all zeroes
        let expected = Uint::<4>::new([0, 0, 0, 0]);
        assert_eq!(num << (56 + 64 + 64 + 64), expected);
    }

    #[test]
    fn shr() {
        // The last limb is the highest order part of the number.
        let num = Uint::<4>::new([0, 0, 0, 0b11]);

        let expected = Uint::<4>::new([0, 0, 0b1100, 0]);
        assert_eq!(num >> 62, expected);

        let expected = Uint::<4>::new([0, 0b110000, 0, 0]);
        assert_eq!(num >> (60 + 64), expected);

        let expected = Uint::<4>::new([0b11000000, 0, 0, 0]);
        assert_eq!(num >> (58 + 64 + 64), expected);

        // edge case to make shift the number into all zeroes
        let expected = Uint::<4>::new([0, 0, 0, 0]);
        assert_eq!(num >> (2 + 64 + 64 + 64), expected);
    }

    #[test]
    fn shift_by_width_or_more_is_zero() {
        let num = Uint::<2>::MAX;
        assert_eq!(num << 128, Uint::<2>::ZERO);
        assert_eq!(num >> 128, Uint::<2>::ZERO);
        assert_eq!(num << 1000, Uint::<2>::ZERO);
        assert_eq!(num >> 1000, Uint::<2>::ZERO);
    }

    #[test]
    fn shift_full_width_edges() {
        // (2^128 - 1) << 127 leaves only the top bit.
        let ones = Uint::<2>::MAX;
        assert_eq!(ones << 127, Uint::<2>::new([0, 0x8000_0000_0000_0000]));
        // (2^128 - 1) >> 127 leaves only the bottom bit.
        assert_eq!(ones >> 127, Uint::<2>::ONE);
    }

    #[test]
    fn shr_shl_edge_case() {
        let num = Uint::<4>::ONE;
        assert_eq!(num >> 0, num);
        assert_eq!(num << 0, num);

        let num = Uint::<4>::new([
            0xffffffffffffffff,
            0xffffffffffffffff,
            0,
            0xffffffffffffffff,
        ]);

        assert_eq!(
            num >> 64,
            Uint::<4>::new([0xffffffffffffffff, 0, 0xffffffffffffffff, 0])
        );

        assert_eq!(
            num << 64,
            Uint::<4>::new([0, 0xffffffffffffffff, 0xffffffffffffffff, 0])
        );
    }

    #[test]
    fn checked_add() {
        let a = Uint::<2>::from_u128(100);
        let b = Uint::<2>::from_u128(50);
        let (result, overflow) = a.checked_add(&b);

        assert_eq!(result, Uint::<2>::from_u128(150));
        assert!(!overflow, "Addition should not overflow");

        let max = Uint::<2>::MAX;
        let one = Uint::<2>::from_u64(1);
        let (result_overflow, overflow_flag) = max.checked_add(&one);

        assert_eq!(result_overflow, Uint::<2>::ZERO);
        assert!(overflow_flag, "MAX + 1 should overflow");
    }

    #[test]
    fn checked_add_assign_and_sub_assign_match() {
        let a = Uint::<2>::from_u128(12345);
        let b = Uint::<2>::from_u128(67890);

        let (result_const, overflow_const) = a.checked_add(&b);
        let mut a_mut = a;
        let overflow_assign = a_mut.checked_add_assign(&b);
        assert_eq!(result_const, a_mut);
        assert_eq!(overflow_const, overflow_assign);

        let (result_const, overflow_const) = a.checked_sub(&b);
        let mut a_mut = a;
        let overflow_assign = a_mut.checked_sub_assign(&b);
        assert_eq!(result_const, a_mut);
        assert_eq!(overflow_const, overflow_assign);
    }

    #[test]
    fn wrapping_sub_wraps() {
        let zero = Uint::<2>::ZERO;
        let one = Uint::<2>::ONE;
        assert_eq!(zero.wrapping_sub(&one), Uint::<2>::MAX);

        let (diff, borrow) = zero.checked_sub(&one);
        assert_eq!(diff, Uint::<2>::MAX);
        assert!(borrow);
    }

    #[test]
    fn wrapping_neg_known_values() {
        let x: U128 = from_hex!("f473e8e5_f6e812c3_fde4523b_51b6d251");
        let expected: U128 = from_hex!("0b8c1719_0917ed3c_021badc4_ae492daf");
        assert_eq!(x.wrapping_neg(), expected);
        assert_eq!(x.wrapping_neg().wrapping_neg(), x);
        assert_eq!(U128::ZERO.wrapping_neg(), U128::ZERO);
    }

    #[test]
    fn increment_known_value() {
        let mut x: U128 = from_hex!("f473e8e5_f6e812c3_fde4523b_51b6d251");
        x += U128::ONE;
        let expected: U128 = from_hex!("f473e8e5_f6e812c3_fde4523b_51b6d252");
        assert_eq!(x, expected);
    }

    #[test]
    fn widening_mul_against_native() {
        proptest!(|(a: u64, b: u64)| {
            let (lo, hi) = Uint::<1>::new([a]).widening_mul(&Uint::<1>::new([b]));
            let expected = a as u128 * b as u128;
            prop_assert_eq!(lo.limbs[0], expected as u64);
            prop_assert_eq!(hi.limbs[0], (expected >> 64) as u64);
        });
    }

    #[test]
    fn karatsuba_matches_classic() {
        proptest!(|(a: [u64; 4], b: [u64; 4])| {
            let a = Uint::<4>::new(a);
            let b = Uint::<4>::new(b);
            prop_assert_eq!(
                a.widening_mul_classic(&b),
                a.widening_mul_karatsuba(&b)
            );
        });

        proptest!(|(a: [u64; 8], b: [u64; 8])| {
            let a = Uint::<8>::new(a);
            let b = Uint::<8>::new(b);
            prop_assert_eq!(
                a.widening_mul_classic(&b),
                a.widening_mul_karatsuba(&b)
            );
        });
    }

    #[test]
    fn karatsuba_edge_values() {
        for a in [Uint::<4>::ZERO, Uint::<4>::ONE, Uint::<4>::MAX] {
            for b in [Uint::<4>::ZERO, Uint::<4>::ONE, Uint::<4>::MAX] {
                assert_eq!(
                    a.widening_mul_classic(&b),
                    a.widening_mul_karatsuba(&b)
                );
            }
        }

        // Half sums overflowing on both sides.
        let a = Uint::<4>::new([u64::MAX, u64::MAX, u64::MAX, 1]);
        let b = Uint::<4>::new([1, u64::MAX, u64::MAX, u64::MAX]);
        assert_eq!(a.widening_mul_classic(&b), a.widening_mul_karatsuba(&b));
    }

    #[test]
    fn mul_wraps() {
        let a = Uint::<2>::MAX;
        let b = Uint::<2>::from_u64(2);
        assert_eq!(a * b, Uint::<2>::MAX.wrapping_sub(&Uint::<2>::ONE));

        let (low, overflow) = a.checked_mul(&b);
        assert_eq!(low, a * b);
        assert!(overflow);
    }

    #[test]
    #[should_panic = "overflow on multiplication"]
    fn strict_mul_panics_on_overflow() {
        let _ = Uint::<2>::MAX.mul(&Uint::<2>::from_u64(2));
    }

    #[test]
    fn div_rem_known_values() {
        let x: U128 = from_hex!("f473e8e5_f6e812c3_fde4523b_51b6d251");

        assert_eq!(x / x, U128::ONE);
        assert_eq!(x % x, U128::ZERO);
        assert_eq!(x % U128::ONE, U128::ZERO);

        let ones = U128::MAX;
        let two = U128::from_u64(2);
        let (q, r) = ones.div_rem(&two);
        assert_eq!(q, ones >> 1);
        assert_eq!(r, U128::ONE);
    }

    #[test]
    fn div_rem_single_limb_divisor() {
        let a = Uint::<4>::new([5, 0, 0, 7]);
        let d = Uint::<4>::from_u64(3);
        let (q, r) = a.div_rem(&d);
        assert_eq!(q.wrapping_mul(&d).wrapping_add(&r), a);
        assert!(r.lt(&d));
    }

    #[test]
    fn div_rem_round_trip() {
        proptest!(|(a: [u64; 4], b: [u64; 4])| {
            let a = Uint::<4>::new(a);
            let b = Uint::<4>::new(b);
            prop_assume!(!b.is_zero());

            let (q, r) = a.div_rem(&b);
            prop_assert!(r.lt(&b));
            prop_assert_eq!(q.wrapping_mul(&b).wrapping_add(&r), a);
        });
    }

    #[test]
    fn div_rem_small_divisors() {
        // Divisors spanning one to four significant limbs.
        proptest!(|(a: [u64; 4], b: u64, limbs in 1usize..=4)| {
            let a = Uint::<4>::new(a);
            let mut d = Uint::<4>::ZERO;
            d.limbs[limbs - 1] = b;
            prop_assume!(!d.is_zero());

            let (q, r) = a.div_rem(&d);
            prop_assert!(r.lt(&d));
            prop_assert_eq!(q.wrapping_mul(&d).wrapping_add(&r), a);
        });
    }

    #[test]
    #[should_panic = "attempt to divide by zero"]
    fn div_by_zero_panics() {
        let _ = Uint::<2>::ONE / Uint::<2>::ZERO;
    }

    #[test]
    #[should_panic = "attempt to divide by zero"]
    fn rem_by_zero_panics() {
        let _ = Uint::<2>::ONE % Uint::<2>::ZERO;
    }

    #[test]
    fn checked_div_rem() {
        let a = Uint::<2>::from_u64(7);
        let b = Uint::<2>::from_u64(2);
        assert_eq!(a.checked_div(&b), Some(Uint::<2>::from_u64(3)));
        assert_eq!(a.checked_rem(&b), Some(Uint::<2>::ONE));
        assert_eq!(a.checked_div(&Uint::<2>::ZERO), None);
        assert_eq!(a.checked_rem(&Uint::<2>::ZERO), None);
    }

    #[test]
    fn wide_div_rem() {
        // (high:low) / divisor with a non-zero high part.
        let low = Uint::<2>::from_u128(0xdead_beef_cafe_babe);
        let high = Uint::<2>::from_u64(7);
        let divisor = Uint::<2>::from_u64(11);
        let (q, r) = WideUint::new(low, high).div_rem(&divisor);

        // Cross-check through the product.
        let (back_lo, back_hi) = q.widening_mul(&divisor);
        let (back_lo, carry) = back_lo.checked_add(&r);
        let back_hi = if carry {
            back_hi.wrapping_add(&Uint::ONE)
        } else {
            back_hi
        };
        assert_eq!(back_lo, low);
        assert_eq!(back_hi, high);
        assert!(r.lt(&divisor));
    }

    #[test]
    fn wide_div_sentinel_on_overflow() {
        // high >= divisor: the quotient cannot fit, all-ones is returned.
        let wide = WideUint::new(Uint::<2>::ZERO, Uint::<2>::from_u64(2));
        let (q, r) = wide.div_rem(&Uint::<2>::ONE);
        assert_eq!(q, Uint::<2>::MAX);
        assert_eq!(r, Uint::<2>::MAX);
    }

    #[test]
    fn muldiv_known_value() {
        let x: U128 = from_hex!("f473e8e5_f6e812c3_fde4523b_51b6d251");
        assert_eq!(x.muldiv(&x, &x), x);
    }

    #[test]
    fn muldiv_avoids_intermediate_overflow() {
        // (MAX * 2) / 2 = MAX, even though the product overflows the width.
        let max = Uint::<2>::MAX;
        let two = Uint::<2>::from_u64(2);
        assert_eq!(max.muldiv(&two, &two), max);

        // Quotient overflow yields the sentinel.
        assert_eq!(max.muldiv(&max, &Uint::ONE), Uint::<2>::MAX);
    }

    #[test]
    fn native_equivalence_u128() {
        proptest!(|(a: u128, b: u128)| {
            let ua = Uint::<2>::from_u128(a);
            let ub = Uint::<2>::from_u128(b);

            prop_assert_eq!(ua.wrapping_add(&ub).into_u128(), a.wrapping_add(b));
            prop_assert_eq!(ua.wrapping_sub(&ub).into_u128(), a.wrapping_sub(b));
            prop_assert_eq!(ua.wrapping_mul(&ub).into_u128(), a.wrapping_mul(b));
            prop_assert_eq!(ua.wrapping_neg().into_u128(), a.wrapping_neg());
            prop_assert_eq!((ua & ub).into_u128(), a & b);
            prop_assert_eq!((ua | ub).into_u128(), a | b);
            prop_assert_eq!((ua ^ ub).into_u128(), a ^ b);
            prop_assert_eq!((!ua).into_u128(), !a);
            prop_assert_eq!(ua.cmp(&ub), a.cmp(&b));
            prop_assert_eq!(ua.leading_zeros(), a.leading_zeros());

            if b != 0 {
                prop_assert_eq!((ua / ub).into_u128(), a / b);
                prop_assert_eq!((ua % ub).into_u128(), a % b);
            }
        });
    }

    #[test]
    fn native_equivalence_u128_shifts() {
        proptest!(|(a: u128, s in 0u32..128)| {
            let ua = Uint::<2>::from_u128(a);
            prop_assert_eq!((ua << s).into_u128(), a << s);
            prop_assert_eq!((ua >> s).into_u128(), a >> s);
        });
    }

    #[test]
    fn ring_laws() {
        proptest!(|(a: [u64; 4], b: [u64; 4], c: [u64; 4])| {
            let a = Uint::<4>::new(a);
            let b = Uint::<4>::new(b);
            let c = Uint::<4>::new(c);

            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!((a + b) + c, a + (b + c));
            prop_assert_eq!(a * b, b * a);
            prop_assert_eq!(a * (b + c), a * b + a * c);
            prop_assert_eq!(a + Uint::ZERO, a);
            prop_assert_eq!(a * Uint::ONE, a);

            // Subtraction is addition of the two's complement.
            prop_assert_eq!(a - b, a + (!b + Uint::ONE));
            prop_assert_eq!(a - a, Uint::ZERO);

            // Bitwise identities.
            prop_assert_eq!(!!a, a);
            prop_assert_eq!(a & !a, Uint::ZERO);
            prop_assert_eq!(a | !a, Uint::MAX);
            prop_assert_eq!(a ^ a, Uint::ZERO);
        });
    }

    #[test]
    fn shift_mask_identity() {
        proptest!(|(a: [u64; 4], k in 0u32..256)| {
            let a = Uint::<4>::new(a);
            // (a << k) >> k keeps the low BITS - k bits.
            let mask = if k == 0 { Uint::MAX } else { Uint::MAX >> k };
            prop_assert_eq!((a << k) >> k, a & mask);
        });
    }

    #[test]
    fn widen_narrow_round_trip() {
        proptest!(|(limbs: [u64; 2])| {
            let a = Uint::<2>::new(limbs);
            let wide: Uint<4> = a.widen();
            prop_assert_eq!(wide.truncate::<2>(), a);
            prop_assert_eq!(wide.num_bits(), a.num_bits());
        });
    }

    #[test]
    fn truncate_keeps_low_limbs() {
        let a = Uint::<4>::new([1, 2, 3, 4]);
        assert_eq!(a.truncate::<2>(), Uint::<2>::new([1, 2]));
    }

    #[test]
    fn from_uint() {
        // Check that conversion between integers with different bit size
        // works.
        proptest!(|(limbs: [u64; 4])| {
            let expected_uint = U256::new(limbs);
            let wide_uint = U512::from_uint(expected_uint);
            let uint = U256::from_uint(wide_uint);

            assert_eq!(uint, expected_uint);
        });
    }

    #[test]
    #[should_panic = "converted element is too large"]
    fn from_uint_panics_on_overflow() {
        let _ = U128::from_uint(U256::MAX);
    }

    #[test]
    fn sign_extending_constructors() {
        assert_eq!(Uint::<4>::from_i64(-1), Uint::<4>::MAX);
        assert_eq!(Uint::<4>::from_i32(-2), Uint::<4>::MAX.wrapping_sub(&Uint::ONE));
        assert_eq!(Uint::<4>::from_i64(5), Uint::<4>::from_u64(5));
        assert_eq!(
            Uint::<4>::from_i128(-1),
            Uint::<4>::MAX
        );
        assert_eq!(
            Uint::<4>::from_i128(i128::MIN),
            Uint::<4>::new([0, 0x8000_0000_0000_0000, u64::MAX, u64::MAX])
        );
    }

    #[test]
    fn from_bool_values() {
        assert_eq!(Uint::<2>::from_bool(true), Uint::<2>::ONE);
        assert_eq!(Uint::<2>::from_bool(false), Uint::<2>::ZERO);
    }

    mod primitive_conversion {
        use super::*;

        macro_rules! test_conversion {
            ($($type:ty),*) => {
                $(
                    paste::paste! {
                        #[test]
                        fn $type() {
                            proptest!(|(expected_primitive_num: $type)| {
                                let num: U256 = expected_primitive_num.into();
                                let primitive_num: $type = num.into();
                                assert_eq!(expected_primitive_num, primitive_num);
                            });
                        }
                    }
                )*
            };
        }

        test_conversion!(u8, u16, u32, u64, u128, usize);
    }

    #[test]
    #[should_panic = "Uint value is too large to fit"]
    fn into_primitive_panics_on_too_large_uint() {
        let x = Uint::<1>::new([u64::MAX]);
        _ = x.into_u32();
    }

    #[test]
    fn bytes_le_round_trip() {
        proptest!(|(limbs: [u64; 4])| {
            let a = Uint::<4>::new(limbs);
            let bytes = a.into_bytes_le();
            prop_assert_eq!(bytes.len(), Uint::<4>::BYTES);
            prop_assert_eq!(Uint::<4>::from_le_slice(&bytes), a);
        });
    }

    #[test]
    #[should_panic = "bytes are not the expected size"]
    fn from_le_slice_panics_on_unexpected_byte_length() {
        let bytes = &[];
        _ = Uint::<1>::from_le_slice(bytes);
    }

    #[test]
    fn display_uint() {
        let x = Uint::<4>::new([0xf, 1, 0, u64::MAX]);
        assert_eq!(
            "FFFFFFFFFFFFFFFF00000000000000000000000000000001000000000000000F",
            format!("{x}")
        );
    }

    #[test]
    fn debug_uint() {
        let x = Uint::<4>::new([0xf, 1, 0, u64::MAX]);
        assert_eq!(
            "FFFFFFFFFFFFFFFF00000000000000000000000000000001000000000000000F",
            format!("{x:?}")
        );
    }

    #[test]
    #[should_panic = "non-ASCII character found"]
    fn parse_utf8_byte_panics_for_invalid_ascii_byte() {
        _ = parse_utf8_byte(0x80);
    }

    #[test]
    #[should_panic = "invalid digit"]
    fn parse_digit_panics_for_invalid_digit() {
        _ = parse_digit(0xf, 10);
    }

    #[test]
    fn parity_and_bits() {
        assert!(Uint::<2>::ONE.is_odd());
        assert!(!Uint::<2>::ONE.is_even());
        assert!(Uint::<2>::ZERO.is_even());
        assert!(Uint::<2>::MAX.is_odd());

        let a: Uint<4> = Uint::new([2, 0, 0, 1]);
        assert!(a.get_bit(1));
        assert!(!a.get_bit(0));
        assert!(a.get_bit(192));
        assert!(!a.get_bit(256));
    }

    #[test]
    fn randomized_native_corpus() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..100_000 {
            let a: u128 = rng.gen();
            let b: u128 = rng.gen();
            let ua = Uint::<2>::from_u128(a);
            let ub = Uint::<2>::from_u128(b);

            assert_eq!(ua.wrapping_add(&ub).into_u128(), a.wrapping_add(b));
            assert_eq!(ua.wrapping_sub(&ub).into_u128(), a.wrapping_sub(b));
            assert_eq!(ua.wrapping_mul(&ub).into_u128(), a.wrapping_mul(b));
            if b != 0 {
                let (q, r) = ua.div_rem(&ub);
                assert_eq!(q.into_u128(), a / b);
                assert_eq!(r.into_u128(), a % b);
            }
        }
    }

    #[test]
    fn num_traits_integration() {
        assert_eq!(<Uint<2> as Zero>::zero(), Uint::<2>::ZERO);
        assert!(<Uint<2> as Zero>::is_zero(&Uint::<2>::ZERO));
        assert_eq!(<Uint<2> as One>::one(), Uint::<2>::ONE);
        assert_eq!(<Uint<2> as ConstZero>::ZERO, Uint::<2>::ZERO);
        assert_eq!(<Uint<2> as ConstOne>::ONE, Uint::<2>::ONE);
    }
}
