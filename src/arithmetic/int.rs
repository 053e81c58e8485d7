//! This module contains the [`Int`] signed big integer together with its
//! exact instantiations [`I128`] for 128 bits, [`I256`] for 256 bits, and
//! so on.
//!
//! [`Int`] is a thin two's-complement overlay on [`Uint`]: the storage and
//! the add/sub/mul bit patterns are identical, only comparison, division,
//! negation and the right shift are sign-aware.

use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display, Result, UpperHex},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
        BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem,
        RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
};

use num_traits::{ConstOne, ConstZero, One, Zero};
use zeroize::Zeroize;

use crate::{
    arithmetic::{
        limb,
        limb::{Limb, Limbs},
        uint,
        uint::Uint,
    },
};

/// Stack-allocated big signed integer in two's-complement form.
///
/// Generic over number `N` of [`Limb`]s; the sign is the most significant
/// bit of the most significant limb. Arithmetic wraps like the primitive
/// signed types.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct Int<const N: usize> {
    pub(crate) repr: Uint<N>,
}

impl<const N: usize> Default for Int<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Declare [`Int`] types for different bit sizes.
macro_rules! declare_inum {
    ($num:ident, $bits:expr) => {
        #[doc = "Signed integer with "]
        #[doc = stringify!($bits)]
        #[doc = "bits size."]
        pub type $num = $crate::arithmetic::int::Int<
            { usize::div_ceil($bits, $crate::arithmetic::Limb::BITS as usize) },
        >;
    };
}

declare_inum!(I128, 128);
declare_inum!(I256, 256);
declare_inum!(I512, 512);

impl<const N: usize> Int<N> {
    /// Width of the integer in bits.
    pub const BITS: usize = Uint::<N>::BITS;
    /// The maximum value, `2^(BITS - 1) - 1`.
    pub const MAX: Self = {
        let mut repr = Uint::MAX;
        repr.limbs[N - 1] = Limb::MAX >> 1;
        Self { repr }
    };
    /// The minimum value, `-2^(BITS - 1)`.
    pub const MIN: Self = {
        let mut repr = Uint::ZERO;
        repr.limbs[N - 1] = 1 << (Limb::BITS - 1);
        Self { repr }
    };
    /// The value `-1`, the all-ones pattern.
    pub const MINUS_ONE: Self = Self { repr: Uint::MAX };
    /// The value `1`.
    pub const ONE: Self = Self { repr: Uint::ONE };
    /// The value `0`.
    pub const ZERO: Self = Self { repr: Uint::ZERO };

    /// Create a new [`Int`] from the provided `limbs` (constant).
    #[must_use]
    pub const fn new(limbs: Limbs<N>) -> Self {
        Self { repr: Uint::new(limbs) }
    }

    /// Reinterpret the bits of a same-width unsigned integer (constant).
    #[must_use]
    pub const fn from_bits(value: Uint<N>) -> Self {
        Self { repr: value }
    }

    /// Returns the underlying unsigned bit pattern (constant).
    #[must_use]
    pub const fn to_bits(self) -> Uint<N> {
        self.repr
    }

    /// Returns true if the sign bit is set (constant).
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.repr.limbs[N - 1] >> (Limb::BITS - 1) == 1
    }

    /// Checks `self` is zero (constant).
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }

    /// Checks if `self` is equal to `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn eq(&self, rhs: &Self) -> bool {
        self.repr.eq(&rhs.repr)
    }

    /// Checks if `self` is not equal to `rhs` (constant).
    #[must_use]
    #[inline(always)]
    pub const fn ne(&self, rhs: &Self) -> bool {
        !self.eq(rhs)
    }

    /// Checks `self` is less then `rhs`, sign-aware (constant).
    #[must_use]
    pub const fn lt(&self, rhs: &Self) -> bool {
        match (self.is_negative(), rhs.is_negative()) {
            (true, false) => true,
            (false, true) => false,
            // Same sign: two's-complement patterns order like unsigned.
            _ => self.repr.lt(&rhs.repr),
        }
    }

    /// Checks `self` is less or equal then `rhs`, sign-aware (constant).
    #[must_use]
    pub const fn le(&self, rhs: &Self) -> bool {
        !rhs.lt(self)
    }

    /// Checks `self` is greater then `rhs`, sign-aware (constant).
    #[must_use]
    pub const fn gt(&self, rhs: &Self) -> bool {
        rhs.lt(self)
    }

    /// Checks `self` is greater or equal then `rhs`, sign-aware (constant).
    #[must_use]
    pub const fn ge(&self, rhs: &Self) -> bool {
        !self.lt(rhs)
    }

    /// Bitwise NOT (constant).
    #[must_use]
    pub const fn not(&self) -> Self {
        Self { repr: Uint::not(&self.repr) }
    }

    /// Limb-wise AND (constant).
    #[must_use]
    pub const fn bitand(&self, rhs: &Self) -> Self {
        Self { repr: Uint::bitand(&self.repr, &rhs.repr) }
    }

    /// Limb-wise OR (constant).
    #[must_use]
    pub const fn bitor(&self, rhs: &Self) -> Self {
        Self { repr: Uint::bitor(&self.repr, &rhs.repr) }
    }

    /// Limb-wise XOR (constant).
    #[must_use]
    pub const fn bitxor(&self, rhs: &Self) -> Self {
        Self { repr: Uint::bitxor(&self.repr, &rhs.repr) }
    }

    /// Two's-complement negation, `!self + 1`; [`Int::MIN`] wraps to itself
    /// (constant).
    #[inline]
    #[must_use]
    pub const fn wrapping_neg(&self) -> Self {
        Self { repr: self.repr.wrapping_neg() }
    }

    /// The magnitude of `self` as an unsigned integer (constant).
    ///
    /// Total: the magnitude of [`Int::MIN`] is representable unsigned.
    #[must_use]
    pub const fn unsigned_abs(&self) -> Uint<N> {
        if self.is_negative() {
            self.repr.wrapping_neg()
        } else {
            self.repr
        }
    }

    /// Absolute value; [`Int::MIN`] wraps to itself (constant).
    #[must_use]
    pub const fn wrapping_abs(&self) -> Self {
        Self { repr: self.unsigned_abs() }
    }

    /// Add two numbers wrapping on overflow (constant).
    ///
    /// Bit-identical to the unsigned addition.
    #[must_use]
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        Self { repr: self.repr.wrapping_add(&rhs.repr) }
    }

    /// Subtract two numbers wrapping on overflow (constant).
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        Self { repr: self.repr.wrapping_sub(&rhs.repr) }
    }

    /// Multiply two numbers wrapping on overflow (constant).
    ///
    /// The low half of the product does not depend on the operand signs.
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        Self { repr: self.repr.wrapping_mul(&rhs.repr) }
    }

    /// Divide `self` by `rhs`, returning the quotient and the remainder
    /// (constant).
    ///
    /// The quotient truncates toward zero; the remainder takes the sign of
    /// the dividend. `MIN / -1` wraps to `MIN`.
    ///
    /// # Panics
    ///
    /// * If `rhs` is zero, like the host primitive division.
    #[must_use]
    pub const fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        let (q_mag, r_mag) = self.unsigned_abs().div_rem(&rhs.unsigned_abs());

        let quotient = if self.is_negative() != rhs.is_negative() {
            q_mag.wrapping_neg()
        } else {
            q_mag
        };
        let remainder = if self.is_negative() {
            r_mag.wrapping_neg()
        } else {
            r_mag
        };

        (Self { repr: quotient }, Self { repr: remainder })
    }

    /// Checked division; `None` when `rhs` is zero (constant).
    ///
    /// `MIN / -1` wraps like the plain division.
    #[must_use]
    pub const fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.div_rem(rhs).0)
        }
    }

    /// Checked remainder; `None` when `rhs` is zero (constant).
    #[must_use]
    pub const fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(self.div_rem(rhs).1)
        }
    }

    /// Computes `self * rhs / divisor` through the full double-width
    /// product of the magnitudes; the sign of the result is the product of
    /// the operand signs (constant).
    ///
    /// # Panics
    ///
    /// * If `divisor` is zero, like the host primitive division.
    #[must_use]
    pub const fn muldiv(&self, rhs: &Self, divisor: &Self) -> Self {
        let negative = (self.is_negative() != rhs.is_negative())
            != divisor.is_negative();
        let magnitude = self
            .unsigned_abs()
            .muldiv(&rhs.unsigned_abs(), &divisor.unsigned_abs());

        if negative {
            Self { repr: magnitude.wrapping_neg() }
        } else {
            Self { repr: magnitude }
        }
    }

    /// Shift left by `rhs` bits, zero-filling; amounts of `Self::BITS` or
    /// more yield zero (constant).
    #[must_use]
    pub const fn shl(self, rhs: u32) -> Self {
        Self { repr: self.repr.shl(rhs) }
    }

    /// Arithmetic shift right by `rhs` bits, sign-filling; amounts of
    /// `Self::BITS` or more yield zero or all-ones depending on the sign
    /// (constant).
    #[must_use]
    pub const fn shr(self, rhs: u32) -> Self {
        let fill = if self.is_negative() { Limb::MAX } else { 0 };
        if rhs as usize >= Self::BITS {
            return Self { repr: Uint::new([fill; N]) };
        }

        let limb_shift = (rhs / Limb::BITS) as usize;
        let bit_shift = rhs % Limb::BITS;
        let mut result = Uint::new([fill; N]);
        const_for!((i in 0..N) {
            let src = i + limb_shift;
            if src < N {
                // The sign extension stands in for the limbs above the top.
                let upper =
                    if src + 1 < N { self.repr.limbs[src + 1] } else { fill };
                result.limbs[i] =
                    limb::shr2(upper, self.repr.limbs[src], bit_shift);
            }
        });
        Self { repr: result }
    }

    /// Sign-extend into a wider [`Int`] (constant).
    ///
    /// # Panics
    ///
    /// * If `M` is narrower than `N`.
    #[must_use]
    pub const fn widen<const M: usize>(self) -> Int<M> {
        assert!(M >= N, "widening target must not be narrower");
        let fill = if self.is_negative() { Limb::MAX } else { 0 };
        let mut repr = Uint::<M>::new([fill; M]);
        const_for!((i in 0..N) {
            repr.limbs[i] = self.repr.limbs[i];
        });
        Int { repr }
    }

    /// Truncate to a narrower [`Int`], keeping the low limbs (constant).
    ///
    /// Narrowing is lossy by design and never fails.
    ///
    /// # Panics
    ///
    /// * If `M` is wider than `N`.
    #[must_use]
    pub const fn truncate<const M: usize>(self) -> Int<M> {
        assert!(M <= N, "truncation target must not be wider");
        Int { repr: self.repr.truncate::<M>() }
    }

    /// Create an [`Int`] from a boolean, `0` or `1` (constant).
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        Self { repr: Uint::from_bool(value) }
    }

    /// Parse a number from a string in a given radix, with an optional
    /// leading `-` (constant).
    ///
    /// Supported radixes are 2, 8, 10 and 16; `_` digit separators are
    /// skipped. A negative magnitude is applied by two's-complement
    /// negation, so `-<2^(BITS-1) magnitude>` parses to [`Int::MIN`].
    ///
    /// # Panics
    ///
    /// * If the string contains characters that are not digits of `radix`
    ///   or separators, or if the magnitude does not fit the integer width.
    #[must_use]
    pub const fn from_str_radix(s: &str, radix: u32) -> Self {
        let bytes = s.as_bytes();
        assert!(!bytes.is_empty(), "empty string");

        if bytes[0] == b'-' {
            let magnitude: Uint<N> = uint::from_bytes_radix(bytes, 1, radix);
            Self { repr: magnitude.wrapping_neg() }
        } else {
            Self { repr: uint::from_bytes_radix(bytes, 0, radix) }
        }
    }

    /// Create an `i64` integer from [`Int`] (constant).
    ///
    /// # Panics
    ///
    /// * If [`Int`] value is too large to fit into primitive integer.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn into_i64(self) -> i64 {
        let fill = if self.is_negative() { Limb::MAX } else { 0 };
        const_for!((i in 1..N) {
            assert!(self.repr.limbs[i] == fill, "Int value is too large to fit");
        });

        let value = self.repr.limbs[0] as i64;
        assert!(
            (value < 0) == self.is_negative(),
            "Int value is too large to fit"
        );
        value
    }

    /// Create an `i128` integer from [`Int`] (constant).
    ///
    /// # Panics
    ///
    /// * If [`Int`] value is too large to fit into primitive integer.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    #[allow(clippy::cast_lossless)]
    pub const fn into_i128(self) -> i128 {
        if N == 1 {
            return self.repr.limbs[0] as i64 as i128;
        }

        let fill = if self.is_negative() { Limb::MAX } else { 0 };
        const_for!((i in 2..N) {
            assert!(self.repr.limbs[i] == fill, "Int value is too large to fit");
        });

        let bits = ((self.repr.limbs[1] as u128) << Limb::BITS)
            | (self.repr.limbs[0] as u128);
        let value = bits as i128;
        assert!(
            (value < 0) == self.is_negative(),
            "Int value is too large to fit"
        );
        value
    }
}

// ----------- From Impls -----------

/// Constant conversions from primitive types, delegating to the matching
/// [`Uint`] constructor: signed sources sign-extend, unsigned ones
/// zero-extend.
macro_rules! impl_from_primitive {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> Int<N> {
            #[doc = "Create an [`Int`] from"]
            #[doc = stringify!($int)]
            #[doc = "integer (constant)."]
            #[must_use]
            pub const fn $func_name(val: $int) -> Self {
                Self { repr: Uint::<N>::$func_name(val) }
            }
        }

        impl<const N: usize> From<$int> for Int<N> {
            #[inline]
            fn from(val: $int) -> Int<N> {
                Int::<N>::$func_name(val)
            }
        }
    };
}

impl_from_primitive!(i8, from_i8);
impl_from_primitive!(i16, from_i16);
impl_from_primitive!(i32, from_i32);
impl_from_primitive!(i64, from_i64);
impl_from_primitive!(isize, from_isize);
impl_from_primitive!(i128, from_i128);
impl_from_primitive!(u8, from_u8);
impl_from_primitive!(u16, from_u16);
impl_from_primitive!(u32, from_u32);
impl_from_primitive!(u64, from_u64);
impl_from_primitive!(usize, from_usize);
impl_from_primitive!(u128, from_u128);

impl<const N: usize> From<bool> for Int<N> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl<const N: usize> From<Uint<N>> for Int<N> {
    #[inline]
    fn from(value: Uint<N>) -> Self {
        Self::from_bits(value)
    }
}

macro_rules! impl_from_int {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> From<Int<N>> for $int {
            #[inline]
            fn from(val: Int<N>) -> $int {
                val.$func_name()
            }
        }
    };
}

impl_from_int!(i64, into_i64);
impl_from_int!(i128, into_i128);

// ----------- Traits Impls -----------

impl<const N: usize> UpperHex for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        // The raw two's-complement pattern, like the unsigned type.
        write!(f, "{:X}", self.repr)
    }
}

impl<const N: usize> Display for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{self:X}")
    }
}

impl<const N: usize> Debug for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{self}")
    }
}

impl<const N: usize> Ord for Int<N> {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self.is_negative(), rhs.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.repr.cmp(&rhs.repr),
        }
    }
}

impl<const N: usize> PartialOrd for Int<N> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<const N: usize> Neg for Int<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl<const N: usize> Not for Int<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Int::not(&self)
    }
}

macro_rules! impl_bit_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident) => {
        impl<B: Borrow<Self>, const N: usize> $assign_trait<B> for Int<N> {
            fn $assign_fn(&mut self, rhs: B) {
                self.repr.$assign_fn(&rhs.borrow().repr);
            }
        }

        impl<B: Borrow<Self>, const N: usize> $op_trait<B> for Int<N> {
            type Output = Self;

            fn $op_fn(mut self, rhs: B) -> Self::Output {
                self.$assign_fn(rhs);
                self
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<const N: usize> Shl<u32> for Int<N> {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        Int::shl(self, rhs)
    }
}

impl<const N: usize> ShlAssign<u32> for Int<N> {
    fn shl_assign(&mut self, rhs: u32) {
        *self = Int::shl(*self, rhs);
    }
}

impl<const N: usize> Shr<u32> for Int<N> {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        Int::shr(self, rhs)
    }
}

impl<const N: usize> ShrAssign<u32> for Int<N> {
    fn shr_assign(&mut self, rhs: u32) {
        *self = Int::shr(*self, rhs);
    }
}

impl<B: Borrow<Self>, const N: usize> Add<B> for Int<N> {
    type Output = Self;

    fn add(self, rhs: B) -> Self::Output {
        self.wrapping_add(rhs.borrow())
    }
}

impl<B: Borrow<Self>, const N: usize> AddAssign<B> for Int<N> {
    fn add_assign(&mut self, rhs: B) {
        *self = self.wrapping_add(rhs.borrow());
    }
}

impl<B: Borrow<Self>, const N: usize> Sub<B> for Int<N> {
    type Output = Self;

    fn sub(self, rhs: B) -> Self::Output {
        self.wrapping_sub(rhs.borrow())
    }
}

impl<B: Borrow<Self>, const N: usize> SubAssign<B> for Int<N> {
    fn sub_assign(&mut self, rhs: B) {
        *self = self.wrapping_sub(rhs.borrow());
    }
}

impl<B: Borrow<Self>, const N: usize> Mul<B> for Int<N> {
    type Output = Self;

    fn mul(self, rhs: B) -> Self::Output {
        self.wrapping_mul(rhs.borrow())
    }
}

impl<B: Borrow<Self>, const N: usize> MulAssign<B> for Int<N> {
    fn mul_assign(&mut self, rhs: B) {
        *self = self.wrapping_mul(rhs.borrow());
    }
}

impl<B: Borrow<Self>, const N: usize> Div<B> for Int<N> {
    type Output = Self;

    fn div(self, rhs: B) -> Self::Output {
        self.div_rem(rhs.borrow()).0
    }
}

impl<B: Borrow<Self>, const N: usize> DivAssign<B> for Int<N> {
    fn div_assign(&mut self, rhs: B) {
        *self = self.div_rem(rhs.borrow()).0;
    }
}

impl<B: Borrow<Self>, const N: usize> Rem<B> for Int<N> {
    type Output = Self;

    fn rem(self, rhs: B) -> Self::Output {
        self.div_rem(rhs.borrow()).1
    }
}

impl<B: Borrow<Self>, const N: usize> RemAssign<B> for Int<N> {
    fn rem_assign(&mut self, rhs: B) {
        *self = self.div_rem(rhs.borrow()).1;
    }
}

impl<const N: usize> Zero for Int<N> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Int::is_zero(self)
    }
}

impl<const N: usize> ConstZero for Int<N> {
    const ZERO: Self = Self::ZERO;
}

impl<const N: usize> One for Int<N> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<const N: usize> ConstOne for Int<N> {
    const ONE: Self = Self::ONE;
}
