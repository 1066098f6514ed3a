//! `Index`: unsigned vertex index types with a reserved sentinel
//!
//! Every graph container in this crate is parameterised by an unsigned
//! integer index type `I`. The largest representable value, `I::max_value()`,
//! is reserved as *undefined*; all other values are valid vertex indices.
//! The ceiling on supported vertex counts is therefore `max(I) - 1`.
//!
//! The compile-time "is an unsigned integer" check is the trait bound itself:
//! `Index` is only implemented for `u8`, `u16`, `u32`, `u64` and `usize`.

use std::fmt;
use std::hash::Hash;

use num_traits::{NumCast, PrimInt, ToPrimitive, Unsigned};

/// Unsigned vertex index with `max_value()` reserved as undefined.
pub trait Index:
    PrimInt + Unsigned + Hash + fmt::Debug + fmt::Display + Default + Send + Sync + 'static
{
    /// The reserved sentinel, `max(I)`.
    #[inline]
    fn undef() -> Self {
        Self::max_value()
    }

    /// The largest usable index, `max(I) - 1`.
    #[inline]
    fn max_valid_index() -> Self {
        Self::max_value() - Self::one()
    }

    /// `true` unless `self` is the sentinel.
    #[inline]
    fn is_defined(self) -> bool {
        self != Self::undef()
    }

    /// Widen to `usize` for slot addressing.
    ///
    /// # Panics
    /// Panics if the value does not fit `usize` (only possible for `u64` on
    /// 32-bit targets).
    #[inline]
    fn as_usize(self) -> usize {
        self.to_usize().expect("index does not fit usize")
    }

    /// Narrow a `usize` position into a *valid* index, `None` if it would
    /// collide with the sentinel or overflow.
    #[inline]
    fn try_from_usize(value: usize) -> Option<Self> {
        let v = <Self as NumCast>::from(value)?;
        (v <= Self::max_valid_index()).then_some(v)
    }

    /// Raw value widened to `u64`, used when reporting errors.
    #[inline]
    fn to_raw(self) -> u64 {
        ToPrimitive::to_u64(&self).unwrap_or(u64::MAX)
    }
}

impl Index for u8 {}
impl Index for u16 {}
impl Index for u32 {}
impl Index for u64 {}
impl Index for usize {}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(u8: Index);
    assert_impl_all!(u32: Index);
    assert_impl_all!(usize: Index);

    #[test]
    fn sentinel_is_max_value() {
        assert_eq!(<u8 as Index>::undef(), 255);
        assert_eq!(<u8 as Index>::max_valid_index(), 254);
        assert_eq!(<u32 as Index>::undef(), u32::MAX);
        assert!(!u16::MAX.is_defined());
        assert!(0u16.is_defined());
    }

    #[test]
    fn try_from_usize_rejects_sentinel() {
        assert_eq!(<u8 as Index>::try_from_usize(254), Some(254));
        assert_eq!(<u8 as Index>::try_from_usize(255), None);
        assert_eq!(<u8 as Index>::try_from_usize(1000), None);
        assert_eq!(<u32 as Index>::try_from_usize(7), Some(7));
    }

    #[test]
    fn raw_widening() {
        assert_eq!(42u16.to_raw(), 42);
        assert_eq!(7usize.as_usize(), 7);
    }
}
