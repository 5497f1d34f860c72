use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, Not};

/// An integer whose individual bits are independent boolean flags.
///
/// Implemented for every primitive integer. Both operands of every operation
/// share the same width, so nothing is converted and the full range of the
/// type is available (including `u64` values above `i64::MAX`).
pub trait BitField:
    Copy + PartialEq + Eq + Debug + BitAnd<Output = Self> + BitOr<Output = Self> + Not<Output = Self>
{
    /// The bit field with no flag set.
    const EMPTY: Self;

    /// Returns `true` if every bit set in `flag` is also set in `self`.
    ///
    /// An empty `flag` is always contained.
    #[inline(always)]
    fn contains_flag(self, flag: Self) -> bool {
        (self & flag) == flag
    }

    /// Returns `self` with all bits of `flag` set (`on`) or cleared (`!on`).
    #[inline(always)]
    fn with_flag(self, flag: Self, on: bool) -> Self {
        if on { self | flag } else { self & !flag }
    }

    #[inline(always)]
    fn is_clear(self) -> bool {
        self == Self::EMPTY
    }
}

macro_rules! impl_bit_field {
    ($($t:ty),+) => {
        $(
            impl BitField for $t {
                const EMPTY: Self = 0;
            }
        )+
    };
}

impl_bit_field!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

/// Returns `true` if the flag is set on the specified bit field.
///
/// Works for any primitive integer width, signed or unsigned.
///
/// # Examples
///
/// ```rust
/// use arcflags::has_flag;
///
/// assert!(has_flag(0b1010_i64, 0b1000));
/// assert!(!has_flag(0b1010_i64, 0b0100));
/// assert!(has_flag(u64::MAX, 1 << 63));
/// assert!(has_flag(0x0800_i16, 0x0800));
/// ```
#[inline(always)]
pub fn has_flag<T: BitField>(bit_field: T, flag: T) -> bool {
    bit_field.contains_flag(flag)
}

/// Sets a bit field to either on or off for the specified flag.
///
/// # Parameters
/// - `bit_field` - Flagged value
/// - `flag` - Flag bits to change
/// - `on` - `true` sets every bit of `flag`, `false` clears them
///
/// # Returns
/// The flagged value with the flag changed.
///
/// # Examples
///
/// ```rust
/// use arcflags::set_flag;
///
/// assert_eq!(set_flag(0b0000_i64, 0b0101, true), 0b0101);
/// assert_eq!(set_flag(0b0101_i64, 0b0001, false), 0b0100);
/// ```
#[inline(always)]
pub fn set_flag<T: BitField>(bit_field: T, flag: T, on: bool) -> T {
    bit_field.with_flag(flag, on)
}
