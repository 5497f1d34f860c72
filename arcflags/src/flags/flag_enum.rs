use log::debug;

use super::{FlagError, has_flag, set_flag};

/// An enumeration-like flag type backed by a primitive integer.
///
/// The enumeration overloads ([`has_enum_flag`], [`set_enum_flag`]) operate on
/// the `i64` form of the value. The conversion is checked: a representation
/// that does not fit in an `i64` is rejected with [`FlagError::OutOfRange`]
/// instead of being narrowed.
///
/// # Examples
///
/// ```rust
/// use arcflags::{FlagEnum, has_enum_flag};
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Attribute {
///     ReadOnly = 0x01,
///     Hidden = 0x02,
/// }
///
/// impl FlagEnum for Attribute {
///     type Repr = u8;
///
///     fn repr(self) -> u8 {
///         self as u8
///     }
/// }
///
/// assert_eq!(has_enum_flag(Attribute::Hidden, Attribute::ReadOnly), Ok(false));
/// assert_eq!(has_enum_flag(Attribute::Hidden, Attribute::Hidden), Ok(true));
/// ```
pub trait FlagEnum: Copy {
    type Repr: Copy + TryInto<i64> + Into<i128>;

    /// Returns the underlying integer representation.
    fn repr(self) -> Self::Repr;

    /// Converts the value to `i64` without losing information.
    ///
    /// # Errors
    /// - [`FlagError::OutOfRange`] if the representation exceeds the `i64` range.
    fn to_i64(self) -> Result<i64, FlagError> {
        let repr = self.repr();

        repr.try_into().map_err(|_| {
            let value: i128 = repr.into();
            debug!("flag value {value} rejected, out of i64 range");
            FlagError::OutOfRange { value }
        })
    }
}

macro_rules! impl_flag_enum_for_numerics {
    ($($t:ty),+) => {
        $(
            impl FlagEnum for $t {
                type Repr = $t;

                #[inline(always)]
                fn repr(self) -> Self::Repr {
                    self
                }
            }
        )+
    };
}

impl_flag_enum_for_numerics!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Returns `true` if the flag is set on the specified enumeration value.
///
/// Both operands are converted to `i64` before testing.
///
/// # Errors
/// - [`FlagError::OutOfRange`] if either operand does not fit in an `i64`.
///
/// # Examples
///
/// ```rust
/// use arcflags::{FlagError, has_enum_flag};
///
/// assert_eq!(has_enum_flag(0b1010_u32, 0b1000), Ok(true));
/// assert_eq!(
///     has_enum_flag(u64::MAX, 1),
///     Err(FlagError::OutOfRange { value: u64::MAX as i128 }),
/// );
/// ```
pub fn has_enum_flag<E: FlagEnum>(bit_field: E, flag: E) -> Result<bool, FlagError> {
    Ok(has_flag(bit_field.to_i64()?, flag.to_i64()?))
}

/// Sets an enumeration value to either on or off for the specified flag.
///
/// Returns the `i64` form of the result; converting it back to `E` is up to
/// the caller.
///
/// # Errors
/// - [`FlagError::OutOfRange`] if either operand does not fit in an `i64`.
pub fn set_enum_flag<E: FlagEnum>(bit_field: E, flag: E, on: bool) -> Result<i64, FlagError> {
    Ok(set_flag(bit_field.to_i64()?, flag.to_i64()?, on))
}
