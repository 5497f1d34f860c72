//! Bit-flag test and set helpers.
//!
//! The [`flags`] module works on plain integers of any primitive width and on
//! enumeration-like flag types that map onto an integer. With the `headers`
//! feature, [`headers`] adds typed flag words for archive headers built on top
//! of it.
//!
//! ```rust
//! use arcflags::{has_flag, set_flag};
//!
//! assert!(has_flag(0b1010_i64, 0b1000));
//! assert_eq!(set_flag(0b0101_i64, 0b0001, false), 0b0100);
//! ```

pub mod flags;
#[cfg(feature = "headers")]
pub mod headers;

pub use flags::{BitField, FlagEnum, FlagError, has_enum_flag, has_flag, set_enum_flag, set_flag};
