mod bit_field;
mod error;
mod flag_enum;

pub use bit_field::{BitField, has_flag, set_flag};
pub use error::FlagError;
pub use flag_enum::{FlagEnum, has_enum_flag, set_enum_flag};
