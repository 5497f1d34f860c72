//! Module `headers`
//!
//! Typed 16-bit flag words found in archive headers. Every flag set is a
//! [`bitflags`] type that can be read from and written to a byte stream and
//! tested through the enumeration overloads of [`crate::flags`].

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{trace, warn};
use thiserror::Error;

use crate::flags::{FlagEnum, FlagError, set_enum_flag};

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("failed to access flag word: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Flag(#[from] FlagError),
}

/// A 16-bit header flag word, stored little-endian.
pub trait FlagWord: FlagEnum<Repr = u16> {
    /// Short name used in log messages.
    const NAME: &'static str;

    fn known_bits() -> u16;

    /// Builds the flag set from a raw word, keeping unknown bits.
    fn from_word(word: u16) -> Self;

    /// Reads the flag word from `reader`.
    ///
    /// Bits outside the known set are kept and reported with a warning.
    fn read_from<R: Read>(reader: &mut R) -> Result<Self, HeaderError> {
        let word = reader.read_u16::<LittleEndian>()?;
        trace!("read {} flag word {word:#06X}", Self::NAME);

        let unknown = word & !Self::known_bits();
        if unknown != 0 {
            warn!(
                "{} flag word {word:#06X} carries unknown bits {unknown:#06X}",
                Self::NAME
            );
        }

        Ok(Self::from_word(word))
    }

    fn write_to<W: Write>(self, writer: &mut W) -> Result<(), HeaderError> {
        let word = self.repr();
        trace!("write {} flag word {word:#06X}", Self::NAME);
        writer.write_u16::<LittleEndian>(word)?;
        Ok(())
    }

    /// Returns a copy with `flag` switched on or off.
    fn with(self, flag: Self, on: bool) -> Result<Self, HeaderError> {
        let bits = set_enum_flag(self, flag, on)?;
        // OR / AND-NOT of two u16 words stays within u16.
        Ok(Self::from_word(bits as u16))
    }
}

macro_rules! impl_flag_word {
    ($t:ty, $name:literal) => {
        impl $crate::flags::FlagEnum for $t {
            type Repr = u16;

            #[inline(always)]
            fn repr(self) -> Self::Repr {
                self.bits()
            }
        }

        impl $crate::headers::FlagWord for $t {
            const NAME: &'static str = $name;

            #[inline(always)]
            fn known_bits() -> u16 {
                <$t>::all().bits()
            }

            #[inline(always)]
            fn from_word(word: u16) -> Self {
                <$t>::from_bits_retain(word)
            }
        }
    };
}

mod rar;
mod zip;

pub use rar::RarArchiveFlags;
pub use zip::{DeflateOption, ZipFlags};
