use bitflags::bitflags;

use crate::flags::has_flag;

bitflags! {
    /// ZIP general purpose bit flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ZipFlags: u16 {
        const ENCRYPTED = 0x0001;
        const BIT1 = 0x0002;
        const BIT2 = 0x0004;
        const USE_POST_DATA_DESCRIPTOR = 0x0008;
        const ENHANCED_DEFLATE = 0x0010;
        const STRONG_ENCRYPTED = 0x0040;
        /// Language encoding flag, file names and comments are UTF-8.
        const EFS = 0x0800;
    }
}

impl_flag_word!(ZipFlags, "zip");

/// Compression option encoded in bits 1 and 2 for deflated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeflateOption {
    Normal,
    Maximum,
    Fast,
    SuperFast,
}

impl ZipFlags {
    /// Builds the flag set from the signed 16-bit form header readers often
    /// store the word in.
    #[inline(always)]
    pub const fn from_raw(raw: i16) -> Self {
        Self::from_bits_retain(raw as u16)
    }

    /// Returns the flag word as a signed 16-bit value.
    #[inline(always)]
    pub const fn raw(self) -> i16 {
        self.bits() as i16
    }

    #[inline(always)]
    pub fn is_encrypted(self) -> bool {
        has_flag(self.raw(), Self::ENCRYPTED.raw())
    }

    #[inline(always)]
    pub fn is_utf8(self) -> bool {
        has_flag(self.raw(), Self::EFS.raw())
    }

    pub fn deflate_option(self) -> DeflateOption {
        match (
            has_flag(self.raw(), Self::BIT1.raw()),
            has_flag(self.raw(), Self::BIT2.raw()),
        ) {
            (false, false) => DeflateOption::Normal,
            (true, false) => DeflateOption::Maximum,
            (false, true) => DeflateOption::Fast,
            (true, true) => DeflateOption::SuperFast,
        }
    }
}
