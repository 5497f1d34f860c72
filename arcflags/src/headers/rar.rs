use bitflags::bitflags;

bitflags! {
    /// RAR 4 main archive header flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct RarArchiveFlags: u16 {
        const VOLUME = 0x0001;
        const COMMENT = 0x0002;
        const LOCK = 0x0004;
        const SOLID = 0x0008;
        /// Volume names use the `name.partN.rar` scheme.
        const NEW_NUMBERING = 0x0010;
        /// Authenticity verification present.
        const AV = 0x0020;
        /// Recovery record present.
        const PROTECT = 0x0040;
        /// Block headers are encrypted.
        const PASSWORD = 0x0080;
        const FIRST_VOLUME = 0x0100;
    }
}

impl_flag_word!(RarArchiveFlags, "rar");

impl RarArchiveFlags {
    #[inline(always)]
    pub fn is_multi_volume(self) -> bool {
        self.contains(Self::VOLUME)
    }

    #[inline(always)]
    pub fn is_solid(self) -> bool {
        self.contains(Self::SOLID)
    }

    #[inline(always)]
    pub fn is_encrypted(self) -> bool {
        self.contains(Self::PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use crate::flags::has_enum_flag;
    use crate::headers::FlagWord;

    use super::*;

    #[test]
    fn test_read_first_volume() {
        let bytes = [0x19, 0x01];
        let flags = RarArchiveFlags::read_from(&mut &bytes[..]).unwrap();

        assert_eq!(
            flags,
            RarArchiveFlags::VOLUME
                | RarArchiveFlags::SOLID
                | RarArchiveFlags::NEW_NUMBERING
                | RarArchiveFlags::FIRST_VOLUME
        );
        assert!(flags.is_multi_volume());
        assert!(flags.is_solid());
        assert!(!flags.is_encrypted());
    }

    #[test]
    fn test_write_and_read_back() {
        let flags = RarArchiveFlags::PASSWORD | RarArchiveFlags::PROTECT;

        let mut out = Vec::new();
        flags.write_to(&mut out).unwrap();
        assert_eq!(out, [0xC0, 0x00]);

        let read = RarArchiveFlags::read_from(&mut out.as_slice()).unwrap();
        assert_eq!(read, flags);
        assert!(read.is_encrypted());
    }

    #[test]
    fn test_with_and_has_enum_flag() {
        let flags = RarArchiveFlags::empty()
            .with(RarArchiveFlags::LOCK | RarArchiveFlags::COMMENT, true)
            .unwrap();

        assert_eq!(has_enum_flag(flags, RarArchiveFlags::LOCK), Ok(true));
        assert_eq!(has_enum_flag(flags, RarArchiveFlags::AV), Ok(false));

        let flags = flags.with(RarArchiveFlags::LOCK, false).unwrap();
        assert_eq!(flags, RarArchiveFlags::COMMENT);
    }

    #[test]
    fn test_known_bits() {
        assert_eq!(RarArchiveFlags::known_bits(), 0x01FF);
        assert_eq!(RarArchiveFlags::NAME, "rar");
    }
}
