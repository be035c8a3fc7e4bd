use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Modifier bit set as the host front end records it on a modifiers node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u64);

impl Flags {
    pub const EMPTY: Flags = Flags(0);
    pub const PUBLIC: Flags = Flags(1 << 0);
    pub const PRIVATE: Flags = Flags(1 << 1);
    pub const PROTECTED: Flags = Flags(1 << 2);
    pub const STATIC: Flags = Flags(1 << 3);
    pub const FINAL: Flags = Flags(1 << 4);
    pub const SYNCHRONIZED: Flags = Flags(1 << 5);
    pub const VOLATILE: Flags = Flags(1 << 6);
    pub const TRANSIENT: Flags = Flags(1 << 7);
    pub const NATIVE: Flags = Flags(1 << 8);
    pub const INTERFACE: Flags = Flags(1 << 9);
    pub const ABSTRACT: Flags = Flags(1 << 10);
    pub const STRICTFP: Flags = Flags(1 << 11);
    pub const ANNOTATION: Flags = Flags(1 << 13);
    pub const ENUM: Flags = Flags(1 << 14);
    pub const VARARGS: Flags = Flags(1 << 34);

    /// The exact set an enum constant's synthetic field carries.
    pub const ENUM_CONSTANT: Flags =
        Flags(Self::PUBLIC.0 | Self::STATIC.0 | Self::FINAL.0 | Self::ENUM.0);

    pub const fn from_bits(bits: u64) -> Self {
        Flags(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flags({:#x})", self.0)
    }
}
