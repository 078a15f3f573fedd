use std::fmt;

/// Identifier of a document schema revision.
///
/// Variant order is registration order, which is also migration order; adding
/// a version means appending a variant here, which turns every match over the
/// chain into a compile error until the new upgrade step exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionTag {
    V0_0_0,
    V0_0_1,
    V0_1,
    V0_1_1,
    V0_1_2,
    V0_2,
    V0_2_1,
    V0_3,
}

impl VersionTag {
    /// Every registered version, oldest first.
    pub const ALL: [VersionTag; 8] = [
        VersionTag::V0_0_0,
        VersionTag::V0_0_1,
        VersionTag::V0_1,
        VersionTag::V0_1_1,
        VersionTag::V0_1_2,
        VersionTag::V0_2,
        VersionTag::V0_2_1,
        VersionTag::V0_3,
    ];

    /// The version every document is written back out as.
    pub const CURRENT: VersionTag = VersionTag::V0_3;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::V0_0_0 => "v0.0.0",
            Self::V0_0_1 => "v0.0.1",
            Self::V0_1 => "v0.1",
            Self::V0_1_1 => "v0.1.1",
            Self::V0_1_2 => "v0.1.2",
            Self::V0_2 => "v0.2",
            Self::V0_2_1 => "v0.2.1",
            Self::V0_3 => "v0.3",
        }
    }

    /// Returns `None` for version strings this build does not register.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }

    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
