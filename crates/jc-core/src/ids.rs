use core::fmt;
use uuid::Uuid;

/// Stable identifier for a registered engine part.
///
/// Backed by a random UUID so an id stays unique across part deletion and
/// re-creation, and survives serialization into part records. Parts refer to
/// their upstream neighbor by `PartId`, never by ownership.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PartId(Uuid);

impl PartId {
    /// Mint a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(raw: Uuid) -> Self {
        Self(raw)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parse from the canonical hyphenated form (as stored in records).
    pub fn parse(text: &str) -> Option<Self> {
        Uuid::parse_str(text).ok().map(Self)
    }
}

impl Default for PartId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartId({})", self.0)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
