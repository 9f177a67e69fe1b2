//! Part kind tags and the upstream-requirement table.

use serde::{Deserialize, Serialize};

/// Tag identifying an engine stage variant.
///
/// The chain engine and registry work exclusively in terms of kinds and the
/// [`PartKind::required_upstream`] table, so new part kinds slot in without
/// touching either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    Inlet,
    Compressor,
    Combustor,
    Turbine,
}

impl PartKind {
    pub const ALL: [PartKind; 4] = [
        PartKind::Inlet,
        PartKind::Compressor,
        PartKind::Combustor,
        PartKind::Turbine,
    ];

    /// The upstream part kind this kind must reference, if any.
    pub fn required_upstream(self) -> Option<PartKind> {
        match self {
            PartKind::Inlet => None,
            PartKind::Compressor => Some(PartKind::Inlet),
            PartKind::Combustor => Some(PartKind::Compressor),
            PartKind::Turbine => Some(PartKind::Combustor),
        }
    }

    /// Canonical label, as used in part records and engine files.
    pub fn label(self) -> &'static str {
        match self {
            PartKind::Inlet => "Inlet",
            PartKind::Compressor => "Compressor",
            PartKind::Combustor => "Combustor",
            PartKind::Turbine => "Turbine",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.label() == label)
    }
}

impl core::fmt::Display for PartKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
