//! The registered part: configuration plus graph membership.

use jc_core::PartId;
use jc_parts::{PartConfig, PartKind};
use serde::{Deserialize, Serialize};

/// One engine part as held by the registry.
///
/// A part owns only its validated configuration and the identity of its
/// upstream neighbor. Computed output states and process paths are not
/// stored here: the cycle engine re-derives them from configuration, which
/// keeps every computation reproducible from the registry contents alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    /// User-assigned display name.
    pub name: String,
    pub config: PartConfig,
    /// Upstream reference by identity; never an ownership link.
    pub upstream: Option<PartId>,
}

impl Part {
    pub fn kind(&self) -> PartKind {
        self.config.kind()
    }
}
