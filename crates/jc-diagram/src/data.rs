//! Renderable diagram structures.

use jc_core::PartId;
use jc_parts::PartKind;
use serde::{Deserialize, Serialize};

/// One plotted point of the T-s plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TsPoint {
    /// Specific entropy [J/(kg·K)]
    pub entropy: f64,
    /// Temperature [K]
    pub temperature: f64,
}

/// One part's contribution to the cycle line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSegment {
    pub part_id: PartId,
    /// Display label (part name plus kind tag).
    pub label: String,
    pub kind: PartKind,
    /// Ordered along the transformation, upstream end first.
    pub points: Vec<TsPoint>,
}

/// A constant-pressure overlay curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsobarCurve {
    /// The fixed pressure of this curve [Pa].
    pub pressure_pa: f64,
    /// Ordered by temperature, coolest first.
    pub points: Vec<TsPoint>,
}

/// The full renderable diagram: cycle-line segments plus isobar overlays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramData {
    pub segments: Vec<DiagramSegment>,
    pub isobars: Vec<IsobarCurve>,
}

impl DiagramData {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
