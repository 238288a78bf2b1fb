use crate::correction::CorrectionPhase;
use crate::geometry::Geometry;

/// A lightweight, serializable snapshot of the scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    pub navigation_pending: bool,
    pub phase: CorrectionPhase,
}

/// Geometry + scroll state, e.g. for restoring a carousel across re-mounts of the host view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub geometry: Geometry,
    pub scroll: ScrollState,
}
