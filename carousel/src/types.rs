use crate::key::SlotKey;

/// Default key type: the item's index in the source sequence.
pub type ItemKey = u64;

/// Travel direction along the loop.
///
/// `Forward` moves towards later items (content appears to move left), `Backward` towards earlier
/// ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// A scroll instruction for the host viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollCommand {
    /// Set the scroll offset instantly (no animation).
    Jump(f64),
    /// Smoothly scroll to the offset. Fire-and-forget: the engine never waits for completion.
    Animate(f64),
}

impl ScrollCommand {
    pub fn target(self) -> f64 {
        match self {
            Self::Jump(v) | Self::Animate(v) => v,
        }
    }
}

/// Which side of the loop a correction wrapped around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// The viewport reached the trailing clone region.
    Forward,
    /// The viewport reached offset zero.
    Backward,
}

/// A silent repositioning produced by a boundary crossing.
///
/// The host must apply `jump_to` instantly, then start `animate_to` (if any) from there.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correction {
    pub boundary: Boundary,
    pub jump_to: f64,
    pub animate_to: Option<f64>,
}

impl Correction {
    /// Returns `true` if the correction was triggered by a navigation button (jump + animate).
    pub fn is_programmatic(&self) -> bool {
        self.animate_to.is_some()
    }

    /// Iterates the commands in the order the host must apply them.
    pub fn commands(&self) -> impl Iterator<Item = ScrollCommand> {
        core::iter::once(ScrollCommand::Jump(self.jump_to))
            .chain(self.animate_to.map(ScrollCommand::Animate))
    }
}

/// One entry of the rendered strip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot<K> {
    pub key: SlotKey<K>,
    /// Index of the source item this slot renders (clones point at the item they copy).
    pub source_index: usize,
}

impl<K> Slot<K> {
    pub fn is_clone(&self) -> bool {
        self.key.is_clone()
    }
}

/// A navigation affordance the host may render next to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButton {
    pub direction: Direction,
    pub label: &'static str,
}

pub(crate) const NAV_BUTTONS: [NavButton; 2] = [
    NavButton {
        direction: Direction::Backward,
        label: "<- back",
    },
    NavButton {
        direction: Direction::Forward,
        label: "forward ->",
    },
];

/// Style variant of the scroll viewport. Has no effect on wrap correction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportStyle {
    /// Scrollbar hidden; navigation happens via buttons and swipes.
    #[default]
    Hidden,
    /// Scrollbar shown and user-draggable.
    Scrollable,
}
