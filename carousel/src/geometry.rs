/// Minimum number of illusion clones, whatever the measurements say.
pub const MIN_ILLUSION_COUNT: usize = 3;

/// Horizontal extent of a rendered node, as reported by the host layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRect {
    pub left: f64,
    pub width: f64,
}

impl NodeRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Distance between this node's right edge and `next`'s left edge.
    pub fn gap_to(&self, next: &NodeRect) -> f64 {
        (self.right() - next.left).abs()
    }
}

/// Raw layout readings for one measurement pass.
///
/// `scroll_width` is the total scrollable width of the viewport's content (real items, clones
/// and any host padding), i.e. what a DOM host reports as `scrollWidth`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub viewport_width: f64,
    pub item_width: f64,
    pub gap: f64,
    pub scroll_width: f64,
}

impl Measurement {
    /// Builds a measurement from the first rendered nodes of the strip.
    ///
    /// The item width is the first node's width; the gap is the distance between the first two
    /// nodes, which also covers non-uniform spacing. Missing nodes read as zero.
    pub fn from_nodes(viewport_width: f64, scroll_width: f64, nodes: &[NodeRect]) -> Self {
        let item_width = nodes.first().map_or(0.0, |n| n.width);
        let gap = match nodes {
            [first, second, ..] => first.gap_to(second),
            _ => 0.0,
        };
        Self {
            viewport_width,
            item_width,
            gap,
            scroll_width,
        }
    }

    pub(crate) fn sanitized(self) -> Self {
        Self {
            viewport_width: sanitize(self.viewport_width, "viewport_width"),
            item_width: sanitize(self.item_width, "item_width"),
            gap: sanitize(self.gap, "gap"),
            scroll_width: sanitize(self.scroll_width, "scroll_width"),
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn sanitize(v: f64, field: &'static str) -> f64 {
    if v.is_finite() && v >= 0.0 {
        return v;
    }
    cwarn!(field, value = v, "Measurement: invalid value replaced with 0");
    0.0
}

/// Derived layout quantities. Recomputed from a [`Measurement`] and the item count; never
/// edited directly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub viewport_width: f64,
    pub item_width: f64,
    pub gap: f64,
    pub scroll_width: f64,
    pub item_count: usize,
    /// Number of leading items cloned at the tail: `max(min, ceil(viewport / item))`. Rounds up
    /// rather than to nearest, so it is one higher than plain rounding when the fraction is
    /// below .5.
    pub illusion_count: usize,
    /// `illusion_count * (item_width + gap)`.
    pub clone_region_width: f64,
    /// `item_count * (item_width + gap)`; the width of the real items only.
    pub content_width: f64,
    /// Shift that keeps a landed card centred in the viewport. Negative when the card is wider
    /// than the viewport.
    pub centering_offset: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::compute(Measurement::default(), 0, MIN_ILLUSION_COUNT)
    }
}

impl Geometry {
    pub fn compute(m: Measurement, item_count: usize, min_illusion_count: usize) -> Self {
        let m = m.sanitized();
        // Unmeasured items divide by 1 instead of 0.
        let denom = if m.item_width > 0.0 { m.item_width } else { 1.0 };
        let per_viewport = ceil(m.viewport_width / denom);
        let illusion_count = min_illusion_count.max(per_viewport as usize);

        let stride = m.item_width + m.gap;
        Self {
            viewport_width: m.viewport_width,
            item_width: m.item_width,
            gap: m.gap,
            scroll_width: m.scroll_width,
            item_count,
            illusion_count,
            clone_region_width: illusion_count as f64 * stride,
            content_width: item_count as f64 * stride,
            centering_offset: round_half_up((m.viewport_width - m.item_width) / 2.0),
        }
    }

    /// Distance between the starts of two neighbouring items.
    pub fn stride(&self) -> f64 {
        self.item_width + self.gap
    }

    /// Returns `true` once the host has reported real content.
    pub fn is_measured(&self) -> bool {
        self.scroll_width > 0.0
    }

    /// The offset that starts the user mid-loop with the first card centred.
    pub fn initial_offset(&self) -> f64 {
        (self.content_width - self.centering_offset).max(0.0)
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.scroll_width - self.viewport_width).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Offset at which the trailing clone region starts to fill the viewport.
    pub fn forward_boundary(&self) -> f64 {
        self.scroll_width - self.clone_region_width
    }
}

// `core` has no float rounding without `std`; these cover the non-negative and small negative
// ranges layout produces.

fn floor(x: f64) -> f64 {
    let t = x as i64 as f64;
    if t > x { t - 1.0 } else { t }
}

fn ceil(x: f64) -> f64 {
    let t = x as i64 as f64;
    if t < x { t + 1.0 } else { t }
}

/// Rounds halves towards positive infinity (`-0.5` → `0`, `2.5` → `3`).
pub(crate) fn round_half_up(x: f64) -> f64 {
    floor(x + 0.5)
}
