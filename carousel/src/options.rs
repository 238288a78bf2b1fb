use alloc::sync::Arc;

use crate::ItemKey;
use crate::correction::DEFAULT_COOLDOWN_MS;
use crate::geometry::MIN_ILLUSION_COUNT;
use crate::gesture::DEFAULT_SWIPE_THRESHOLD;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the key mapping is stored in an `Arc`, so a host can tweak a flag and call
/// `Carousel::set_options` without reallocating closures.
pub struct CarouselOptions<K = ItemKey> {
    /// Number of source items.
    pub count: usize,
    /// Stable identity of the item at index `i`.
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Whether the back/forward buttons are rendered.
    pub render_navigation: bool,
    /// Shows a scrollbar on the viewport. Purely visual.
    pub scrollable: bool,

    /// How long a wrap correction suppresses further corrections.
    pub cooldown_ms: u64,
    /// Minimum horizontal travel for a touch to count as a swipe.
    pub swipe_threshold: f64,
    /// Lower bound on the number of illusion clones.
    pub min_illusion_count: usize,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            get_item_key: Arc::clone(&self.get_item_key),
            render_navigation: self.render_navigation,
            scrollable: self.scrollable,
            cooldown_ms: self.cooldown_ms,
            swipe_threshold: self.swipe_threshold,
            min_illusion_count: self.min_illusion_count,
        }
    }
}

impl CarouselOptions<ItemKey> {
    /// Creates options for `count` items keyed by index.
    pub fn new(count: usize) -> Self {
        Self::new_with_key(count, |i| i as u64)
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping.
    pub fn new_with_key(
        count: usize,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            get_item_key: Arc::new(get_item_key),
            render_navigation: true,
            scrollable: false,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            min_illusion_count: MIN_ILLUSION_COUNT,
        }
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_render_navigation(mut self, render_navigation: bool) -> Self {
        self.render_navigation = render_navigation;
        self
    }

    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub fn with_swipe_threshold(mut self, swipe_threshold: f64) -> Self {
        self.swipe_threshold = swipe_threshold;
        self
    }

    /// Sets the clone floor. Values below [`MIN_ILLUSION_COUNT`] are raised to it.
    pub fn with_min_illusion_count(mut self, min_illusion_count: usize) -> Self {
        self.min_illusion_count = min_illusion_count.max(MIN_ILLUSION_COUNT);
        self
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("render_navigation", &self.render_navigation)
            .field("scrollable", &self.scrollable)
            .field("cooldown_ms", &self.cooldown_ms)
            .field("swipe_threshold", &self.swipe_threshold)
            .field("min_illusion_count", &self.min_illusion_count)
            .finish_non_exhaustive()
    }
}
