use crate::Direction;

/// Default minimum horizontal travel (in px) for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Single-finger horizontal swipe tracker. Lives for one start → move* → end cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchGesture {
    start_x: Option<f64>,
    last_x: Option<f64>,
}

impl TouchGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, x: f64) {
        self.last_x = None;
        self.start_x = Some(x);
    }

    /// Only the last position before `end` matters.
    pub fn update(&mut self, x: f64) {
        self.last_x = Some(x);
    }

    /// Finishes the gesture and resets the tracker.
    ///
    /// A leftward drag longer than `threshold` navigates forward, a rightward one backward.
    /// Anything shorter (or a gesture without a start or move) is a tap and yields `None`.
    pub fn end(&mut self, threshold: f64) -> Option<Direction> {
        let (start, last) = (self.start_x.take(), self.last_x.take());
        let distance = start? - last?;
        if distance > threshold {
            Some(Direction::Forward)
        } else if distance < -threshold {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }
}
