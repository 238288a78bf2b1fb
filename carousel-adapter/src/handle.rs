use alloc::rc::Rc;
use core::cell::Cell;

use carousel::Direction;

/// The imperative surface a carousel exposes to its owner.
pub trait Navigate {
    /// Moves one card backward (content slides right).
    fn scroll_left(&mut self);
    /// Moves one card forward (content slides left).
    fn scroll_right(&mut self);
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Mailbox {
    pub(crate) attached: bool,
    pub(crate) request: Option<Direction>,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self {
            attached: true,
            request: None,
        }
    }
}

/// A cheap, cloneable owner handle for a [`crate::Controller`].
///
/// Calls are recorded and applied by the controller on its next event or `tick`. Only the
/// latest call survives: pressing "left" then "right" within one frame navigates right. Once the
/// controller is unmounted (or dropped) the handle detaches and further calls are ignored.
#[derive(Clone, Debug)]
pub struct NavigationHandle {
    mailbox: Rc<Cell<Mailbox>>,
}

impl NavigationHandle {
    pub(crate) fn new(mailbox: Rc<Cell<Mailbox>>) -> Self {
        Self { mailbox }
    }

    pub fn is_attached(&self) -> bool {
        self.mailbox.get().attached
    }

    fn request(&self, direction: Direction) {
        if !self.is_attached() {
            awarn!("NavigationHandle: carousel is unmounted; request dropped");
            return;
        }
        let mut m = self.mailbox.get();
        m.request = Some(direction);
        self.mailbox.set(m);
    }
}

impl Navigate for NavigationHandle {
    fn scroll_left(&mut self) {
        self.request(Direction::Backward);
    }

    fn scroll_right(&mut self) {
        self.request(Direction::Forward);
    }
}
