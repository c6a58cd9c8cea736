// Test doubles for the map engine and window listeners.

#![allow(dead_code)]

use floatmap_core::{FloatId, FloatOverlay, MapSurface, WindowListeners};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Records every call; overlays are keyed by float id like the real engine.
#[derive(Default)]
pub struct FakeSurface {
    pub invalidations: Cell<usize>,
    pub placements: Cell<usize>,
    pub overlays: RefCell<BTreeMap<FloatId, FloatOverlay>>,
    /// Shared call log so tests can check ordering against listener events.
    pub log: Rc<RefCell<Vec<&'static str>>>,
}

impl FakeSurface {
    pub fn with_log(log: Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    pub fn line_count(&self) -> usize {
        self.overlays
            .borrow()
            .values()
            .filter(|o| o.track.is_some())
            .count()
    }
}

impl MapSurface for FakeSurface {
    fn invalidate_size(&self) {
        self.invalidations.set(self.invalidations.get() + 1);
        self.log.borrow_mut().push("invalidate");
    }

    fn place_overlay(&self, overlay: &FloatOverlay) {
        self.placements.set(self.placements.get() + 1);
        self.overlays
            .borrow_mut()
            .insert(overlay.float_id, overlay.clone());
    }
}

/// Counts attach/detach pairs and tracks whether moves would be delivered.
#[derive(Default)]
pub struct FakeListeners {
    pub attached: Rc<Cell<bool>>,
    pub attach_calls: Rc<Cell<usize>>,
    pub detach_calls: Rc<Cell<usize>>,
    pub log: Rc<RefCell<Vec<&'static str>>>,
}

impl FakeListeners {
    pub fn with_log(log: Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    /// Handles that stay readable after the listeners move into a layout.
    pub fn probes(&self) -> (Rc<Cell<bool>>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        (
            self.attached.clone(),
            self.attach_calls.clone(),
            self.detach_calls.clone(),
        )
    }
}

impl WindowListeners for FakeListeners {
    fn attach(&mut self) {
        assert!(!self.attached.get(), "listeners attached twice");
        self.attached.set(true);
        self.attach_calls.set(self.attach_calls.get() + 1);
        self.log.borrow_mut().push("attach");
    }

    fn detach(&mut self) {
        self.attached.set(false);
        self.detach_calls.set(self.detach_calls.get() + 1);
        self.log.borrow_mut().push("detach");
    }
}
