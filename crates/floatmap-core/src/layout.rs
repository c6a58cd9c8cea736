//! Draggable divider between the side panel and the map.
//!
//! `Idle -> Dragging` on pointer-down over the divider, which attaches the
//! window-level listeners. While dragging, each pointer-move proposes a new
//! panel width; it is kept only if it leaves both regions usable. Pointer-up
//! detaches the listeners and then tells the map surface its container
//! settled at a new size. The map is never told mid-drag.

use crate::config::LayoutConfig;
use crate::surface::{MapSurface, WindowListeners};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Result of one pointer-move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragUpdate {
    Accepted(i32),
    Rejected,
    /// Not dragging.
    Ignored,
}

/// Result of one pointer-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEnd {
    Completed {
        panel_width_px: i32,
        /// False when no map surface was mounted yet.
        surface_notified: bool,
    },
    Ignored,
}

pub struct SplitLayout<W: WindowListeners> {
    config: LayoutConfig,
    panel_width_px: i32,
    phase: DragPhase,
    listeners: W,
}

impl<W: WindowListeners> SplitLayout<W> {
    pub fn new(config: LayoutConfig, listeners: W) -> Self {
        Self {
            panel_width_px: config.default_panel_width_px,
            config,
            phase: DragPhase::Idle,
            listeners,
        }
    }

    #[inline]
    pub fn panel_width_px(&self) -> i32 {
        self.panel_width_px
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn listeners(&self) -> &W {
        &self.listeners
    }

    /// Width rule: strictly between the panel minimum and what is left after
    /// reserving the map minimum.
    #[inline]
    pub fn accepts(&self, candidate_px: i32, viewport_width_px: i32) -> bool {
        candidate_px > self.config.min_panel_px
            && candidate_px < viewport_width_px - self.config.min_map_px
    }

    /// Pointer-down on the divider. Returns false if a drag was already active.
    pub fn pointer_down(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.phase = DragPhase::Dragging;
        self.listeners.attach();
        log::debug!("[layout] drag start at {}px", self.panel_width_px);
        true
    }

    /// Window pointer-move with the pointer's viewport-relative x.
    pub fn pointer_move(&mut self, client_x: i32, viewport_width_px: i32) -> DragUpdate {
        if !self.is_dragging() {
            return DragUpdate::Ignored;
        }
        if !self.accepts(client_x, viewport_width_px) {
            return DragUpdate::Rejected;
        }
        self.panel_width_px = client_x;
        DragUpdate::Accepted(client_x)
    }

    /// Window pointer-up. Detaches listeners, then asks the map to relayout.
    pub fn pointer_up<M: MapSurface + ?Sized>(&mut self, surface: Option<&M>) -> DragEnd {
        if !self.is_dragging() {
            return DragEnd::Ignored;
        }
        self.phase = DragPhase::Idle;
        self.listeners.detach();
        let surface_notified = match surface {
            Some(s) => {
                s.invalidate_size();
                true
            }
            None => {
                log::debug!("[layout] map surface not ready, skipping resize");
                false
            }
        };
        log::info!("[layout] drag end at {}px", self.panel_width_px);
        DragEnd::Completed {
            panel_width_px: self.panel_width_px,
            surface_notified,
        }
    }

    /// Tear-down path: release listeners without committing or notifying.
    pub fn release(&mut self) {
        if self.is_dragging() {
            self.phase = DragPhase::Idle;
            self.listeners.detach();
            log::debug!("[layout] drag released on unmount");
        }
    }
}

impl<W: WindowListeners> Drop for SplitLayout<W> {
    fn drop(&mut self) {
        self.release();
    }
}
