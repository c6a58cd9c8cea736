//! Seams to the outside world: the map engine and window-level pointer
//! listeners. The web crate implements both on top of Leaflet and the DOM;
//! tests implement them with counters.

use crate::overlay::FloatOverlay;

/// A mounted tile map that float overlays are drawn onto.
pub trait MapSurface {
    /// Recompute internal layout after the container's pixel size changed.
    fn invalidate_size(&self);

    /// Draw one float's track and marker. Replaces any overlay previously
    /// placed for the same float id.
    fn place_overlay(&self, overlay: &FloatOverlay);
}

/// Window-level pointer-move / pointer-up subscription used while a divider
/// drag is in progress.
pub trait WindowListeners {
    fn attach(&mut self);
    fn detach(&mut self);
}
