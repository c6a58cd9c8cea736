//! Runtime configuration with defaults taken from `constants.rs`.

use crate::constants::*;
use crate::geo::{MapViewport, Position};

/// Split layout bounds. Drag candidates are accepted only when strictly
/// between `min_panel_px` and `viewport_width - min_map_px`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub default_panel_width_px: i32,
    pub min_panel_px: i32,
    pub min_map_px: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_panel_width_px: DEFAULT_PANEL_WIDTH_PX,
            min_panel_px: MIN_PANEL_WIDTH_PX,
            min_map_px: MIN_MAP_WIDTH_PX,
        }
    }
}

/// Stroke used for float tracks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackStyle {
    pub color: &'static str,
    pub weight_px: f64,
    pub opacity: f64,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            color: TRACK_COLOR,
            weight_px: TRACK_WEIGHT_PX,
            opacity: TRACK_OPACITY,
        }
    }
}

/// Circular badge used for the latest-position marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub class_name: &'static str,
    pub size_px: u32,
    pub fill: &'static str,
    pub border: &'static str,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            class_name: BADGE_CLASS,
            size_px: BADGE_SIZE_PX,
            fill: BADGE_FILL,
            border: BADGE_BORDER,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayStyle {
    pub track: TrackStyle,
    pub badge: BadgeStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
    pub fallback_view: MapViewport,
    pub min_fit_zoom: f64,
    pub max_fit_zoom: f64,
    pub fit_padding_px: f64,
    pub overlay: OverlayStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: TILE_URL,
            tile_attribution: TILE_ATTRIBUTION,
            fallback_view: MapViewport {
                center: default_center(),
                zoom: DEFAULT_ZOOM,
            },
            min_fit_zoom: MIN_FIT_ZOOM,
            max_fit_zoom: MAX_FIT_ZOOM,
            fit_padding_px: FIT_PADDING_PX,
            overlay: OverlayStyle::default(),
        }
    }
}

fn default_center() -> Position {
    let [lat, lon] = DEFAULT_CENTER;
    Position::new(lat, lon).unwrap_or(Position::ORIGIN)
}
