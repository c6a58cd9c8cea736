//! Turns the float catalog into map overlays: a track line per float with
//! history and a labeled badge marker at the latest position.

use crate::catalog::{Catalog, Float, FloatId};
use crate::config::{BadgeStyle, OverlayStyle, TrackStyle};
use crate::constants::POPUP_COORD_DECIMALS;
use crate::geo::Position;
use crate::surface::MapSurface;

#[derive(Clone, Debug, PartialEq)]
pub struct TrackLine {
    pub path: Vec<Position>,
    pub style: TrackStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub name: String,
    pub float_id: FloatId,
    pub at: Position,
}

impl Popup {
    pub fn coordinates(&self) -> String {
        self.at.format_fixed(POPUP_COORD_DECIMALS)
    }

    pub fn text(&self) -> String {
        format!(
            "{}\nID: {}\nPosition: {}",
            self.name,
            self.float_id,
            self.coordinates()
        )
    }

    pub fn html(&self) -> String {
        format!(
            "<b>{}</b><br>ID: {}<br>Position: {}",
            escape_html(&self.name),
            self.float_id,
            self.coordinates()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatMarker {
    pub at: Position,
    pub label: String,
    pub style: BadgeStyle,
    pub popup: Popup,
}

impl FloatMarker {
    /// Inner HTML for the circular badge icon.
    pub fn badge_html(&self) -> String {
        let s = &self.style;
        format!(
            "<div class=\"{}\" style=\"width:{}px;height:{}px;line-height:{}px;border-radius:50%;background:{};border:2px solid {};\">{}</div>",
            s.class_name,
            s.size_px,
            s.size_px,
            s.size_px,
            s.fill,
            s.border,
            escape_html(&self.label)
        )
    }
}

/// Everything drawn for one float. Keyed by `float_id` on the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatOverlay {
    pub float_id: FloatId,
    pub track: Option<TrackLine>,
    pub marker: FloatMarker,
}

pub fn float_overlay(float: &Float, style: &OverlayStyle) -> FloatOverlay {
    let latest = float.latest();
    let track = float.has_track().then(|| TrackLine {
        path: float.positions().to_vec(),
        style: style.track,
    });
    FloatOverlay {
        float_id: float.id(),
        track,
        marker: FloatMarker {
            at: latest,
            label: float.name().to_string(),
            style: style.badge,
            popup: Popup {
                name: float.name().to_string(),
                float_id: float.id(),
                at: latest,
            },
        },
    }
}

pub fn overlays(catalog: &Catalog, style: &OverlayStyle) -> Vec<FloatOverlay> {
    catalog.iter().map(|f| float_overlay(f, style)).collect()
}

/// Place every float of the catalog on `surface`. Safe to call repeatedly.
pub fn render_catalog<S: MapSurface + ?Sized>(catalog: &Catalog, style: &OverlayStyle, surface: &S) {
    let mut tracks = 0usize;
    for overlay in overlays(catalog, style) {
        tracks += overlay.track.is_some() as usize;
        surface.place_overlay(&overlay);
    }
    log::debug!(
        "[overlay] placed {} markers, {} tracks",
        catalog.len(),
        tracks
    );
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup() {
        assert_eq!(escape_html("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
        assert_eq!(escape_html("F-387"), "F-387");
    }

    #[test]
    fn popup_html_escapes_name() {
        let p = Popup {
            name: "<F>".into(),
            float_id: 7,
            at: Position::new(1.0, 2.0).unwrap(),
        };
        assert!(p.html().starts_with("<b>&lt;F&gt;</b>"));
        assert!(p.html().ends_with("Position: 1.0000, 2.0000"));
    }
}
