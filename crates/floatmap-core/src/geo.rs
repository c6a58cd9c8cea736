//! Geographic primitives and the Web Mercator math used to fit the initial
//! map view around the float catalog.

use glam::DVec2;
use serde::Deserialize;

use crate::catalog::CatalogError;
use crate::constants::{MERCATOR_MAX_LAT, TILE_SIZE_PX};

/// A validated WGS84 coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "[f64; 2]")]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

impl Position {
    pub const ORIGIN: Position = Position {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CatalogError> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !(lat_ok && lon_ok) {
            return Err(CatalogError::InvalidPosition {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `"lat, lon"` with a fixed number of decimals.
    pub fn format_fixed(&self, decimals: usize) -> String {
        format!(
            "{:.*}, {:.*}",
            decimals, self.latitude, decimals, self.longitude
        )
    }
}

impl TryFrom<[f64; 2]> for Position {
    type Error = CatalogError;

    fn try_from([lat, lon]: [f64; 2]) -> Result<Self, Self::Error> {
        Position::new(lat, lon)
    }
}

/// Axis-aligned lat/lon box. Does not handle antimeridian wrap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn around(p: Position) -> Self {
        Self {
            south: p.latitude,
            west: p.longitude,
            north: p.latitude,
            east: p.longitude,
        }
    }

    pub fn extend(&mut self, p: Position) {
        self.south = self.south.min(p.latitude);
        self.north = self.north.max(p.latitude);
        self.west = self.west.min(p.longitude);
        self.east = self.east.max(p.longitude);
    }

    pub fn from_positions<'a>(mut it: impl Iterator<Item = &'a Position>) -> Option<Self> {
        let mut b = GeoBounds::around(*it.next()?);
        for p in it {
            b.extend(*p);
        }
        Some(b)
    }
}

/// Center and zoom the map surface is mounted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewport {
    pub center: Position,
    pub zoom: f64,
}

/// Project to normalized Web Mercator space, both axes in `[0, 1]`, y down.
pub fn mercator_unit(p: Position) -> DVec2 {
    let lat = p.latitude.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT).to_radians();
    let x = (p.longitude + 180.0) / 360.0;
    let y = 0.5 - (lat.tan() + 1.0 / lat.cos()).ln() / (2.0 * std::f64::consts::PI);
    DVec2::new(x, y)
}

/// Inverse of [`mercator_unit`].
pub fn mercator_unit_inverse(v: DVec2) -> (f64, f64) {
    let lon = v.x * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * v.y);
    let lat = n.sinh().atan().to_degrees();
    (lat, lon)
}

/// Largest zoom (clamped to `[min_zoom, max_zoom]`) at which `bounds` fits
/// into a `size_px` container with `padding_px` kept free on each side.
///
/// Returns `None` when the container is too small to hold anything after
/// padding.
pub fn fit_bounds(
    bounds: &GeoBounds,
    size_px: DVec2,
    padding_px: f64,
    min_zoom: f64,
    max_zoom: f64,
) -> Option<MapViewport> {
    let avail = size_px - DVec2::splat(2.0 * padding_px);
    if avail.x <= 0.0 || avail.y <= 0.0 {
        return None;
    }
    let nw = mercator_unit(Position {
        latitude: bounds.north,
        longitude: bounds.west,
    });
    let se = mercator_unit(Position {
        latitude: bounds.south,
        longitude: bounds.east,
    });
    let span = (se - nw).abs();
    let mid = (nw + se) * 0.5;

    // world size at zoom z is TILE_SIZE * 2^z pixels
    let zoom_for = |span_unit: f64, avail_px: f64| {
        if span_unit <= f64::EPSILON {
            max_zoom
        } else {
            (avail_px / (span_unit * TILE_SIZE_PX)).log2()
        }
    };
    let zoom = zoom_for(span.x, avail.x)
        .min(zoom_for(span.y, avail.y))
        .floor()
        .clamp(min_zoom, max_zoom);

    let (lat, lon) = mercator_unit_inverse(mid);
    let center = Position::new(lat, lon).ok()?;
    Some(MapViewport { center, zoom })
}
