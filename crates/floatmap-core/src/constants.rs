// Shared layout/map tuning constants used by the web frontend.

// Split layout
pub const DEFAULT_PANEL_WIDTH_PX: i32 = 350; // side panel width on mount
pub const MIN_PANEL_WIDTH_PX: i32 = 300; // drag candidates must exceed this
pub const MIN_MAP_WIDTH_PX: i32 = 300; // space always left to the map region

// Map view
pub const DEFAULT_CENTER: [f64; 2] = [15.0, 70.0]; // lat, lon (Arabian Sea)
pub const DEFAULT_ZOOM: f64 = 4.0;
pub const MIN_FIT_ZOOM: f64 = 2.0;
pub const MAX_FIT_ZOOM: f64 = 8.0;
pub const FIT_PADDING_PX: f64 = 48.0; // kept free around the fitted bounds on each side
pub const TILE_SIZE_PX: f64 = 256.0;

pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; OpenStreetMap contributors &copy; CARTO";

// Web Mercator latitude limit
pub const MERCATOR_MAX_LAT: f64 = 85.051_128_78;

// Overlay styles
pub const TRACK_COLOR: &str = "#38bdf8";
pub const TRACK_WEIGHT_PX: f64 = 2.0;
pub const TRACK_OPACITY: f64 = 0.8;

pub const BADGE_CLASS: &str = "float-badge";
pub const BADGE_SIZE_PX: u32 = 28;
pub const BADGE_FILL: &str = "#0ea5e9";
pub const BADGE_BORDER: &str = "#e0f2fe";

// Popup coordinate precision (decimal places)
pub const POPUP_COORD_DECIMALS: usize = 4;
