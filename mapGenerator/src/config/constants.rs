// Map Constants
pub const DAVAO_CENTER_LAT: f64 = 7.0731;
pub const DAVAO_CENTER_LON: f64 = 125.6128;
pub const DEFAULT_ZOOM: u8 = 13;
pub const MAX_TILE_ZOOM: u8 = 19;
pub const MAP_TITLE: &str = "Davao City Taxi Booking";
pub const MAP_ELEMENT_ID: &str = "map";

// Output
pub const OUTPUT_FILENAME: &str = "davao_taxi_map.html";

// Tile source (OpenStreetMap standard layer)
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

// Client-side libraries, fetched by the browser
pub const LEAFLET_JS_URL: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.js";
pub const LEAFLET_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.css";
pub const MOUSE_POSITION_JS_URL: &str =
    "https://cdn.jsdelivr.net/gh/ardhi/Leaflet.MousePosition/src/L.Control.MousePosition.min.js";
pub const MOUSE_POSITION_CSS_URL: &str =
    "https://cdn.jsdelivr.net/gh/ardhi/Leaflet.MousePosition/src/L.Control.MousePosition.min.css";

// Mouse position readout defaults
pub const MOUSE_POSITION_CORNER: &str = "bottomright";
pub const MOUSE_POSITION_SEPARATOR: &str = " : ";
pub const MOUSE_POSITION_EMPTY: &str = "Unavailable";
pub const MOUSE_POSITION_DIGITS: u8 = 5;

// Marker icon geometry (pixels)
pub const ICON_WIDTH: u32 = 30;
pub const ICON_HEIGHT: u32 = 45;

// Marker colors
pub const PICKUP_COLOR: &str = "#10b981";      // green
pub const DESTINATION_COLOR: &str = "#ef4444"; // red

// Console
pub const BANNER_RULE_WIDTH: usize = 50;
