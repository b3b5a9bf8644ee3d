use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::models::coordinate::Coordinate;
use crate::config::constants::{
    DEFAULT_ZOOM,
    MAX_TILE_ZOOM,
    MAP_TITLE,
    OSM_TILE_URL,
    OSM_ATTRIBUTION,
    MOUSE_POSITION_CORNER,
    MOUSE_POSITION_SEPARATOR,
    MOUSE_POSITION_EMPTY,
    MOUSE_POSITION_DIGITS,
};

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    InvalidCenter(Coordinate),
    InvalidZoom(u8),
    ZoomAboveTileMax {
        zoom: u8,
        max_zoom: u8,
    },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::JsonError(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::InvalidCenter(c) => write!(f, "Invalid map center: {}", c),
            ConfigError::InvalidZoom(z) => write!(f, "Invalid zoom level {} (expected 0-{})", z, MAX_TILE_ZOOM),
            ConfigError::ZoomAboveTileMax { zoom, max_zoom } => {
                write!(f, "Zoom level {} is above the tile layer maximum {}", zoom, max_zoom)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayerConfig {
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            max_zoom: MAX_TILE_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MousePositionConfig {
    pub position: String,         // Leaflet control corner
    pub separator: String,
    pub empty_string: String,     // Shown while the cursor is off the map
    pub num_digits: u8,
    pub prefix: String,
}

impl Default for MousePositionConfig {
    fn default() -> Self {
        Self {
            position: MOUSE_POSITION_CORNER.to_string(),
            separator: MOUSE_POSITION_SEPARATOR.to_string(),
            empty_string: MOUSE_POSITION_EMPTY.to_string(),
            num_digits: MOUSE_POSITION_DIGITS,
            prefix: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub title: String,
    pub center: Coordinate,
    pub zoom: u8,
    pub tiles: TileLayerConfig,
    pub mouse_position: MousePositionConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: MAP_TITLE.to_string(),
            center: Coordinate::davao_center(),
            zoom: DEFAULT_ZOOM,
            tiles: TileLayerConfig::default(),
            mouse_position: MousePositionConfig::default(),
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.center.is_valid() {
            return Err(ConfigError::InvalidCenter(self.center));
        }
        if self.zoom > MAX_TILE_ZOOM {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        if self.zoom > self.tiles.max_zoom {
            return Err(ConfigError::ZoomAboveTileMax { zoom: self.zoom, max_zoom: self.tiles.max_zoom });
        }
        Ok(())
    }

    /// Reads a JSON config; fields left out keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: MapConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_davao_at_zoom_13() {
        let config = MapConfig::default();
        assert_eq!(config.center, Coordinate::new(7.0731, 125.6128));
        assert_eq!(config.zoom, 13);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: MapConfig = serde_json::from_str(r#"{"zoom": 15}"#).unwrap();
        assert_eq!(config.zoom, 15);
        assert_eq!(config.center, Coordinate::davao_center());
        assert_eq!(config.tiles, TileLayerConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut config = MapConfig::default();
        config.zoom = 25;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidZoom(25))));

        let mut config = MapConfig::default();
        config.center = Coordinate::new(95.0, 125.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCenter(_))));
    }

    #[test]
    fn test_rejects_zoom_beyond_tile_layer() {
        let mut config = MapConfig::default();
        config.tiles.max_zoom = 12;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZoomAboveTileMax { zoom: 13, max_zoom: 12 })
        ));

        config.zoom = 12;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("davao_taxi_map_missing_config.json");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(MapConfig::load_from_file(&path), Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_from_file_validates() {
        let path = std::env::temp_dir().join("davao_taxi_map_bad_zoom_config.json");
        std::fs::write(&path, r#"{"zoom": 42}"#).unwrap();
        let result = MapConfig::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::InvalidZoom(42))));
    }
}
