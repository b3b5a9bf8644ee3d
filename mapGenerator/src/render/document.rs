use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::constants::{
    LEAFLET_CSS_URL,
    LEAFLET_JS_URL,
    MAP_ELEMENT_ID,
    MOUSE_POSITION_CSS_URL,
    MOUSE_POSITION_JS_URL,
};
use crate::config::map_config::MapConfig;
use crate::models::coordinate::Coordinate;
use crate::utils::logging::{self, OperationCategory, RenderType};
use super::script::click_handler_script;
use super::template::{render, script_json, RenderError, MAP_PAGE_TEMPLATE};

// The `String` fields hold JSON and are inserted raw into the script block
#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    leaflet_css: &'static str,
    mouse_position_css: &'static str,
    leaflet_js: &'static str,
    mouse_position_js: &'static str,
    map_id: &'static str,
    map_id_literal: String,
    map_options: String,
    tile_url: String,
    tile_options: String,
    mouse_position_options: String,
    click_handler: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: Coordinate,
    zoom: u8,
    zoom_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MousePositionOptions<'a> {
    position: &'a str,
    separator: &'a str,
    empty_string: &'a str,
    lng_first: bool,
    num_digits: u8,
    prefix: &'a str,
}

/// A fully rendered, self-contained map page.
#[derive(Debug, Clone)]
pub struct MapDocument {
    center: Coordinate,
    zoom: u8,
    html: String,
}

impl MapDocument {
    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }
}

#[instrument(skip_all, fields(center = %config.center, zoom = config.zoom))]
pub fn create_document(config: &MapConfig) -> Result<MapDocument, RenderError> {
    let _timing = logging::start_timing("create_document",
        OperationCategory::Render { subcategory: RenderType::Page });

    let map_options = MapOptions {
        center: config.center,
        zoom: config.zoom,
        zoom_control: true,
    };
    let tile_options = TileOptions {
        attribution: &config.tiles.attribution,
        max_zoom: config.tiles.max_zoom,
    };
    let mouse_position_options = MousePositionOptions {
        position: &config.mouse_position.position,
        separator: &config.mouse_position.separator,
        empty_string: &config.mouse_position.empty_string,
        lng_first: false,
        num_digits: config.mouse_position.num_digits,
        prefix: &config.mouse_position.prefix,
    };

    let click_handler = {
        let _timing = logging::start_timing("click_handler_script",
            OperationCategory::Render { subcategory: RenderType::Script });
        click_handler_script()?
    };

    let context = PageContext {
        title: &config.title,
        leaflet_css: LEAFLET_CSS_URL,
        mouse_position_css: MOUSE_POSITION_CSS_URL,
        leaflet_js: LEAFLET_JS_URL,
        mouse_position_js: MOUSE_POSITION_JS_URL,
        map_id: MAP_ELEMENT_ID,
        map_id_literal: script_json(MAP_ELEMENT_ID)?,
        map_options: script_json(&map_options)?,
        tile_url: script_json(&config.tiles.url)?,
        tile_options: script_json(&tile_options)?,
        mouse_position_options: script_json(&mouse_position_options)?,
        click_handler,
    };

    let html = render(MAP_PAGE_TEMPLATE, &context)?;

    debug!(bytes = html.len(), "Rendered map page");
    info!(center = %config.center, zoom = config.zoom, "Map document created");

    Ok(MapDocument {
        center: config.center,
        zoom: config.zoom,
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_centered_on_davao() {
        let doc = create_document(&MapConfig::default()).unwrap();
        assert_eq!(doc.center(), Coordinate::new(7.0731, 125.6128));
        assert_eq!(doc.zoom(), 13);
        assert!(doc.html().contains(r#"{"center":[7.0731,125.6128],"zoom":13,"zoomControl":true}"#));
    }

    #[test]
    fn test_page_structure() {
        let doc = create_document(&MapConfig::default()).unwrap();
        let html = doc.html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<div id=\"map\"></div>"));
        assert!(html.contains("L.tileLayer(\"https://tile.openstreetmap.org/{z}/{x}/{y}.png\""));
        assert!(html.contains("L.control.mousePosition({\"position\":\"bottomright\""));
        assert!(!html.contains("{{"));
        assert_eq!(html.matches("</script>").count(), 4);
    }

    #[test]
    fn test_marker_script_follows_map_creation() {
        let doc = create_document(&MapConfig::default()).unwrap();
        let html = doc.html();

        let map_created = html.find("var map = L.map(").unwrap();
        let handler = html.find("map.on('click'").unwrap();
        assert!(map_created < handler);
    }

    #[test]
    fn test_exactly_one_block_defines_marker_state() {
        let doc = create_document(&MapConfig::default()).unwrap();
        let defining: Vec<&str> = doc
            .html()
            .split("<script>")
            .skip(1)
            .filter(|block| {
                block.contains("var pickupMarker")
                    || block.contains("var destinationMarker")
                    || block.contains("var currentMode")
            })
            .collect();

        assert_eq!(defining.len(), 1);
        let block = defining[0];
        assert!(block.contains("var pickupMarker"));
        assert!(block.contains("var destinationMarker"));
        assert!(block.contains("var currentMode"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = create_document(&MapConfig::default()).unwrap();
        let second = create_document(&MapConfig::default()).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_custom_center_and_title() {
        let config = MapConfig {
            title: "Rides & <More>".to_string(),
            center: Coordinate::new(10.3157, 123.8854),
            zoom: 12,
            ..MapConfig::default()
        };
        let doc = create_document(&config).unwrap();
        assert!(doc.html().contains("<title>Rides &amp; &lt;More&gt;</title>"));
        assert!(doc.html().contains(r#""center":[10.3157,123.8854],"zoom":12"#));
    }

    #[test]
    fn test_config_text_cannot_end_script_block() {
        let mut config = MapConfig::default();
        config.tiles.attribution = "tiles</script><script>alert(1)</script>".to_string();

        let doc = create_document(&config).unwrap();
        assert_eq!(doc.html().matches("</script>").count(), 4);
        assert!(doc.html().contains(r#""attribution":"tiles<\/script><script>alert(1)<\/script>""#));
    }
}
