use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::config::constants::{DESTINATION_COLOR, ICON_HEIGHT, ICON_WIDTH, PICKUP_COLOR};
use crate::render::template::{render, RenderError, PIN_SVG_TEMPLATE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    Pickup,
    Destination,
}

impl MarkerRole {
    pub const ALL: [MarkerRole; 2] = [MarkerRole::Pickup, MarkerRole::Destination];

    pub fn color(&self) -> &'static str {
        match self {
            MarkerRole::Pickup => PICKUP_COLOR,
            MarkerRole::Destination => DESTINATION_COLOR,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            MarkerRole::Pickup => 'P',
            MarkerRole::Destination => 'D',
        }
    }

    pub fn popup_label(&self) -> &'static str {
        match self {
            MarkerRole::Pickup => "<b>🚖 Pickup Location</b>",
            MarkerRole::Destination => "<b>🎯 Destination</b>",
        }
    }

    /// Name of the script variable holding the live marker for this role.
    pub fn marker_variable(&self) -> &'static str {
        match self {
            MarkerRole::Pickup => "pickupMarker",
            MarkerRole::Destination => "destinationMarker",
        }
    }

    pub fn icon_variable(&self) -> &'static str {
        match self {
            MarkerRole::Pickup => "greenIcon",
            MarkerRole::Destination => "redIcon",
        }
    }

    pub fn icon(&self) -> Result<MarkerIcon, RenderError> {
        MarkerIcon::for_role(*self)
    }
}

/// Options object handed to `L.icon(...)`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon_url: String,
    pub icon_size: [i32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

impl MarkerIcon {
    pub fn for_role(role: MarkerRole) -> Result<Self, RenderError> {
        let width = ICON_WIDTH as i32;
        let height = ICON_HEIGHT as i32;

        Ok(Self {
            icon_url: svg_data_uri(&pin_svg(role)?),
            icon_size: [width, height],
            // Tip of the pin sits on the clicked point
            icon_anchor: [width / 2, height],
            popup_anchor: [0, -height],
        })
    }
}

// Teardrop pin with a single bold glyph near the top
#[derive(Serialize)]
struct PinContext {
    width: u32,
    height: u32,
    fill: &'static str,
    glyph: char,
}

pub fn pin_svg(role: MarkerRole) -> Result<String, RenderError> {
    let context = PinContext {
        width: ICON_WIDTH,
        height: ICON_HEIGHT,
        fill: role.color(),
        glyph: role.glyph(),
    };
    render(PIN_SVG_TEMPLATE, &context)
}

pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
