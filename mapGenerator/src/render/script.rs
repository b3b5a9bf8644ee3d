use serde::Serialize;
use tracing::debug;

use crate::models::marker::MarkerRole;
use crate::models::session::ClickMode;
use super::template::{render, script_json, RenderError, CLICK_HANDLER_TEMPLATE};

// Variable names go through the template as plain values; every other field
// is JSON, which doubles as a JavaScript literal.
#[derive(Serialize)]
struct ClickHandlerContext {
    pickup_marker: &'static str,
    destination_marker: &'static str,
    pickup_icon: &'static str,
    destination_icon: &'static str,
    pickup_icon_options: String,
    destination_icon_options: String,
    pickup_popup: String,
    destination_popup: String,
    pickup_mode: String,
    destination_mode: String,
}

/// Builds the body of the marker script block.
///
/// First click places the pickup marker, every later click places (or moves)
/// the destination marker. The script expects a Leaflet map in `map`.
pub fn click_handler_script() -> Result<String, RenderError> {
    let pickup = MarkerRole::Pickup;
    let destination = MarkerRole::Destination;

    let context = ClickHandlerContext {
        pickup_marker: pickup.marker_variable(),
        destination_marker: destination.marker_variable(),
        pickup_icon: pickup.icon_variable(),
        destination_icon: destination.icon_variable(),
        pickup_icon_options: script_json(&pickup.icon()?)?,
        destination_icon_options: script_json(&destination.icon()?)?,
        pickup_popup: script_json(pickup.popup_label())?,
        destination_popup: script_json(destination.popup_label())?,
        pickup_mode: script_json(ClickMode::Pickup.as_js())?,
        destination_mode: script_json(ClickMode::Destination.as_js())?,
    };

    let script = render(CLICK_HANDLER_TEMPLATE, &context)?;
    debug!(bytes = script.len(), "Rendered click handler script");
    Ok(script)
}
