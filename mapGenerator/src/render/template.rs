//! Handlebars registry for the page, script and icon templates.
//!
//! Strict mode is on, so a template slot without a value fails rendering.
//! Pre-serialized JSON is inserted with `{{{...}}}`; everything else goes
//! through the default HTML escaping.

use anyhow::Error;
use handlebars::Handlebars;
use lazy_static::lazy_static;
use serde::Serialize;

pub const MAP_PAGE_TEMPLATE: &str = "MAP_PAGE_TEMPLATE";
pub const CLICK_HANDLER_TEMPLATE: &str = "CLICK_HANDLER_TEMPLATE";
pub const PIN_SVG_TEMPLATE: &str = "PIN_SVG_TEMPLATE";

fn get_templates() -> Result<Handlebars<'static>, Error> {
    let mut h = Handlebars::new();
    h.set_strict_mode(true);
    h.register_template_string(
        MAP_PAGE_TEMPLATE,
        include_str!("../../templates/map_page.html.hbs"),
    )?;
    h.register_template_string(
        CLICK_HANDLER_TEMPLATE,
        include_str!("../../templates/click_handler.js.hbs"),
    )?;
    h.register_template_string(
        PIN_SVG_TEMPLATE,
        include_str!("../../templates/pin.svg.hbs"),
    )?;

    Ok(h)
}

lazy_static! {
    pub static ref HBR: Handlebars<'static> = get_templates().expect("Failed to parse templates");
}

#[derive(Debug)]
pub enum RenderError {
    JsonError(serde_json::Error),
    TemplateError(handlebars::RenderError),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::JsonError(err)
    }
}

impl From<handlebars::RenderError> for RenderError {
    fn from(err: handlebars::RenderError) -> Self {
        RenderError::TemplateError(err)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::JsonError(e) => write!(f, "JSON error: {}", e),
            RenderError::TemplateError(e) => write!(f, "Template error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

pub fn render<T: Serialize>(template: &str, context: &T) -> Result<String, RenderError> {
    Ok(HBR.render(template, context)?)
}

/// JSON text that is safe to place inside a `<script>` element.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    // `<\/` is the same string to JavaScript but cannot close the element
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
