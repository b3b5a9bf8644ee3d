// Main module declarations for the taxi map generator

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod map_config;
}

// Model definitions
pub mod models {
    pub mod coordinate;
    pub mod marker;
    pub mod session;
}

// HTML rendering
pub mod render {
    pub mod template;
    pub mod script;
    pub mod document;
}

// Writing the artifact and handing it to the browser
pub mod output {
    pub mod writer;
    pub mod browser;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod status;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::config::map_config::MapConfig;
pub use crate::models::coordinate::Coordinate;
pub use crate::models::marker::MarkerRole;
pub use crate::render::document::{create_document, MapDocument};
pub use crate::output::writer::write_to_file;
pub use crate::output::browser::open_in_browser;
