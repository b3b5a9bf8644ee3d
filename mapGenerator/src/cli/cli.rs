use std::path::Path;
use clap::Parser;

use crate::config::constants::OUTPUT_FILENAME;

#[derive(Parser)]
#[command(author, version, about = "Generate the Davao City taxi pickup/destination map", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = OUTPUT_FILENAME)]
    output: String,

    #[arg(long, help = "JSON file overriding the default map settings")]
    config: Option<String>,

    #[arg(long, help = "Write the map without opening a browser", default_value_t = false)]
    no_browser: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,
}

// Add getter methods for all fields
impl Args {
    pub fn output(&self) -> &Path {
        Path::new(&self.output)
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref().map(Path::new)
    }

    pub fn no_browser(&self) -> bool {
        self.no_browser
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_flagless_run() {
        let args = Args::parse_from(["davao_taxi_map"]);
        assert_eq!(args.output(), Path::new("davao_taxi_map.html"));
        assert!(args.config().is_none());
        assert!(!args.no_browser());
        assert!(!args.debug_logging());
        assert!(!args.enable_timing());
    }

    #[test]
    fn test_parses_flags() {
        let args = Args::parse_from([
            "davao_taxi_map", "-o", "out/map.html", "--config", "map.json", "--no-browser", "--enable-timing",
        ]);
        assert_eq!(args.output(), Path::new("out/map.html"));
        assert_eq!(args.config(), Some(Path::new("map.json")));
        assert!(args.no_browser());
        assert!(args.enable_timing());
    }
}
