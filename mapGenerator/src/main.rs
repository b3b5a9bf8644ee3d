use anyhow::Context;
use clap::Parser;
use tracing::warn;

use davao_taxi_map::cli::cli::Args;
use davao_taxi_map::config::map_config::MapConfig;
use davao_taxi_map::render::document::create_document;
use davao_taxi_map::output::writer::write_to_file;
use davao_taxi_map::output::browser::open_in_browser;
use davao_taxi_map::utils::logging::{self, OperationCategory, FileIOType};
use davao_taxi_map::utils::status;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging())?;

    status::print_lines(&status::banner_lines());

    let config = load_config(&args)?;
    let doc = create_document(&config).context("Failed to render map document")?;

    let absolute = write_to_file(&doc, args.output())?;
    status::print_lines(&status::saved_lines(&args.output().display().to_string(), &absolute));

    // A failed launch still leaves a usable file behind
    if args.no_browser() {
        println!("{}", status::skipped_browser_line());
    } else {
        let opened = open_in_browser(&absolute).map_err(|e| {
            warn!(error = %e, "Could not open map in browser");
            e.to_string()
        });
        println!("{}", status::browser_line(opened));
    }

    status::print_lines(&status::usage_lines());

    logging::print_timing_report();

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<MapConfig> {
    let Some(path) = args.config() else {
        return Ok(MapConfig::default());
    };

    let _timing = logging::start_timing("load_config",
        OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });

    MapConfig::load_from_file(path)
        .with_context(|| format!("Failed to load map config from {}", path.display()))
}
