//! CLI logic for the ragmap graph renderer.
//!
//! This module contains the core CLI logic: load configuration and catalog,
//! render the graph, and write the HTML output.

pub mod report;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use ragmap::{MapBuilder, RagmapError, catalog::Catalog};

/// Run the ragmap CLI application
///
/// Loads the catalog (or the built-in one), renders either the host page or
/// the bare graph document, and writes it to the output file.
///
/// # Errors
///
/// Returns `RagmapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Catalog errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), RagmapError> {
    info!(
        catalog_path:? = args.catalog,
        output_path = args.output;
        "Rendering knowledge graph"
    );

    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.physics {
        app_config.set_physics(true);
    }

    let builder = MapBuilder::new(app_config);

    // Load the catalog
    let catalog: Catalog = match &args.catalog {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            builder.load_catalog(&source)?
        }
        None => {
            info!("Using built-in catalog");
            ragmap_catalog::builtin()
        }
    };

    let graph = builder.build_graph(&catalog);

    let html = if args.graph_only {
        builder.render_html(&graph, builder.config().render().physics())?
    } else {
        builder.render_page(&graph)?
    };

    // Write output file
    fs::write(&args.output, html)?;

    info!(output_file = args.output, graph_only = args.graph_only; "HTML exported successfully");

    Ok(())
}
