//! Registers the stock map components and runs a search query against them.
//!
//! ```text
//! cargo run --example palette -- "projection of the map"
//! ```

use abcmap_ui_search::{ComponentDescriptor, ComponentRegistry};
use anyhow::Result;

/// Components the map frontend registers at startup.
fn stock_components() -> Vec<ComponentDescriptor> {
    vec![
        ComponentDescriptor::new("DrawTools", "draw points, lines and polygons on the map"),
        ComponentDescriptor::new("LayerList", "show and reorder the layers of the map"),
        ComponentDescriptor::new("ScaleSelector", "set the scale of the map"),
        ComponentDescriptor::new("ProjectionSelector", "change the projection of the map"),
        ComponentDescriptor::new("WmsSettings", "add a layer from a remote wms server"),
        ComponentDescriptor::new("ExportDialog", "export the map as png or pdf"),
        ComponentDescriptor::new("TextFrames", "add text frames to the layout"),
        ComponentDescriptor::new("NorthArrow", "add a north arrow to the layout"),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = if args.is_empty() {
        "layers of the map".to_string()
    } else {
        args.join(" ")
    };

    let mut registry = ComponentRegistry::new();
    registry.register_all(stock_components())?;

    println!("Query: {query:?}");
    let hits = registry.search(&query);
    if hits.is_empty() {
        println!("No matching components");
        return Ok(());
    }

    for hit in hits {
        println!(
            "  {:>2}  {:<20} {}",
            hit.score, hit.name, hit.component.description
        );
    }

    Ok(())
}
