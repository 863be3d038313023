use anyhow::Result;
use segment_processor::collect::OverpassFileSource;
use segment_processor::config::ProcessorConfig;
use segment_processor::geometric::road::Road;

/// Example: build segments from a saved Overpass response instead of the live API
///
/// cargo run --example segments_from_overpass_file -- <overpass.json> [output.geojson]
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .unwrap_or_else(|| "tests/data/overpass_sample.json".to_string());
    let output = args
        .next()
        .unwrap_or_else(|| "./output/sample_segments.geojson".to_string());

    println!("=== Example: Road segments from an Overpass file ===\n");

    let config = ProcessorConfig::default().with_output_path(&output);
    let road = Road::with_source(config, Box::new(OverpassFileSource::new(&input))).run()?;

    if let Some(segments) = road.get_segments() {
        println!("  - Number of road segments: {}", segments.len());
    }

    let output_file = road.to_geojson()?;
    println!("\n✅ Processing complete!");
    println!("  - Output file: {:?}", output_file);

    Ok(())
}
