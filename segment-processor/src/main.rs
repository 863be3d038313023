use anyhow::Result;
use segment_processor::config::ProcessorConfig;
use segment_processor::geometric::road::Road;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    println!("{}", "=".repeat(60));
    println!("Brent Street Segment Processor");
    println!("{}", "=".repeat(60));

    let road = Road::new(ProcessorConfig::default())?.run()?;
    let output_file = road.to_geojson()?;

    println!("{}", "=".repeat(60));
    println!("Processing complete! Output: {}", output_file.display());
    println!("{}", "=".repeat(60));

    Ok(())
}
