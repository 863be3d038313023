use std::path::PathBuf;

use crate::collect::network_type::NetworkType;

pub const PLACE_NAME: &str = "London Borough of Brent, United Kingdom";
pub const NETWORK_TYPE: NetworkType = NetworkType::All;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const USER_AGENT: &str = concat!("segment-processor/", env!("CARGO_PKG_VERSION"));

/// Server-side Overpass timeout in seconds
pub const OVERPASS_TIMEOUT: u32 = 180;
/// Overpass area ids are relation ids offset by this value
pub const AREA_ID_OFFSET: i64 = 3_600_000_000;

pub const OUTPUT_DIR: &str = "output";
pub const OUTPUT_FILE: &str = "brent_segments.geojson";

pub const DEFAULT_COLOR: &str = "#FF0000";
pub const DEFAULT_NAME: &str = "Unnamed";
pub const DEFAULT_HIGHWAY: &str = "unknown";

/// Output file beside the crate: `<manifest dir>/output/brent_segments.geojson`
pub fn get_output_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(OUTPUT_DIR)
        .join(OUTPUT_FILE)
}
