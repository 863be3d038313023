use std::path::PathBuf;
use std::time::Duration;

use crate::collect::global_variables::{
    get_output_path, NOMINATIM_URL, NETWORK_TYPE, OVERPASS_URL, PLACE_NAME, USER_AGENT,
};
use crate::collect::network_type::NetworkType;

/// Settings for one extraction run
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Human-readable place name resolved by the geocoder
    pub place: String,
    pub network_type: NetworkType,
    /// Nominatim base URL
    pub nominatim_url: String,
    /// Overpass interpreter URL
    pub overpass_url: String,
    pub user_agent: String,
    /// HTTP client timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Destination of the GeoJSON document
    pub output_path: PathBuf,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            place: PLACE_NAME.to_string(),
            network_type: NETWORK_TYPE,
            nominatim_url: NOMINATIM_URL.to_string(),
            overpass_url: OVERPASS_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
            output_path: get_output_path(),
        }
    }
}

impl ProcessorConfig {
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn with_network_type(mut self, network_type: NetworkType) -> Self {
        self.network_type = network_type;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
