pub mod elements;
#[cfg(feature = "reqwest")]
pub mod nominatim;
#[cfg(feature = "reqwest")]
pub mod osm_collect;
#[cfg(feature = "reqwest")]
pub mod overpass;

#[cfg(feature = "reqwest")]
use crate::error::{Error, Result};

/// Turn a non-success HTTP response into [`Error::Upstream`]
#[cfg(feature = "reqwest")]
pub(crate) fn ensure_success(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(Error::Upstream {
        status: status.as_u16(),
        body,
    })
}
