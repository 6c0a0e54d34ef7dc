use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use folio_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::sync::Arc;

/// Decodes the payload of a `data:[<mediatype>][;base64],<data>` URL.
///
/// Returns `Ok(None)` when `src` is not a data URL at all.
pub fn decode_data_url(src: &str) -> Result<Option<Vec<u8>>, ResourceError> {
    let Some(rest) = src.trim().strip_prefix("data:") else {
        return Ok(None);
    };
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ResourceError::InvalidFormat("data URL without ',' separator".to_string()))?;

    if header.split(';').any(|p| p.eq_ignore_ascii_case("base64")) {
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        STANDARD
            .decode(compact)
            .map(Some)
            .map_err(|e| ResourceError::InvalidFormat(format!("bad base64 in data URL: {e}")))
    } else {
        Ok(Some(payload.as_bytes().to_vec()))
    }
}

/// Serves `data:` URLs itself and forwards every other source to `inner`.
#[derive(Debug)]
pub struct DataUrlResourceProvider<P> {
    inner: P,
}

impl<P: ResourceProvider> DataUrlResourceProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: ResourceProvider> ResourceProvider for DataUrlResourceProvider<P> {
    fn load(&self, src: &str) -> Result<SharedResourceData, ResourceError> {
        match decode_data_url(src)? {
            Some(bytes) => Ok(Arc::new(bytes)),
            None => {
                log::debug!("Delegating image source to {}", self.inner.name());
                self.inner.load(src)
            }
        }
    }

    fn exists(&self, src: &str) -> bool {
        match decode_data_url(src) {
            Ok(Some(_)) => true,
            Ok(None) => self.inner.exists(src),
            Err(_) => false,
        }
    }

    fn name(&self) -> &'static str {
        "DataUrlResourceProvider"
    }
}
