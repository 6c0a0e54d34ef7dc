//! Image sources in rendered content are plain strings (`src` attributes). The
//! layout engine hands them to a [`ResourceProvider`] and never touches the
//! filesystem or the network itself.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{src}': {message}")]
    LoadFailed { src: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

pub type SharedResourceData = Arc<Vec<u8>>;

/// Resolves an image `src` to its bytes.
pub trait ResourceProvider: Send + Sync + Debug {
    fn load(&self, src: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, src: &str) -> bool {
        self.load(src).is_ok()
    }

    /// Name used in log messages.
    fn name(&self) -> &'static str;
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Arc<P> {
    fn load(&self, src: &str) -> Result<SharedResourceData, ResourceError> {
        (**self).load(src)
    }

    fn exists(&self, src: &str) -> bool {
        (**self).exists(src)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A provider backed by a map of `src` to bytes. Also the default provider of
/// an export pipeline, in which case it is empty and every image becomes a
/// placeholder unless it is a `data:` URL.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, src: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let src = src.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                src: src.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(src, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, src: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                src: src.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(src)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(src.to_string()))
    }

    fn exists(&self, src: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(src))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
