//! Loads image sources as paths relative to a base directory. Absolute paths
//! and anything that resolves outside the base are refused.

use folio_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base_path = base_path.as_ref().to_path_buf();
        let canonical_base = base_path.canonicalize().ok();
        Self {
            base_path,
            canonical_base,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, src: &str) -> Option<PathBuf> {
        let src = src.strip_prefix("file://").unwrap_or(src);
        let relative = Path::new(src);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.base_path.join(relative);
        match (full_path.canonicalize(), &self.canonical_base) {
            (Ok(canonical), Some(base)) if canonical.starts_with(base) => Some(canonical),
            (Ok(_), Some(_)) => None,
            _ => Some(full_path),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, src: &str) -> Result<SharedResourceData, ResourceError> {
        let path = self
            .resolve(src)
            .ok_or_else(|| ResourceError::NotFound(format!("{src} (outside resource directory)")))?;

        std::fs::read(&path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(src.to_string())
            } else {
                ResourceError::LoadFailed {
                    src: src.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, src: &str) -> bool {
        self.resolve(src).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
